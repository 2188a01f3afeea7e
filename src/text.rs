//! Text sanitization helpers for message rendering.
//!
//! Feed titles and descriptions frequently carry HTML markup; the
//! digest messages are plain text with a small markdown subset, so tags
//! are stripped and common entities decoded before rendering.

/// Strip HTML tags and decode common entities, collapsing whitespace.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                // Skip to the closing '>'
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
            }
            '&' => {
                let mut entity = String::new();
                let mut terminated = false;
                while let Some(&c) = chars.peek() {
                    if c == ';' {
                        chars.next();
                        terminated = true;
                        break;
                    }
                    if c == '<' || c == '&' || c.is_whitespace() || entity.len() > 8 {
                        break;
                    }
                    entity.push(c);
                    chars.next();
                }
                match decode_entity(&entity) {
                    Some(decoded) if terminated => out.push(decoded),
                    _ => {
                        // Not a recognized entity, keep the raw text
                        out.push('&');
                        out.push_str(&entity);
                        if terminated {
                            out.push(';');
                        }
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a named or numeric HTML entity (without '&' and ';').
fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or(entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

/// Keep at most the first `limit` whitespace-separated tokens.
pub fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html("<p>Hello</p>"), "Hello");
        assert_eq!(strip_html("<b>Bold</b> text"), "Bold text");
        assert_eq!(strip_html("<div><p>Nested</p></div>"), "Nested");
    }

    #[test]
    fn test_strip_html_plain_text() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_html_entities() {
        assert_eq!(strip_html("&amp;"), "&");
        assert_eq!(strip_html("&lt;tag&gt;"), "<tag>");
        assert_eq!(strip_html("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(strip_html("A&nbsp;B"), "A B");
    }

    #[test]
    fn test_strip_html_numeric_entities() {
        assert_eq!(strip_html("&#65;"), "A");
        assert_eq!(strip_html("&#x41;"), "A");
        assert_eq!(strip_html("&#x3042;"), "あ");
    }

    #[test]
    fn test_strip_html_unknown_entity_kept() {
        assert_eq!(strip_html("&bogus;"), "&bogus;");
        assert_eq!(strip_html("AT&T"), "AT&T");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(strip_html("<p>  Multiple   spaces  </p>"), "Multiple spaces");
        assert_eq!(strip_html("line\none\n\ttwo"), "line one two");
    }

    #[test]
    fn test_truncate_words_short_input() {
        assert_eq!(truncate_words("one two three", 40), "one two three");
    }

    #[test]
    fn test_truncate_words_caps_tokens() {
        let text = (1..=50).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let truncated = truncate_words(&text, 40);
        assert_eq!(truncated.split_whitespace().count(), 40);
        assert!(truncated.ends_with("40"));
    }

    #[test]
    fn test_truncate_words_empty() {
        assert_eq!(truncate_words("", 40), "");
        assert_eq!(truncate_words("   ", 40), "");
    }
}
