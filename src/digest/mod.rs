//! Digest selection, rendering and delivery.

pub mod render;
pub mod selector;

pub use render::{render_entry, render_header};
pub use selector::{DigestReport, DigestSelector};
