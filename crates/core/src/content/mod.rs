//! Content-stream scanners.
//!
//! These operate on already-decoded content-stream lines, one `Vec<String>`
//! per page, as handed over by an external PDF decoder. No tokenization or
//! stream decompression happens here.

mod fragments;
mod rects;

pub use fragments::{compress_pages, extract_fragments};
pub use rects::extract_rectangles;

/// Decoded content-stream lines of a single page.
pub type PageLines = Vec<String>;
