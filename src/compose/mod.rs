//! Line-oriented Compose document handling
//!
//! The compose file is treated as an ordered sequence of text lines rather
//! than parsed YAML, so that comments and hand-written formatting survive a
//! rewrite byte for byte. Top-level keys (zero leading whitespace, `name:`)
//! delimit blocks; everything indented below a key belongs to it.

pub mod document;
pub mod merge;

pub use document::Document;
pub use merge::{merge, remove};
