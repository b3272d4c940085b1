//! Block-level parser.
//!
//! The block parser is line-oriented. Every non-blank line becomes exactly
//! one event:
//! - Headings
//! - Horizontal rules
//! - Blockquotes
//! - Fenced code blocks (markers and raw lines)
//! - Paragraphs

mod event;
mod parser;

pub use event::BlockEvent;
pub use parser::{BlockParser, FenceState};
