//! Block-level event types.

use crate::Range;

/// Events emitted by the block parser.
///
/// Each event renders to exactly one line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// Heading. `level` is clamped to 1..=6; `overflow` counts the marker
    /// characters beyond six, which are rendered as literal `#` text.
    Heading {
        level: u8,
        overflow: usize,
        text: Range,
    },
    /// Horizontal rule (`---`, `***`, `___`).
    ThematicBreak,
    /// Blockquote content, everything after the leading `>`.
    BlockQuote(Range),
    /// Paragraph wrapping the raw line, leading spaces included.
    Paragraph(Range),
    /// Opening code fence with its language tag (possibly empty).
    CodeBlockStart { info: Range },
    /// One raw line inside a fenced code block.
    CodeLine(Range),
    /// Closing code fence.
    CodeBlockEnd,
}
