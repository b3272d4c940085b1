//! Block parser implementation.

use crate::Range;
use crate::limits::{FENCE, MAX_HEADING_LEVEL, MIN_RULE_LEN};
use crate::lines::{Line, Lines};

use super::event::BlockEvent;

/// Code fence tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Lines are classified as blocks.
    #[default]
    Normal,
    /// Lines are raw code until the next fence.
    InCodeBlock,
}

/// Block parser state.
///
/// Lives for exactly one document. The only state carried from one line to
/// the next is the fence state.
pub struct BlockParser<'a> {
    /// Input document.
    input: &'a str,
    /// Whether a fenced code block is open.
    fence_state: FenceState,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            fence_state: FenceState::Normal,
        }
    }

    /// Current fence state. After [`parse`](Self::parse) this tells whether
    /// the document ended inside an unterminated code block.
    pub fn fence_state(&self) -> FenceState {
        self.fence_state
    }

    /// Parse all lines and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        for line in Lines::new(self.input) {
            self.parse_line(line, events);
        }

        // An open fence is left open: no closing event is synthesized.
        if self.fence_state == FenceState::InCodeBlock {
            tracing::debug!("document ended inside an unterminated code fence");
        }
    }

    /// Parse a single line.
    fn parse_line(&mut self, line: Line<'a>, events: &mut Vec<BlockEvent>) {
        if line.is_blank() {
            return;
        }

        if self.fence_state == FenceState::InCodeBlock {
            let event = if is_fence(line.trimmed()) {
                self.toggle_fence(Range::empty_at(line.range().end))
            } else {
                BlockEvent::CodeLine(line.range())
            };
            events.push(event);
            return;
        }

        let event = match line.first_byte() {
            Some(b'#') => heading(line),
            Some(marker @ (b'_' | b'-' | b'*')) => rule_or_paragraph(line, marker),
            Some(b'>') => BlockEvent::BlockQuote(line.trimmed_range().skip(1)),
            Some(b'`') => self.code_fence_or_paragraph(line),
            _ => BlockEvent::Paragraph(line.range()),
        };
        events.push(event);
    }

    /// A backtick line either toggles the fence or is a plain paragraph.
    fn code_fence_or_paragraph(&mut self, line: Line<'a>) -> BlockEvent {
        if is_fence(line.trimmed()) {
            self.toggle_fence(line.trimmed_range().skip(FENCE.len()))
        } else {
            BlockEvent::Paragraph(line.range())
        }
    }

    /// Flip the fence state and return the matching marker event.
    fn toggle_fence(&mut self, info: Range) -> BlockEvent {
        match self.fence_state {
            FenceState::Normal => {
                self.fence_state = FenceState::InCodeBlock;
                tracing::trace!(lang = info.slice(self.input), "code fence opened");
                BlockEvent::CodeBlockStart { info }
            }
            FenceState::InCodeBlock => {
                self.fence_state = FenceState::Normal;
                tracing::trace!("code fence closed");
                BlockEvent::CodeBlockEnd
            }
        }
    }
}

/// A fence is any left-trimmed line starting with three backticks.
#[inline]
fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with(FENCE)
}

/// Heading from a line whose first non-space byte is `#`.
///
/// The level is the character length of the first space-delimited token,
/// whatever that token contains. Levels above six keep the surplus as
/// literal `#` text.
fn heading(line: Line<'_>) -> BlockEvent {
    let trimmed = line.trimmed();
    let (marker, text) = match trimmed.find(' ') {
        Some(space) => (&trimmed[..space], line.trimmed_range().skip(space + 1)),
        None => (trimmed, Range::empty_at(line.range().end)),
    };

    let h = marker.chars().count();
    BlockEvent::Heading {
        level: h.min(MAX_HEADING_LEVEL) as u8,
        overflow: h.saturating_sub(MAX_HEADING_LEVEL),
        text,
    }
}

/// Horizontal rule if the whole line is one run of `marker` at least three
/// long, otherwise a paragraph over the raw line.
fn rule_or_paragraph(line: Line<'_>, marker: u8) -> BlockEvent {
    let mut tokens = line.raw().split_whitespace();
    let is_rule = match (tokens.next(), tokens.next()) {
        (Some(token), None) => {
            token.len() >= MIN_RULE_LEN && token.bytes().all(|b| b == marker)
        }
        _ => false,
    };

    if is_rule {
        BlockEvent::ThematicBreak
    } else {
        BlockEvent::Paragraph(line.range())
    }
}
