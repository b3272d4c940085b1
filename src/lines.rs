//! Line splitting.
//!
//! Lines are split strictly on `\n`. Carriage returns are left in place, so a
//! CRLF document keeps a trailing `\r` on every line.

use memchr::memchr;

use crate::Range;

/// One line of the document, without its terminating `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a str,
    start: usize,
    indent: usize,
}

impl<'a> Line<'a> {
    fn new(input: &'a str, start: usize, end: usize) -> Self {
        let text = &input[start..end];
        let indent = text.bytes().take_while(|&b| b == b' ').count();
        Self {
            text,
            start,
            indent,
        }
    }

    /// Raw line content.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.text
    }

    /// Line content with leading spaces removed. Tabs are not trimmed.
    #[inline]
    pub fn trimmed(&self) -> &'a str {
        &self.text[self.indent..]
    }

    /// Span of the raw line in the document.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(self.start, self.start + self.text.len())
    }

    /// Span of the trimmed line in the document.
    #[inline]
    pub fn trimmed_range(&self) -> Range {
        self.range().skip(self.indent)
    }

    /// First non-space byte, if any.
    #[inline]
    pub fn first_byte(&self) -> Option<u8> {
        self.trimmed().bytes().next()
    }

    /// A line is blank when only whitespace remains after left-trim,
    /// including tabs and a trailing `\r`.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.trimmed().trim().is_empty()
    }
}

/// Iterator over the lines of a document.
///
/// Mirrors a plain split on `\n`: a document ending in `\n` yields a final
/// empty line, and an empty document yields one empty line.
///
/// # Example
/// ```
/// use linemark::Lines;
///
/// let lines: Vec<_> = Lines::new("a\n  b\n").map(|l| l.trimmed()).collect();
/// assert_eq!(lines, ["a", "b", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    input: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Lines<'a> {
    /// Create a splitter over a document.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.finished {
            return None;
        }

        let start = self.pos;
        match memchr(b'\n', &self.input.as_bytes()[start..]) {
            Some(offset) => {
                let end = start + offset;
                self.pos = end + 1;
                Some(Line::new(self.input, start, end))
            }
            None => {
                self.finished = true;
                Some(Line::new(self.input, start, self.input.len()))
            }
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
