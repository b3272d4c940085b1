//! Byte spans into the source document.
//!
//! Block events refer back into the document instead of copying line text,
//! so the whole block phase allocates nothing but the event vector.

/// Half-open byte span into a document.
///
/// Spans are only ever produced at ASCII boundaries (line feeds, spaces,
/// and markup characters), so slicing a `str` with one never splits a
/// UTF-8 sequence.
///
/// # Example
/// ```
/// use linemark::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.slice(input), "World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub const fn empty_at(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Get the text this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Drop the first `n` bytes of the range.
    #[inline]
    pub const fn skip(&self, n: usize) -> Self {
        debug_assert!(n <= self.len());
        Self {
            start: self.start + n,
            end: self.end,
        }
    }
}
