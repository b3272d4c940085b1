//! HTML output writer.
//!
//! Renders block events into one flat buffer, one line per event, and keeps
//! track of where the fenced code blocks landed in that buffer so the inline
//! pass can leave them alone.

use smallvec::SmallVec;

use crate::Range;
use crate::block::BlockEvent;

/// Fixed markup for a horizontal rule.
pub const RULE_HTML: &str = r#"<div style="width: 100%; border-bottom: 2px solid #333;"></div>"#;

/// Code block regions in the output buffer. Most documents have a handful.
pub type CodeRegions = SmallVec<[Range; 4]>;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use linemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph("Hello *World*");
/// writer.code_block_start("txt");
/// writer.code_line("*raw*");
/// writer.code_block_end();
///
/// let (html, regions) = writer.finish();
/// assert_eq!(html.lines().next(), Some("<p>Hello *World*</p>"));
/// assert_eq!(regions.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    /// Closed code block regions, start of opening marker to end of closing marker.
    code_regions: CodeRegions,
    /// Start of the code block currently open, if any.
    open_code_block: Option<usize>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Each line gains a pair of short tags; reserve a quarter extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            code_regions: SmallVec::new(),
            open_code_block: None,
        }
    }

    /// Write text verbatim. No escaping is ever applied.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Render one block event from `input`.
    pub fn render_event(&mut self, input: &str, event: &BlockEvent) {
        match *event {
            BlockEvent::Heading {
                level,
                overflow,
                text,
            } => self.heading(level, overflow, text.slice(input)),
            BlockEvent::ThematicBreak => self.thematic_break(),
            BlockEvent::BlockQuote(range) => self.blockquote(range.slice(input)),
            BlockEvent::Paragraph(range) => self.paragraph(range.slice(input)),
            BlockEvent::CodeBlockStart { info } => self.code_block_start(info.slice(input)),
            BlockEvent::CodeLine(range) => self.code_line(range.slice(input)),
            BlockEvent::CodeBlockEnd => self.code_block_end(),
        }
    }

    // --- Blocks ---

    /// `<p>text</p>\n`
    #[inline]
    pub fn paragraph(&mut self, text: &str) {
        self.write_str("<p>");
        self.write_str(text);
        self.write_str("</p>\n");
    }

    /// `<hN>text</hN>\n`, with `overflow` literal `#` characters before the text.
    pub fn heading(&mut self, level: u8, overflow: usize, text: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.write_str("<h");
        self.out.push(digit);
        self.out.push('>');
        self.out.extend(std::iter::repeat_n('#', overflow));
        self.write_str(text);
        self.write_str("</h");
        self.out.push(digit);
        self.write_str(">\n");
    }

    /// Fixed horizontal rule divider.
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str(RULE_HTML);
        self.newline();
    }

    /// `<blockquote>text</blockquote>\n`
    #[inline]
    pub fn blockquote(&mut self, text: &str) {
        self.write_str("<blockquote>");
        self.write_str(text);
        self.write_str("</blockquote>\n");
    }

    /// Opening code fence marker with language class.
    pub fn code_block_start(&mut self, lang: &str) {
        self.open_code_block = Some(self.out.len());
        self.write_str("<code class=\"language-");
        self.write_str(lang);
        self.write_str("\"><pre>\n");
    }

    /// One raw line of code.
    #[inline]
    pub fn code_line(&mut self, line: &str) {
        self.write_str(line);
        self.newline();
    }

    /// Closing code fence marker.
    pub fn code_block_end(&mut self) {
        self.write_str("</pre></code>\n");
        if let Some(start) = self.open_code_block.take() {
            self.code_regions.push(Range::new(start, self.out.len()));
        }
    }

    /// Take the buffer and the code block regions, in buffer order.
    ///
    /// A code block still open at this point runs to the end of the buffer.
    pub fn finish(mut self) -> (String, CodeRegions) {
        if let Some(start) = self.open_code_block.take() {
            self.code_regions.push(Range::new(start, self.out.len()));
        }
        (self.out, self.code_regions)
    }
}
