//! linemark: line-oriented lightweight markup to HTML converter
//!
//! Every non-blank input line becomes one block of HTML, fenced code blocks
//! are copied through raw, and a fixed sequence of inline substitutions
//! (code spans, emphasis, images, links) runs over the result.
//!
//! # Design Principles
//! - No AST: the block phase emits one event per line
//! - No escaping: text is copied through as written
//! - Total: every input produces output, nothing fails or panics
//! - No state between calls
//!
//! # Pipeline
//! 1. [`Lines`] splits the document on `\n`
//! 2. [`BlockParser`] tracks the code fence and classifies each line
//! 3. [`HtmlWriter`] renders one line of HTML per [`BlockEvent`]
//! 4. [`inline::transform`] applies the ordered substitution rules,
//!    skipping fenced code blocks

pub mod block;
pub mod inline;
pub mod limits;
pub mod lines;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, FenceState};
pub use inline::{InlineRule, RuleSpec};
pub use lines::{Line, Lines};
pub use range::Range;
pub use render::HtmlWriter;

/// Convert a document to an HTML fragment.
///
/// This is the primary API.
///
/// # Example
/// ```
/// let html = linemark::convert("# Hello\n\nWorld with **bold**");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World with <strong>bold</strong></p>\n");
/// ```
pub fn convert(document: &str) -> String {
    let mut out = String::new();
    convert_into(document, &mut out);
    out
}

/// Convert a document, writing into a provided buffer.
///
/// `out` is cleared first; its allocation is reused.
pub fn convert_into(document: &str, out: &mut String) {
    out.clear();

    // Parse blocks
    let mut parser = BlockParser::new(document);
    let mut events = Vec::with_capacity((document.len() / 32).max(16));
    parser.parse(&mut events);

    // Render blocks
    let mut writer = HtmlWriter::with_capacity_for(document.len());
    for event in &events {
        writer.render_event(document, event);
    }
    let (html, code_regions) = writer.finish();

    // Inline pass over everything outside fenced code
    out.reserve(html.len() + html.len() / 8);
    inline::transform_into(&html, &code_regions, out);

    tracing::debug!(
        input_len = document.len(),
        blocks = events.len(),
        code_blocks = code_regions.len(),
        output_len = out.len(),
        "converted document"
    );
}
