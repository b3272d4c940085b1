//! Format constants shared by the block parser and the writer.

/// Highest heading tag that is rendered. Longer markers are clamped and the
/// surplus `#` characters are kept as heading text.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Code fence delimiter.
pub const FENCE: &str = "```";

/// Minimum run of one delimiter character that forms a horizontal rule.
pub const MIN_RULE_LEN: usize = 3;
