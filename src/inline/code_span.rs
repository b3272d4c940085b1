//! Code spans.
//!
//! First rule to run. Only single backticks delimit a span, and the span
//! content is not shielded from the rules that follow.

use super::RuleSpec;

/// `` `text` `` → `<code>text</code>`
pub const CODE_SPAN: RuleSpec = RuleSpec {
    name: "code_span",
    pattern: r"`(.*?)`",
    replacement: "<code>${1}</code>",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::InlineRule;

    fn apply(text: &str) -> String {
        InlineRule::compile(&CODE_SPAN).apply(text).into_owned()
    }

    #[test]
    fn test_simple_code_span() {
        assert_eq!(apply("hello `code` world"), "hello <code>code</code> world");
    }

    #[test]
    fn test_multiple_code_spans() {
        assert_eq!(apply("`a` and `b`"), "<code>a</code> and <code>b</code>");
    }

    #[test]
    fn test_double_backtick_pairs_up_singly() {
        assert_eq!(apply("``x``"), "<code></code>x<code></code>");
    }

    #[test]
    fn test_unmatched_backtick() {
        assert_eq!(apply("a ` b"), "a ` b");
    }

    #[test]
    fn test_markup_inside_is_left_for_later_rules() {
        assert_eq!(apply("`*not yet*`"), "<code>*not yet*</code>");
    }
}
