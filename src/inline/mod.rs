//! Inline substitution pass.
//!
//! Runs once over the whole rendered buffer after the block phase. Each rule
//! is a global, leftmost, non-overlapping, lazy pattern replacement, and the
//! rules run in a fixed order:
//! 1. Code spans
//! 2. Strong emphasis + emphasis (`***`, `___`)
//! 3. Strong emphasis (`**`, `__`)
//! 4. Emphasis (`*`, `_`)
//! 5. Images, then links
//!
//! Later rules see the HTML inserted by earlier ones, so the order decides
//! the output: `***x***` must be consumed before `**` or `*` can split it.
//! Fenced code blocks are passed through untouched.

mod code_span;
mod emphasis;
mod links;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::Range;

/// Static description of one substitution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Short identifier, used in logs and tests.
    pub name: &'static str,
    /// Pattern in `regex` syntax.
    pub pattern: &'static str,
    /// Replacement template, `${n}` refers to capture group `n`.
    pub replacement: &'static str,
}

/// Rule table in application order.
pub const RULE_SPECS: [RuleSpec; 10] = [
    code_span::CODE_SPAN,
    emphasis::STRONG_EM_STAR,
    emphasis::STRONG_EM_UNDERSCORE,
    emphasis::STRONG_STAR,
    emphasis::STRONG_UNDERSCORE,
    emphasis::EM_STAR,
    emphasis::EM_UNDERSCORE,
    links::IMAGE,
    links::LINK,
    links::LINK_WITH_TITLE,
];

static RULES: LazyLock<Vec<InlineRule>> =
    LazyLock::new(|| RULE_SPECS.iter().map(InlineRule::compile).collect());

/// A compiled substitution rule.
#[derive(Debug, Clone)]
pub struct InlineRule {
    spec: RuleSpec,
    pattern: Regex,
}

impl InlineRule {
    /// Compile a rule.
    ///
    /// # Panics
    /// Panics if the pattern is invalid. Patterns are crate constants and are
    /// covered by tests.
    pub fn compile(spec: &RuleSpec) -> Self {
        let pattern = Regex::new(spec.pattern)
            .unwrap_or_else(|err| panic!("invalid pattern for rule `{}`: {err}", spec.name));
        Self {
            spec: *spec,
            pattern,
        }
    }

    /// Rule identifier.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Replace every match in `text`. Borrows when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.spec.replacement)
    }
}

/// The compiled rule table, in application order.
pub fn rules() -> &'static [InlineRule] {
    &RULES
}

/// Apply every rule in order to `text`.
///
/// # Example
/// ```
/// let html = linemark::inline::apply_rules("<p>***both*** and `code`</p>");
/// assert_eq!(html, "<p><strong><em>both</em></strong> and <code>code</code></p>");
/// ```
pub fn apply_rules(text: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(text);
    for rule in rules() {
        let replaced = match rule.apply(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            tracing::trace!(rule = rule.name(), "inline rule matched");
            text = Cow::Owned(s);
        }
    }
    text
}

/// Apply the rules to `buffer`, copying the `protected` regions verbatim.
///
/// `protected` must be sorted, non-overlapping, and start on line
/// boundaries. Each gap is transformed on its own, so no match can reach
/// into or out of a protected region.
pub fn transform(buffer: &str, protected: &[Range]) -> String {
    let mut out = String::with_capacity(buffer.len() + buffer.len() / 8);
    transform_into(buffer, protected, &mut out);
    out
}

/// Like [`transform`], appending to `out`.
pub fn transform_into(buffer: &str, protected: &[Range], out: &mut String) {
    let mut pos = 0;
    for region in protected {
        debug_assert!(region.start >= pos);
        out.push_str(&apply_rules(&buffer[pos..region.start]));
        out.push_str(region.slice(buffer));
        pos = region.end;
    }
    out.push_str(&apply_rules(&buffer[pos..]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(rules().len(), RULE_SPECS.len());
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = rules().iter().map(InlineRule::name).collect();
        assert_eq!(
            names,
            [
                "code_span",
                "strong_em_star",
                "strong_em_underscore",
                "strong_star",
                "strong_underscore",
                "em_star",
                "em_underscore",
                "image",
                "link",
                "link_with_title",
            ]
        );
    }

    #[test]
    fn test_no_match_borrows() {
        assert!(matches!(apply_rules("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_triple_before_double_before_single() {
        assert_eq!(
            apply_rules("***a*** **b** *c*"),
            "<strong><em>a</em></strong> <strong>b</strong> <em>c</em>"
        );
    }

    #[test]
    fn test_lazy_matching_keeps_spans_apart() {
        assert_eq!(apply_rules("*a* and *b*"), "<em>a</em> and <em>b</em>");
        assert_eq!(apply_rules("`x` or `y`"), "<code>x</code> or <code>y</code>");
    }

    #[test]
    fn test_emphasis_inside_code_span_still_applies() {
        // Code spans run first but their content is not shielded.
        assert_eq!(apply_rules("`*a*`"), "<code><em>a</em></code>");
    }

    #[test]
    fn test_emphasis_around_link() {
        assert_eq!(
            apply_rules("**[Go](https://golang.org)**"),
            "<strong><a href=\"https://golang.org\">Go</a></strong>"
        );
    }

    #[test]
    fn test_rules_do_not_cross_lines() {
        assert_eq!(apply_rules("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_transform_skips_protected_regions() {
        let buffer = "<p>*a*</p>\n<code class=\"language-\"><pre>\n*b*\n</pre></code>\n<p>*c*</p>\n";
        let start = buffer.find("<code").unwrap();
        let end = buffer.find("<p>*c*").unwrap();

        let out = transform(buffer, &[Range::new(start, end)]);
        assert_eq!(
            out,
            "<p><em>a</em></p>\n<code class=\"language-\"><pre>\n*b*\n</pre></code>\n<p><em>c</em></p>\n"
        );
    }

    #[test]
    fn test_transform_without_regions() {
        assert_eq!(transform("<p>_x_</p>\n", &[]), "<p><em>x</em></p>\n");
    }
}
