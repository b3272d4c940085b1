//! Emphasis and strong emphasis.
//!
//! Delimiter runs are matched literally, longest run first. Nothing checks
//! flanking or word boundaries, so `snake_case_name` becomes
//! `snake<em>case</em>name`.

use super::RuleSpec;

/// `***text***` → `<strong><em>text</em></strong>`
pub const STRONG_EM_STAR: RuleSpec = RuleSpec {
    name: "strong_em_star",
    pattern: r"\*\*\*(.*?)\*\*\*",
    replacement: "<strong><em>${1}</em></strong>",
};

/// `___text___` → `<strong><em>text</em></strong>`
pub const STRONG_EM_UNDERSCORE: RuleSpec = RuleSpec {
    name: "strong_em_underscore",
    pattern: r"___(.*?)___",
    replacement: "<strong><em>${1}</em></strong>",
};

/// `**text**` → `<strong>text</strong>`
pub const STRONG_STAR: RuleSpec = RuleSpec {
    name: "strong_star",
    pattern: r"\*\*(.*?)\*\*",
    replacement: "<strong>${1}</strong>",
};

/// `__text__` → `<strong>text</strong>`
pub const STRONG_UNDERSCORE: RuleSpec = RuleSpec {
    name: "strong_underscore",
    pattern: r"__(.*?)__",
    replacement: "<strong>${1}</strong>",
};

/// `*text*` → `<em>text</em>`
pub const EM_STAR: RuleSpec = RuleSpec {
    name: "em_star",
    pattern: r"\*(.*?)\*",
    replacement: "<em>${1}</em>",
};

/// `_text_` → `<em>text</em>`
pub const EM_UNDERSCORE: RuleSpec = RuleSpec {
    name: "em_underscore",
    pattern: r"_(.*?)_",
    replacement: "<em>${1}</em>",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::InlineRule;

    fn apply(spec: &RuleSpec, text: &str) -> String {
        InlineRule::compile(spec).apply(text).into_owned()
    }

    #[test]
    fn test_strong_em() {
        assert_eq!(
            apply(&STRONG_EM_STAR, "***Bold Italic***"),
            "<strong><em>Bold Italic</em></strong>"
        );
        assert_eq!(
            apply(&STRONG_EM_UNDERSCORE, "___Bold Italic___"),
            "<strong><em>Bold Italic</em></strong>"
        );
    }

    #[test]
    fn test_strong() {
        assert_eq!(apply(&STRONG_STAR, "**Bold**"), "<strong>Bold</strong>");
        assert_eq!(apply(&STRONG_UNDERSCORE, "__Bold__"), "<strong>Bold</strong>");
    }

    #[test]
    fn test_em() {
        assert_eq!(apply(&EM_STAR, "*Italic*"), "<em>Italic</em>");
        assert_eq!(apply(&EM_UNDERSCORE, "_Italic_"), "<em>Italic</em>");
    }

    #[test]
    fn test_lazy_match() {
        assert_eq!(
            apply(&STRONG_STAR, "**a** b **c**"),
            "<strong>a</strong> b <strong>c</strong>"
        );
    }

    #[test]
    fn test_double_run_under_single_rule() {
        // Applied alone, the single-star rule pairs up adjacent stars.
        assert_eq!(apply(&EM_STAR, "**x**"), "<em></em>x<em></em>");
    }

    #[test]
    fn test_intraword_underscore() {
        assert_eq!(apply(&EM_UNDERSCORE, "snake_case_name"), "snake<em>case</em>name");
    }

    #[test]
    fn test_unmatched_delimiter() {
        assert_eq!(apply(&EM_STAR, "2 * 3"), "2 * 3");
    }
}
