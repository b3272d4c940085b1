//! Images and links.
//!
//! Handles:
//! - Images: `![alt](url "title")`
//! - Links with a space-free destination: `[text](url)`
//! - Links with a title: `[text](url "title")`
//!
//! Images run first. Once an image is rewritten to `<img>` there are no
//! brackets left for the link rules to pick up, so the `!` never leaks
//! into the output.

use super::RuleSpec;

/// `![alt](url "title")` → `<img src="url" alt="alt" title="title">`
///
/// The title attribute is always written, empty when omitted.
pub const IMAGE: RuleSpec = RuleSpec {
    name: "image",
    pattern: r#"!\[([^\]]*)\]\(([^ ]+)(?: "([^"]*)")?\)"#,
    replacement: r#"<img src="${2}" alt="${1}" title="${3}">"#,
};

/// `[text](url)` → `<a href="url">text</a>`
pub const LINK: RuleSpec = RuleSpec {
    name: "link",
    pattern: r"\[(.*?)\]\((\S*?)\)",
    replacement: r#"<a href="${2}">${1}</a>"#,
};

/// `[text](url "title")` → `<a href="url" title="title">text</a>`
pub const LINK_WITH_TITLE: RuleSpec = RuleSpec {
    name: "link_with_title",
    pattern: r#"\[(.*?)\]\((.*?)(?: "(.*?)")?\)"#,
    replacement: r#"<a href="${2}" title="${3}">${1}</a>"#,
};
