//! CDN mirror templates and placeholder substitution.

mod placeholder;

pub use placeholder::{placeholders, Placeholder};

use crate::link::ParsedReference;

/// Built-in mirror templates, in display order.
pub const BUILTIN_TEMPLATES: &[&str] = &[
    "https://cdn.jsdelivr.net/gh/{user}/{repo}@{branch}/{path}",
    "https://rawcdn.githack.com/{user}/{repo}/{commit}/{path}",
    "https://cdn.statically.io/gh/{user}/{repo}/{branch}/{path}",
    "https://mirror.ghproxy.com/raw.githubusercontent.com/{user}/{repo}/{branch}/{path}",
    "https://ghproxy.net/https://raw.githubusercontent.com/{user}/{repo}/{branch}/{path}",
    "https://fastly.jsdelivr.net/gh/{user}/{repo}@{branch}/{path}",
];

/// Fills one template from `reference`.
///
/// Tokens are substituted in [`Placeholder::ALL`] order, first occurrence only:
/// a template that repeats `{path}` keeps the second `{path}` literally.
/// Values are inserted as-is, without any escaping.
pub fn render_one(template: &str, reference: &ParsedReference) -> String {
    Placeholder::ALL
        .iter()
        .fold(template.to_string(), |acc, p| {
            acc.replacen(p.token(), p.value_in(reference), 1)
        })
}

/// Fills every template, preserving order and length.
pub fn render<S: AsRef<str>>(templates: &[S], reference: &ParsedReference) -> Vec<String> {
    templates
        .iter()
        .map(|t| render_one(t.as_ref(), reference))
        .collect()
}
