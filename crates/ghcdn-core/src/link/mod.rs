//! GitHub link parsing.
//!
//! Accepts `https://raw.githubusercontent.com/<owner>/<repo>/<ref>/<path>` and
//! the equivalent `https://github.com/...` form, and extracts the four fields
//! verbatim. No decoding and no network lookups: a well-formed link to a
//! repository that does not exist is still accepted.

mod reference;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

pub use reference::ParsedReference;

/// Owner, repo and ref are single segments; the path takes everything after the ref.
static GITHUB_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(?:raw\.githubusercontent|github)\.com/([^/]+)/([^/]+)/([^/]+)/(.+)$")
        .expect("github link pattern is valid")
});

/// Parses a GitHub file link into its owner/repo/ref/path parts.
///
/// Returns [`Error::InvalidLink`] for anything that does not match, including
/// the empty string. There are no partial results.
///
/// # Examples
///
/// - `parse("https://raw.githubusercontent.com/octocat/Hello-World/master/README.md")`
///   → owner `octocat`, repo `Hello-World`, ref `master`, path `README.md`
/// - `parse("https://gitlab.com/a/b/c/d")` → `Err(Error::InvalidLink)`
pub fn parse(link: &str) -> Result<ParsedReference, Error> {
    let caps = GITHUB_LINK_RE.captures(link).ok_or(Error::InvalidLink)?;
    Ok(ParsedReference {
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        git_ref: caps[3].to_string(),
        path: caps[4].to_string(),
    })
}

/// Whether `link` would parse.
pub fn is_valid(link: &str) -> bool {
    GITHUB_LINK_RE.is_match(link)
}
