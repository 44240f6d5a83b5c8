//! The parsed form of a GitHub file link.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Owner, repository, ref and path extracted from a GitHub link.
///
/// Derived data: rebuilt from the source link every time it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Account or organization that owns the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag or commit. Fills both `{branch}` and `{commit}`.
    pub git_ref: String,
    /// Everything after the ref; may contain `/`.
    pub path: String,
}

impl fmt::Display for ParsedReference {
    /// Canonical raw.githubusercontent.com form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, self.git_ref, self.path
        )
    }
}

impl FromStr for ParsedReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_raw_host() {
        let r: ParsedReference = "https://github.com/o/r/main/a/b.txt".parse().unwrap();
        assert_eq!(
            r.to_string(),
            "https://raw.githubusercontent.com/o/r/main/a/b.txt"
        );
    }

    #[test]
    fn from_str_rejects_invalid() {
        assert_eq!("ftp://x".parse::<ParsedReference>(), Err(Error::InvalidLink));
    }
}
