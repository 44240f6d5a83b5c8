//! Placeholder tokens understood by templates.

use crate::link::ParsedReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    User,
    Repo,
    Branch,
    Path,
    Commit,
}

impl Placeholder {
    /// Substitution order.
    pub const ALL: [Placeholder; 5] = [
        Placeholder::User,
        Placeholder::Repo,
        Placeholder::Branch,
        Placeholder::Path,
        Placeholder::Commit,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::User => "{user}",
            Placeholder::Repo => "{repo}",
            Placeholder::Branch => "{branch}",
            Placeholder::Path => "{path}",
            Placeholder::Commit => "{commit}",
        }
    }

    /// The field of `reference` this token is replaced with. There is no
    /// separate commit hash, so `{commit}` reuses the ref.
    pub fn value_in(self, reference: &ParsedReference) -> &str {
        match self {
            Placeholder::User => &reference.owner,
            Placeholder::Repo => &reference.repo,
            Placeholder::Branch | Placeholder::Commit => &reference.git_ref,
            Placeholder::Path => &reference.path,
        }
    }
}

/// Placeholders present in `template`, in [`Placeholder::ALL`] order.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| template.contains(p.token()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_placeholders() {
        assert_eq!(
            placeholders("https://x/{repo}/{user}@{commit}"),
            vec![Placeholder::User, Placeholder::Repo, Placeholder::Commit]
        );
        assert!(placeholders("https://x/static").is_empty());
    }
}
