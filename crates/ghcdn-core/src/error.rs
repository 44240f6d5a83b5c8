//! User-facing error kinds.
//!
//! Both are recoverable: the caller clears or ignores the offending input and
//! shows the message inline. Plumbing failures (I/O, config) use `anyhow`.

/// Errors surfaced to the user while working with links and templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source link does not look like a GitHub file URL.
    #[error("Invalid GitHub link")]
    InvalidLink,

    /// A custom template was rejected because it is empty or already stored.
    #[error("Custom CDN link already exists or is empty")]
    DuplicateOrEmptyTemplate,
}
