//! Display helpers shared by front ends.

use std::time::{Duration, Instant};

/// Texts longer than this many characters get a tooltip / truncated view.
pub const DEFAULT_TOOLTIP_THRESHOLD: usize = 20;

/// How long the "copied" message stays up.
pub const DEFAULT_COPY_NOTICE: Duration = Duration::from_secs(2);

pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard";

/// Whether `text` is long enough to warrant showing it in full on hover.
pub fn needs_tooltip(text: &str, threshold: usize) -> bool {
    text.chars().count() > threshold
}

/// Shortens `text` to `threshold` characters plus an ellipsis when it is
/// over the tooltip threshold; shorter text is returned unchanged.
pub fn truncate_for_display(text: &str, threshold: usize) -> String {
    if !needs_tooltip(text, threshold) {
        return text.to_string();
    }
    let mut out: String = text.chars().take(threshold).collect();
    out.push('…');
    out
}

/// Transient status message shown after a clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub message: String,
    pub expires_at: Instant,
}

impl CopyNotice {
    pub fn copied(now: Instant, ttl: Duration) -> Self {
        Self {
            message: COPY_SUCCESS_MESSAGE.to_string(),
            expires_at: now + ttl,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    /// Time left before the notice should be cleared.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
