//! `ghcdn list [--all] [--wide]` – show templates.

use anyhow::Result;
use ghcdn_core::app::AppState;
use ghcdn_core::config::GhcdnConfig;
use ghcdn_core::present::{needs_tooltip, truncate_for_display};
use ghcdn_core::storage::KeyValueStorage;
use ghcdn_core::template::BUILTIN_TEMPLATES;

pub fn run_list<S: KeyValueStorage>(
    app: &AppState<S>,
    cfg: &GhcdnConfig,
    all: bool,
    wide: bool,
) -> Result<()> {
    for line in list_lines(app, cfg, all, wide) {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed by `list`. Entries are numbered from 1 and, unless `wide`,
/// truncated past `cfg.tooltip_threshold` characters.
pub fn list_lines<S: KeyValueStorage>(
    app: &AppState<S>,
    cfg: &GhcdnConfig,
    all: bool,
    wide: bool,
) -> Vec<String> {
    let threshold = cfg.tooltip_threshold;
    let show = |t: &str| {
        if wide {
            t.to_string()
        } else {
            truncate_for_display(t, threshold)
        }
    };
    let mut lines = Vec::new();
    let mut truncated = false;

    if all {
        lines.push("Built-in templates:".to_string());
        for (i, t) in BUILTIN_TEMPLATES.iter().enumerate() {
            truncated |= needs_tooltip(t, threshold);
            lines.push(format!("{:>3}  {}", i + 1, show(t)));
        }
        lines.push(String::new());
    }

    let custom = app.custom_templates();
    if custom.is_empty() {
        lines.push("No custom templates.".to_string());
    } else {
        lines.push("Custom templates:".to_string());
        for (i, t) in custom.iter().enumerate() {
            truncated |= needs_tooltip(t, threshold);
            lines.push(format!("{:>3}  {}", i + 1, show(t)));
        }
    }

    if truncated && !wide {
        lines.push("(long templates truncated; use --wide to show them in full)".to_string());
    }
    lines
}
