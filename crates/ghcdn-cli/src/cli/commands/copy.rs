//! `ghcdn copy <url> [--index N]` – copy one mirror link to the clipboard.

use anyhow::{bail, Result};
use ghcdn_core::app::AppState;
use ghcdn_core::config::GhcdnConfig;
use ghcdn_core::present::CopyNotice;
use ghcdn_core::storage::KeyValueStorage;
use std::io::{self, IsTerminal, Write};
use std::time::Instant;

use crate::cli::clipboard;

/// Copies link `index` (1-based). The link is always printed to stdout; a
/// clipboard failure is logged and reported but does not fail the command.
pub fn run_copy<S: KeyValueStorage>(
    app: &mut AppState<S>,
    cfg: &GhcdnConfig,
    url: &str,
    index: usize,
) -> Result<()> {
    let link = select_link(app, url, index)?;

    println!("{link}");
    match clipboard::copy(link) {
        Ok(program) => {
            tracing::debug!(program, link = %link, "copied to clipboard");
            show_notice(&CopyNotice::copied(Instant::now(), cfg.copy_notice()));
        }
        Err(e) => {
            tracing::warn!("failed to copy: {:#}", e);
            eprintln!("Could not copy to clipboard: {e:#}");
        }
    }
    Ok(())
}

/// Generated link number `index` (1-based) for `url`.
pub fn select_link<'a, S: KeyValueStorage>(
    app: &'a mut AppState<S>,
    url: &str,
    index: usize,
) -> Result<&'a str> {
    app.set_source_link(url);
    if let Some(err) = app.link_error() {
        return Err(err.into());
    }
    match index.checked_sub(1).and_then(|i| app.results().get(i)) {
        Some(link) => Ok(link.as_str()),
        None => bail!(
            "no generated link at index {index} ({} available)",
            app.results().len()
        ),
    }
}

/// On a terminal the notice is erased once it expires; otherwise it is a plain line.
fn show_notice(notice: &CopyNotice) {
    let mut stderr = io::stderr();
    if !stderr.is_terminal() {
        let _ = writeln!(stderr, "{}", notice.message);
        return;
    }
    let _ = write!(stderr, "{}", notice.message);
    let _ = stderr.flush();
    std::thread::sleep(notice.remaining(Instant::now()));
    let _ = write!(stderr, "\r\x1b[2K");
    let _ = stderr.flush();
}
