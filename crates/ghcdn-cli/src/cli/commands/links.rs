//! `ghcdn links <url>` – print every mirror link for a GitHub file.

use anyhow::Result;
use ghcdn_core::app::AppState;
use ghcdn_core::storage::KeyValueStorage;

pub fn run_links<S: KeyValueStorage>(app: &mut AppState<S>, url: &str) -> Result<()> {
    app.set_source_link(url);
    if let Some(err) = app.link_error() {
        return Err(err.into());
    }
    if app.results().is_empty() {
        println!("No links generated.");
        return Ok(());
    }
    for (i, link) in app.results().iter().enumerate() {
        println!("{:>3}  {}", i + 1, link);
    }
    Ok(())
}
