//! `ghcdn remove <index>` – remove a custom template; an unknown index is a no-op.

use anyhow::Result;
use ghcdn_core::app::AppState;
use ghcdn_core::storage::KeyValueStorage;

pub fn run_remove<S: KeyValueStorage>(app: &mut AppState<S>, index: usize) -> Result<()> {
    match index
        .checked_sub(1)
        .and_then(|i| app.remove_custom_template(i))
    {
        Some(removed) => println!("Removed custom template {index}: {removed}"),
        None => println!("No custom template at index {index}; nothing removed."),
    }
    Ok(())
}
