//! `ghcdn add <template>` – add a custom CDN template.

use anyhow::Result;
use ghcdn_core::app::AppState;
use ghcdn_core::storage::KeyValueStorage;
use ghcdn_core::template::placeholders;

pub fn run_add<S: KeyValueStorage>(app: &mut AppState<S>, template: &str) -> Result<()> {
    app.add_custom_template(template)?;
    let added = template.trim();
    if placeholders(added).is_empty() {
        tracing::warn!(template = added, "custom template has no placeholders");
        eprintln!("Note: template has no placeholders; it yields the same link for every file.");
    }
    println!(
        "Added custom template {}: {}",
        app.custom_templates().len(),
        added
    );
    Ok(())
}
