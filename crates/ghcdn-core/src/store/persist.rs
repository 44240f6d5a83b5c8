//! JSON encoding of the custom template set in key-value storage.

use anyhow::{Context, Result};

use crate::storage::KeyValueStorage;

/// Storage key holding the custom template set.
pub const CUSTOM_TEMPLATES_KEY: &str = "customCDNs";

/// Read the persisted set. Absent, unreadable or malformed state gives an
/// empty list. Entries that are blank or repeated are dropped so the set
/// invariant also holds for hand-edited files.
pub(super) fn read_templates<S: KeyValueStorage>(storage: &S) -> Vec<String> {
    let raw = match storage.get_item(CUSTOM_TEMPLATES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("could not read custom templates: {:#}", e);
            return Vec::new();
        }
    };
    let parsed: Vec<String> = match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("ignoring malformed custom templates: {}", e);
            return Vec::new();
        }
    };

    let mut templates: Vec<String> = Vec::with_capacity(parsed.len());
    for t in parsed {
        let t = t.trim();
        if t.is_empty() || templates.iter().any(|existing| existing == t) {
            tracing::debug!(template = t, "dropping blank or duplicate stored template");
            continue;
        }
        templates.push(t.to_string());
    }
    templates
}

/// Write the full set as a JSON array of strings.
pub(super) fn write_templates<S: KeyValueStorage>(
    storage: &mut S,
    templates: &[String],
) -> Result<()> {
    let json = serde_json::to_string(templates).context("serialize custom templates")?;
    storage.set_item(CUSTOM_TEMPLATES_KEY, &json)
}
