//! Custom template store.
//!
//! An ordered set of user-supplied templates:
//! - no empty entries and no duplicates (exact string match, after trimming)
//! - insertion order is kept; `remove` shifts later entries down by one
//! - every successful mutation writes the full set back to storage
//!
//! The store owns its storage backend so load-at-start and save-on-mutation
//! stay in one place.

mod persist;

pub use persist::CUSTOM_TEMPLATES_KEY;

use crate::error::Error;
use crate::storage::KeyValueStorage;

#[derive(Debug)]
pub struct CustomTemplateStore<S: KeyValueStorage> {
    templates: Vec<String>,
    storage: S,
}

impl<S: KeyValueStorage> CustomTemplateStore<S> {
    /// Restore the set from `storage`. Missing or malformed state yields an
    /// empty set; this never fails.
    pub fn load(storage: S) -> Self {
        let templates = persist::read_templates(&storage);
        tracing::debug!(count = templates.len(), "custom templates loaded");
        Self { templates, storage }
    }

    /// Append `template` (trimmed).
    ///
    /// Rejected with [`Error::DuplicateOrEmptyTemplate`] when the trimmed text
    /// is empty or already present; the set is left untouched in that case.
    pub fn add(&mut self, template: &str) -> Result<(), Error> {
        let trimmed = template.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return Err(Error::DuplicateOrEmptyTemplate);
        }
        self.templates.push(trimmed.to_string());
        tracing::info!(template = trimmed, "custom template added");
        self.save();
        Ok(())
    }

    /// Remove the entry at `index`, returning it. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.templates.len() {
            tracing::debug!(index, len = self.templates.len(), "remove index out of range");
            return None;
        }
        let removed = self.templates.remove(index);
        tracing::info!(template = %removed, "custom template removed");
        self.save();
        Some(removed)
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn contains(&self, template: &str) -> bool {
        self.templates.iter().any(|t| t == template)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, e.g. to reload it later.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // A failed write is logged; the in-memory set stays authoritative.
    fn save(&mut self) {
        if let Err(e) = persist::write_templates(&mut self.storage, &self.templates) {
            tracing::warn!("could not persist custom templates: {:#}", e);
        }
    }
}
