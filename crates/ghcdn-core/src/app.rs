//! Application state: source link, custom templates and the derived results.
//!
//! Front ends own one `AppState`, feed it input events and read back the
//! result list and inline error messages. Results are recomputed eagerly on
//! every change, so they are never stale.

use crate::error::Error;
use crate::link::{self, ParsedReference};
use crate::storage::KeyValueStorage;
use crate::store::CustomTemplateStore;
use crate::template::{self, BUILTIN_TEMPLATES};

#[derive(Debug)]
pub struct AppState<S: KeyValueStorage> {
    source_link: String,
    parsed: Option<ParsedReference>,
    store: CustomTemplateStore<S>,
    include_builtin: bool,
    results: Vec<String>,
    link_error: Option<Error>,
    template_error: Option<Error>,
}

impl<S: KeyValueStorage> AppState<S> {
    /// Start with an empty link and custom templates restored from `storage`.
    pub fn load(storage: S) -> Self {
        Self::with_store(CustomTemplateStore::load(storage))
    }

    pub fn with_store(store: CustomTemplateStore<S>) -> Self {
        Self {
            source_link: String::new(),
            parsed: None,
            store,
            include_builtin: true,
            results: Vec::new(),
            link_error: None,
            template_error: None,
        }
    }

    /// Leave the built-in mirrors out of the result list.
    pub fn set_include_builtin(&mut self, include: bool) {
        self.include_builtin = include;
        self.recompute();
    }

    /// Replace the source link. Surrounding whitespace from pasting is
    /// dropped. An empty link clears results and errors; an invalid one
    /// clears results and records [`Error::InvalidLink`].
    pub fn set_source_link(&mut self, link: &str) {
        self.source_link = link.trim().to_string();
        self.recompute();
    }

    /// Add a custom template. On rejection the error is also kept for display
    /// until the next successful add.
    pub fn add_custom_template(&mut self, template: &str) -> Result<(), Error> {
        match self.store.add(template) {
            Ok(()) => {
                self.template_error = None;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                self.template_error = Some(e);
                Err(e)
            }
        }
    }

    /// Remove the custom template at `index`; out of range does nothing.
    pub fn remove_custom_template(&mut self, index: usize) -> Option<String> {
        let removed = self.store.remove(index);
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Built-in templates (if enabled) followed by custom ones.
    pub fn all_templates(&self) -> Vec<&str> {
        let builtin: &[&str] = if self.include_builtin {
            BUILTIN_TEMPLATES
        } else {
            &[]
        };
        builtin
            .iter()
            .copied()
            .chain(self.store.templates().iter().map(String::as_str))
            .collect()
    }

    pub fn source_link(&self) -> &str {
        &self.source_link
    }

    pub fn parsed(&self) -> Option<&ParsedReference> {
        self.parsed.as_ref()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn link_error(&self) -> Option<Error> {
        self.link_error
    }

    pub fn template_error(&self) -> Option<Error> {
        self.template_error
    }

    pub fn custom_templates(&self) -> &[String] {
        self.store.templates()
    }

    pub fn store(&self) -> &CustomTemplateStore<S> {
        &self.store
    }

    pub fn into_store(self) -> CustomTemplateStore<S> {
        self.store
    }

    fn recompute(&mut self) {
        if self.source_link.is_empty() {
            self.parsed = None;
            self.results.clear();
            self.link_error = None;
            return;
        }
        match link::parse(&self.source_link) {
            Ok(reference) => {
                let results = {
                    let templates = self.all_templates();
                    template::render(&templates, &reference)
                };
                self.results = results;
                self.parsed = Some(reference);
                self.link_error = None;
            }
            Err(e) => {
                tracing::debug!(link = %self.source_link, "rejected source link");
                self.parsed = None;
                self.results.clear();
                self.link_error = Some(e);
            }
        }
    }
}
