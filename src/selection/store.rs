use std::sync::Arc;

use tracing::debug;

use super::{ensure_base_feature, normalize, Selection};
use crate::catalog::{Catalog, Feature};

/// In-memory, ordered collection of selections, validated against a catalog.
///
/// Mutations return `true` when the build changed and `false` for ignored
/// requests (unknown feature, wrong feature kind, required feature, unknown
/// option). The base-feature repair runs after every call either way.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: Arc<Catalog>,
    selections: Vec<Selection>,
}

impl SelectionStore {
    /// A store holding only the base feature.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::from_selections(catalog, Vec::new())
    }

    /// Adopt existing selections, normalized into catalog order.
    pub fn from_selections(catalog: Arc<Catalog>, selections: Vec<Selection>) -> Self {
        let selections = normalize(&catalog, &selections);
        Self {
            catalog,
            selections,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Selections in mutation order (not necessarily catalog order).
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Selections materialized in catalog order.
    pub fn normalized(&self) -> Vec<Selection> {
        normalize(&self.catalog, &self.selections)
    }

    pub fn get(&self, feature_id: &str) -> Option<&Selection> {
        self.selections
            .iter()
            .find(|selection| selection.feature_id == feature_id)
    }

    pub fn is_selected(&self, feature_id: &str) -> bool {
        self.get(feature_id).is_some()
    }

    /// Add or remove a non-required fixed feature.
    pub fn toggle_fixed(&mut self, feature_id: &str) -> bool {
        let changed = match self.catalog.feature(feature_id) {
            Some(Feature::Fixed(feature)) if !feature.required => {
                if !self.remove(feature_id) {
                    self.selections.push(Selection::feature(feature_id));
                }
                true
            }
            Some(Feature::Fixed(_)) => {
                debug!(feature_id, "ignoring toggle of required feature");
                false
            }
            Some(Feature::Options(_)) | None => {
                debug!(feature_id, "ignoring fixed toggle: not a fixed feature");
                false
            }
        };

        self.ensure_base_feature();
        changed
    }

    /// Switch an option feature on (at its default option) or off.
    ///
    /// Switching off forgets the chosen option; switching back on always
    /// starts from the default.
    pub fn toggle_option_feature(&mut self, feature_id: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let changed = match catalog.feature(feature_id) {
            Some(Feature::Options(feature)) => {
                if self.remove(feature_id) {
                    true
                } else if let Some(option) = feature.initial_option() {
                    self.selections
                        .push(Selection::option(feature_id, option.id.clone()));
                    true
                } else {
                    debug!(feature_id, "ignoring option toggle: feature has no options");
                    false
                }
            }
            Some(Feature::Fixed(_)) | None => {
                debug!(feature_id, "ignoring option toggle: not an option feature");
                false
            }
        };

        self.ensure_base_feature();
        changed
    }

    /// Choose a specific option, selecting the feature if it was not selected.
    pub fn select_option(&mut self, feature_id: &str, option_id: &str) -> bool {
        let resolves = self.catalog.option(feature_id, option_id).is_some();

        let changed = if resolves {
            let selection = Selection::option(feature_id, option_id);
            match self
                .selections
                .iter_mut()
                .find(|existing| existing.feature_id == feature_id)
            {
                Some(existing) => *existing = selection,
                None => self.selections.push(selection),
            }
            true
        } else {
            debug!(feature_id, option_id, "ignoring unknown option");
            false
        };

        self.ensure_base_feature();
        changed
    }

    /// Prepend the base feature if it is missing.
    pub fn ensure_base_feature(&mut self) {
        ensure_base_feature(&self.catalog, &mut self.selections);
    }

    /// Write the effective option back into option-feature selections whose
    /// option is absent or stale. Returns `true` if any record changed.
    pub fn resolve_options(&mut self) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let mut changed = false;

        for selection in &mut self.selections {
            let Some(feature) = catalog
                .feature(&selection.feature_id)
                .and_then(Feature::as_option)
            else {
                continue;
            };

            let current = selection.option_id().and_then(|id| feature.option(id));
            if current.is_some() {
                continue;
            }

            if let Some(option) = feature.initial_option() {
                selection.option_id = Some(option.id.clone());
                changed = true;
            }
        }

        changed
    }

    /// Re-order the stored selections into catalog order.
    pub fn normalize_in_place(&mut self) {
        self.selections = normalize(&self.catalog, &self.selections);
    }

    /// Swap in a new catalog, dropping selections it no longer knows.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.normalize_in_place();
        self.resolve_options();
    }

    fn remove(&mut self, feature_id: &str) -> bool {
        let before = self.selections.len();
        self.selections
            .retain(|selection| selection.feature_id != feature_id);
        self.selections.len() != before
    }
}
