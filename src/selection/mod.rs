//! Selection Store - the user's current build.
//!
//! A [`Selection`] records that a feature (and, for option features, which
//! option) is part of the build. The store holds at most one selection per
//! feature and always contains the catalog's base feature after a mutation.
//! Consumers read selections through [`normalize`], which materializes them
//! in catalog order so totals and summaries never depend on click order.

mod store;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

pub use store::SelectionStore;

/// `{featureId, optionId?}`: the persisted shape of one build entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub feature_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
}

impl Selection {
    /// A selection without a chosen option.
    pub fn feature(feature_id: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            option_id: None,
        }
    }

    /// A selection of a specific option.
    pub fn option(feature_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            option_id: Some(option_id.into()),
        }
    }

    pub fn option_id(&self) -> Option<&str> {
        self.option_id.as_deref()
    }
}

/// Prepend the base feature's selection if it is missing. Idempotent.
pub fn ensure_base_feature(catalog: &Catalog, selections: &mut Vec<Selection>) {
    let base = catalog.base_feature_id();
    if !selections.iter().any(|selection| selection.feature_id == base) {
        selections.insert(0, Selection::feature(base));
    }
}

/// Re-order selections into catalog order and enforce base-feature presence.
///
/// Keeps the first selection per feature, drops selections whose feature is
/// not in the catalog, and is idempotent.
pub fn normalize(catalog: &Catalog, selections: &[Selection]) -> Vec<Selection> {
    let mut ensured = selections.to_vec();
    ensure_base_feature(catalog, &mut ensured);

    catalog
        .features()
        .iter()
        .filter_map(|feature| {
            ensured
                .iter()
                .find(|selection| selection.feature_id == feature.id())
                .cloned()
        })
        .collect()
}
