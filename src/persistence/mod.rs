//! Persistence Adapter - best-effort storage of the build.
//!
//! Selections are kept in a durable slot so a returning visitor sees their
//! last build; a derived summary is handed to the contact page through a
//! session slot. Nothing here ever fails outward: unreadable data degrades
//! to "base feature only", failed writes are logged and dropped, and the
//! in-memory selections stay authoritative.

mod handoff;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Catalog;
use crate::pricing::summary_text;
use crate::selection::{normalize, Selection};
use crate::storage::KeyValueStore;

pub use handoff::QuoteHandoff;
use handoff::HandoffSummary;

/// Default key of the durable selections slot.
pub const SELECTIONS_KEY: &str = "pricing_selections_v2";

/// Default key of the session-scoped handoff slot.
pub const SUMMARY_KEY: &str = "pricing_summary";

/// Slot names used by [`SelectionPersistence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub selections: String,
    pub summary: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            selections: SELECTIONS_KEY.to_string(),
            summary: SUMMARY_KEY.to_string(),
        }
    }
}

/// Loads and saves selections and publishes the contact-page handoff.
#[derive(Clone)]
pub struct SelectionPersistence {
    catalog: Arc<Catalog>,
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SelectionPersistence {
    pub fn new(
        catalog: Arc<Catalog>,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            catalog,
            durable,
            session,
            keys: StorageKeys::default(),
        }
    }

    /// Use custom slot names.
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Swap the catalog used for validation and summaries.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// The minimal valid build: only the base feature.
    pub fn fallback(&self) -> Vec<Selection> {
        vec![Selection::feature(self.catalog.base_feature_id())]
    }

    /// Read the stored build, normalized. Never fails.
    ///
    /// Missing, empty or malformed data yields [`fallback`](Self::fallback);
    /// entries naming unknown features are dropped.
    pub fn load(&self) -> Vec<Selection> {
        let raw = match self.durable.get(&self.keys.selections) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return self.fallback(),
            Err(e) => {
                warn!(key = %self.keys.selections, error = %e, "failed to read selections from storage");
                return self.fallback();
            }
        };

        match self.parse(&raw) {
            Ok(selections) => normalize(&self.catalog, &selections),
            Err(e) => {
                warn!(key = %self.keys.selections, error = %e, "stored selections are malformed");
                self.fallback()
            }
        }
    }

    /// Normalize and write the build to the durable slot. Failures are logged
    /// and otherwise ignored.
    pub fn save(&self, selections: &[Selection]) {
        let normalized = normalize(&self.catalog, selections);

        let json = match serde_json::to_string(&normalized) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize selections");
                return;
            }
        };

        if let Err(e) = self.durable.set(&self.keys.selections, &json) {
            warn!(key = %self.keys.selections, error = %e, "failed to persist selections");
        }
    }

    /// Write `{selections, summary}` to the session slot for the contact page.
    pub fn publish_summary(&self, selections: &[Selection]) {
        let handoff = QuoteHandoff::new(&self.catalog, selections);

        let json = match serde_json::to_string(&handoff) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize quote summary");
                return;
            }
        };

        if let Err(e) = self.session.set(&self.keys.summary, &json) {
            warn!(key = %self.keys.summary, error = %e, "unable to persist quote summary");
        }
    }

    /// Contact-page side of the handoff: the published summary, or one
    /// computed from the durable slot when nothing usable was published.
    pub fn read_quote_summary(&self) -> String {
        match self.session.get(&self.keys.summary) {
            Ok(Some(raw)) if !raw.is_empty() => {
                match serde_json::from_str::<HandoffSummary>(&raw) {
                    Ok(parsed) => return parsed.summary.unwrap_or_default(),
                    Err(e) => {
                        warn!(key = %self.keys.summary, error = %e, "unable to read stored summary");
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(key = %self.keys.summary, error = %e, "unable to read stored summary");
            }
        }

        summary_text(&self.catalog, &self.load())
    }

    fn parse(&self, raw: &str) -> Result<Vec<Selection>, serde_json::Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<Selection>(entry).ok())
            .filter(|selection| self.catalog.feature(&selection.feature_id).is_some())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryKeyValueStore, StorageError};

    struct Unavailable;

    impl KeyValueStore for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn remove(&self, _key: &str) -> Result<bool, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    fn adapter() -> (SelectionPersistence, InMemoryKeyValueStore, InMemoryKeyValueStore) {
        let durable = InMemoryKeyValueStore::new();
        let session = InMemoryKeyValueStore::new();
        let persistence = SelectionPersistence::new(
            Arc::new(Catalog::standard()),
            Arc::new(durable.clone()),
            Arc::new(session.clone()),
        );
        (persistence, durable, session)
    }

    fn base() -> Vec<Selection> {
        vec![Selection::feature("landing")]
    }

    #[test]
    fn load_empty_storage_is_base_only() {
        let (persistence, _, _) = adapter();
        assert_eq!(persistence.load(), base());
    }

    #[test]
    fn load_degrades_on_malformed_input() {
        let (persistence, durable, _) = adapter();

        for raw in ["", "null", "{not json", r#"{"featureId":"landing"}"#, "42"] {
            durable.set(SELECTIONS_KEY, raw).unwrap();
            assert_eq!(persistence.load(), base(), "input: {raw:?}");
        }
    }

    #[test]
    fn load_filters_unknown_and_malformed_entries() {
        let (persistence, durable, _) = adapter();
        durable
            .set(
                SELECTIONS_KEY,
                r#"[{"featureId":"cms","optionId":"cms-full"},{"featureId":"ghost"},7,{"optionId":"x"},{"featureId":"animations"}]"#,
            )
            .unwrap();

        assert_eq!(
            persistence.load(),
            vec![
                Selection::feature("landing"),
                Selection::feature("animations"),
                Selection::option("cms", "cms-full"),
            ]
        );
    }

    #[test]
    fn save_writes_normalized_json() {
        let (persistence, durable, _) = adapter();
        persistence.save(&[Selection::option("multipage", "multi-6-10")]);

        assert_eq!(
            durable.get(SELECTIONS_KEY).unwrap().as_deref(),
            Some(r#"[{"featureId":"landing"},{"featureId":"multipage","optionId":"multi-6-10"}]"#)
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let (persistence, _, _) = adapter();
        let selections = vec![
            Selection::option("ecommerce", "commerce-51-200"),
            Selection::feature("contact-form"),
        ];

        persistence.save(&selections);
        assert_eq!(persistence.load(), normalize(persistence.catalog(), &selections));
    }

    #[test]
    fn unavailable_storage_degrades_silently() {
        let persistence = SelectionPersistence::new(
            Arc::new(Catalog::standard()),
            Arc::new(Unavailable),
            Arc::new(Unavailable),
        );

        persistence.save(&[Selection::feature("animations")]);
        persistence.publish_summary(&base());
        assert_eq!(persistence.load(), base());
        assert_eq!(persistence.read_quote_summary(), "Landing Page ($1,500) | Total: $1,500");
    }

    #[test]
    fn publish_summary_writes_handoff() {
        let (persistence, _, session) = adapter();
        persistence.publish_summary(&[Selection::feature("animations")]);

        let raw = session.get(SUMMARY_KEY).unwrap().unwrap();
        let handoff: QuoteHandoff = serde_json::from_str(&raw).unwrap();
        assert_eq!(handoff.selections.len(), 2);
        assert_eq!(
            handoff.summary,
            "Landing Page ($1,500), Advanced Animations ($400) | Total: $1,900"
        );
    }

    #[test]
    fn read_quote_summary_prefers_published_handoff() {
        let (persistence, _, session) = adapter();
        persistence.publish_summary(&[Selection::feature("animations")]);
        assert!(persistence.read_quote_summary().ends_with("Total: $1,900"));

        session.set(SUMMARY_KEY, r#"{"selections":[]}"#).unwrap();
        assert_eq!(persistence.read_quote_summary(), "");
    }

    #[test]
    fn read_quote_summary_falls_back_to_durable_slot() {
        let (persistence, _, session) = adapter();
        persistence.save(&[Selection::feature("contact-form")]);
        assert_eq!(
            persistence.read_quote_summary(),
            "Landing Page ($1,500), Contact Form ($150) | Total: $1,650"
        );

        session.set(SUMMARY_KEY, "{broken").unwrap();
        assert_eq!(
            persistence.read_quote_summary(),
            "Landing Page ($1,500), Contact Form ($150) | Total: $1,650"
        );
    }

    #[test]
    fn custom_keys_are_honoured() {
        let (persistence, durable, _) = adapter();
        let persistence = persistence.with_keys(StorageKeys {
            selections: "sel".into(),
            summary: "sum".into(),
        });

        persistence.save(&base());
        assert!(durable.get("sel").unwrap().is_some());
        assert!(durable.get(SELECTIONS_KEY).unwrap().is_none());
    }
}
