use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::pricing::summary_text;
use crate::selection::{normalize, Selection};

/// Payload published to the session slot for the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteHandoff {
    pub selections: Vec<Selection>,
    pub summary: String,
}

impl QuoteHandoff {
    /// Capture the build in catalog order together with its summary text.
    pub fn new(catalog: &Catalog, selections: &[Selection]) -> Self {
        let selections = normalize(catalog, selections);
        let summary = summary_text(catalog, &selections);
        Self {
            selections,
            summary,
        }
    }
}

/// What the contact page needs from the session slot. Everything is optional
/// so a partially written payload still yields its summary.
#[derive(Debug, Default, Deserialize)]
pub(super) struct HandoffSummary {
    #[serde(default)]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_selections_and_summary() {
        let catalog = Catalog::standard();
        let handoff = QuoteHandoff::new(
            &catalog,
            &[Selection::feature("animations"), Selection::feature("landing")],
        );

        let json = serde_json::to_string(&handoff).unwrap();
        assert_eq!(
            json,
            r#"{"selections":[{"featureId":"landing"},{"featureId":"animations"}],"summary":"Landing Page ($1,500), Advanced Animations ($400) | Total: $1,900"}"#
        );
    }

    #[test]
    fn handoff_summary_tolerates_missing_fields() {
        let parsed: HandoffSummary = serde_json::from_str(r#"{"selections": []}"#).unwrap();
        assert!(parsed.summary.is_none());
    }
}
