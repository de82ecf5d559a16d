//! Feature Catalog - the immutable table of purchasable features and prices.
//!
//! A catalog is configuration, not user state: it is validated once when it
//! is built and never mutated afterwards. Lookups that miss return `None`;
//! callers treat that as a stale reference and ignore it.
//!
//! ## Example
//!
//! ```
//! use build_pricer::Catalog;
//!
//! let catalog = Catalog::standard();
//! let multipage = catalog.feature("multipage").unwrap().as_option().unwrap();
//! assert_eq!(multipage.option("multi-6-10").unwrap().price, 3500);
//! assert_eq!(catalog.base_feature_id(), "landing");
//! ```

mod error;
mod feature;
mod standard;

use std::collections::HashSet;

pub use error::CatalogError;
pub use feature::{Demo, Feature, FixedFeature, OptionEntry, OptionFeature, Price};

/// Ordered, validated set of features.
///
/// Catalog order is the order every consumer materializes selections in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    features: Vec<Feature>,
    base_id: String,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness, default options and the
    /// single required base feature.
    pub fn new(features: Vec<Feature>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut base_id: Option<String> = None;

        for feature in &features {
            if !seen.insert(feature.id()) {
                return Err(CatalogError::DuplicateFeature(feature.id().to_string()));
            }

            match feature {
                Feature::Fixed(fixed) => {
                    if fixed.required {
                        if let Some(first) = &base_id {
                            return Err(CatalogError::MultipleBase {
                                first: first.clone(),
                                second: fixed.id.clone(),
                            });
                        }
                        base_id = Some(fixed.id.clone());
                    }
                }
                Feature::Options(option_feature) => validate_options(option_feature)?,
            }
        }

        let base_id = base_id.ok_or(CatalogError::MissingBase)?;
        Ok(Self { features, base_id })
    }

    /// The site's built-in price list.
    pub fn standard() -> Self {
        Self {
            features: standard::features(),
            base_id: "landing".to_string(),
        }
    }

    /// Parse and validate a JSON array of features.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let features: Vec<Feature> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(features)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.id() == id)
    }

    /// Resolve an option of an option feature. `None` for fixed or unknown features.
    pub fn option(&self, feature_id: &str, option_id: &str) -> Option<&OptionEntry> {
        self.feature(feature_id)?.as_option()?.option(option_id)
    }

    /// Id of the single required feature present in every build.
    pub fn base_feature_id(&self) -> &str {
        &self.base_id
    }

    /// Position of a feature in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.features.iter().position(|feature| feature.id() == id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn validate_options(feature: &OptionFeature) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for option in &feature.options {
        if !seen.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateOption {
                feature: feature.id.clone(),
                option: option.id.clone(),
            });
        }
    }

    if let Some(default_id) = &feature.default_option_id {
        if feature.option(default_id).is_none() {
            return Err(CatalogError::UnknownDefaultOption {
                feature: feature.id.clone(),
                option: default_id.clone(),
            });
        }
    }

    Ok(())
}
