use serde::{Deserialize, Serialize};

/// Whole display units (no minor currency units).
pub type Price = u64;

/// Interactive demo attached to a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    Audio,
}

/// A feature with a single price, either in the build or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedFeature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<Demo>,
}

/// One priced variant of an [`OptionFeature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub id: String,
    pub label: String,
    pub price: Price,
}

/// A feature with several priced variants, exactly one of which applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionFeature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub options: Vec<OptionEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<Demo>,
}

impl OptionFeature {
    /// Look up one of this feature's options by id.
    pub fn option(&self, option_id: &str) -> Option<&OptionEntry> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// The declared default option, if it resolves.
    pub fn default_option(&self) -> Option<&OptionEntry> {
        self.default_option_id
            .as_deref()
            .and_then(|id| self.option(id))
    }

    /// Option picked when the feature is switched on: the default, else the first entry.
    pub fn initial_option(&self) -> Option<&OptionEntry> {
        self.default_option().or_else(|| self.options.first())
    }

    /// The chosen option if it resolves, falling back to the default.
    pub fn resolve(&self, option_id: Option<&str>) -> Option<&OptionEntry> {
        option_id
            .and_then(|id| self.option(id))
            .or_else(|| self.default_option())
    }
}

/// A purchasable catalog entry.
///
/// Serialized with a `kind` tag of `"fixed"` or `"options"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Feature {
    #[serde(rename = "fixed")]
    Fixed(FixedFeature),
    #[serde(rename = "options")]
    Options(OptionFeature),
}

impl Feature {
    pub fn id(&self) -> &str {
        match self {
            Feature::Fixed(feature) => &feature.id,
            Feature::Options(feature) => &feature.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Feature::Fixed(feature) => &feature.name,
            Feature::Options(feature) => &feature.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Feature::Fixed(feature) => &feature.description,
            Feature::Options(feature) => &feature.description,
        }
    }

    pub fn highlights(&self) -> &[String] {
        match self {
            Feature::Fixed(feature) => &feature.highlights,
            Feature::Options(feature) => &feature.highlights,
        }
    }

    pub fn demo(&self) -> Option<Demo> {
        match self {
            Feature::Fixed(feature) => feature.demo,
            Feature::Options(feature) => feature.demo,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Feature::Fixed(_))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Feature::Options(_))
    }

    /// Only fixed features can be required.
    pub fn is_required(&self) -> bool {
        matches!(self, Feature::Fixed(feature) if feature.required)
    }

    pub fn as_fixed(&self) -> Option<&FixedFeature> {
        match self {
            Feature::Fixed(feature) => Some(feature),
            Feature::Options(_) => None,
        }
    }

    pub fn as_option(&self) -> Option<&OptionFeature> {
        match self {
            Feature::Options(feature) => Some(feature),
            Feature::Fixed(_) => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
