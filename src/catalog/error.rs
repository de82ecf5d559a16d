use thiserror::Error;

/// Violations of the catalog invariants, reported when a catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate feature id `{0}`")]
    DuplicateFeature(String),
    #[error("duplicate option id `{option}` in feature `{feature}`")]
    DuplicateOption { feature: String, option: String },
    #[error("default option `{option}` of feature `{feature}` is not one of its options")]
    UnknownDefaultOption { feature: String, option: String },
    #[error("catalog has no required base feature")]
    MissingBase,
    #[error("catalog has more than one required feature (`{first}` and `{second}`)")]
    MultipleBase { first: String, second: String },
    #[error("catalog parse error: {0}")]
    Parse(String),
}
