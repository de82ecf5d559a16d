mod catalog;
mod config;
mod configurator;
mod context;
mod persistence;
mod pricing;
mod selection;
mod storage;

pub use catalog::{
    Catalog, CatalogError, Demo, Feature, FixedFeature, OptionEntry, OptionFeature, Price,
};
pub use config::{ConfigError, ConfiguratorConfig};
pub use configurator::{
    Configurator, ConfiguratorView, FeatureCardState, SummaryView, ToggleLabel, TotalDisplay,
    TotalTransition,
};
pub use context::{AppContext, ConfiguratorEvent, Navigator, Route, CONFIGURATOR_EVENTS};
pub use persistence::{
    QuoteHandoff, SelectionPersistence, StorageKeys, SELECTIONS_KEY, SUMMARY_KEY,
};
pub use pricing::{
    format_currency, price_of, summary_lines, summary_text, summary_text_with, total,
    CurrencyFormat, SummaryLine,
};
pub use selection::{ensure_base_feature, normalize, Selection, SelectionStore};
pub use storage::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, StorageError};

// Re-export the EventEmitter from the event_emitter_rs crate
pub use event_emitter_rs::EventEmitter;
