//! Configurator Controller - wires visitor intent to the selection store.
//!
//! The controller is single-threaded and synchronous: each operation runs
//! to completion, including its storage writes and view updates, before
//! the next one starts. Storage failures never roll back the in-memory
//! build.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use build_pricer::{
//!     AppContext, Catalog, Configurator, ConfiguratorView, FeatureCardState,
//!     InMemoryKeyValueStore, Navigator, Price, SelectionPersistence, SummaryView,
//! };
//!
//! struct NoRouter;
//! impl Navigator for NoRouter {
//!     fn navigate(&self, _route: &str) {}
//! }
//!
//! struct Headless;
//! impl ConfiguratorView for Headless {
//!     fn render_card(&mut self, _card: &FeatureCardState) {}
//!     fn render_summary(&mut self, _summary: &SummaryView) {}
//!     fn render_total(&mut self, _value: Price, _text: &str) {}
//! }
//!
//! let catalog = Arc::new(Catalog::standard());
//! let context = Arc::new(AppContext::new(Arc::new(NoRouter), catalog.clone()));
//! let persistence = SelectionPersistence::new(
//!     catalog,
//!     Arc::new(InMemoryKeyValueStore::new()),
//!     Arc::new(InMemoryKeyValueStore::new()),
//! );
//!
//! let mut configurator = Configurator::mount(context, persistence, Headless);
//! configurator.toggle_fixed("animations");
//! assert_eq!(configurator.total(), 1900);
//! ```

mod controller;
mod transition;
mod view;

pub use controller::Configurator;
pub use transition::{TotalDisplay, TotalTransition};
pub use view::{ConfiguratorView, FeatureCardState, SummaryView, ToggleLabel};
