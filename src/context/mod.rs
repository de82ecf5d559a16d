//! Application context - shell-owned state shared with page controllers.
//!
//! The shell builds one [`AppContext`] and hands an `Arc` of it to every
//! page controller. It carries the router, the active catalog and locale,
//! and an [`EventEmitter`] that tells mounted controllers when the catalog
//! or locale changed so they can re-render.
//!
//! Emitter listeners run on their own threads; a subscriber receives events
//! through a channel and handles them on its own turn.

mod navigation;

use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{ConfigError, ConfiguratorConfig};

pub use navigation::{Navigator, Route};

/// Emitter event name carrying serialized [`ConfiguratorEvent`]s.
pub const CONFIGURATOR_EVENTS: &str = "configurator";

/// Changes a mounted configurator must re-render for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfiguratorEvent {
    LocaleChanged { locale: String },
    CatalogChanged,
}

/// Navigation, catalog, locale and change notifications for one app shell.
pub struct AppContext {
    navigator: Arc<dyn Navigator>,
    catalog: RwLock<Arc<Catalog>>,
    locale: RwLock<String>,
    emitter: Mutex<EventEmitter>,
}

impl AppContext {
    pub fn new(navigator: Arc<dyn Navigator>, catalog: Arc<Catalog>) -> Self {
        Self {
            navigator,
            catalog: RwLock::new(catalog),
            locale: RwLock::new("en".to_string()),
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Build a context from configuration, loading and validating its catalog.
    pub fn from_config(
        navigator: Arc<dyn Navigator>,
        config: &ConfiguratorConfig,
    ) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(navigator, Arc::new(catalog)).with_locale(config.locale.clone()))
    }

    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.into();
        self
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route.as_str());
    }

    /// The active catalog.
    pub fn catalog(&self) -> Arc<Catalog> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*catalog)
    }

    pub fn locale(&self) -> String {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switch the interface language and notify subscribers.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();

        info!(%locale, "locale changed");
        self.emit(&ConfiguratorEvent::LocaleChanged { locale });
    }

    /// Swap the active catalog and notify subscribers.
    pub fn replace_catalog(&self, catalog: Arc<Catalog>) {
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;

        info!("catalog replaced");
        self.emit(&ConfiguratorEvent::CatalogChanged);
    }

    /// Register for change events. Returns the listener id (for
    /// [`unsubscribe`](Self::unsubscribe)) and the receiving end.
    pub fn subscribe(&self) -> (Option<String>, Receiver<ConfiguratorEvent>) {
        let (tx, rx) = channel();
        let tx = Mutex::new(tx);

        let id = self.emitter.lock().ok().map(|mut emitter| {
            emitter.on(CONFIGURATOR_EVENTS, move |payload: String| {
                match serde_json::from_str::<ConfiguratorEvent>(&payload) {
                    Ok(event) => {
                        if let Ok(tx) = tx.lock() {
                            let _ = tx.send(event);
                        }
                    }
                    Err(e) => warn!(error = %e, "dropping undecodable configurator event"),
                }
            })
        });

        (id, rx)
    }

    pub fn unsubscribe(&self, listener_id: &str) {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.remove_listener(listener_id);
        }
    }

    fn emit(&self, event: &ConfiguratorEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to encode configurator event");
                return;
            }
        };

        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(CONFIGURATOR_EVENTS, payload);
            }
            Err(_) => warn!("configurator event emitter poisoned"),
        }
    }
}
