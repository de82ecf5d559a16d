#![allow(dead_code)]

pub mod recording;
pub mod stores;

use std::sync::Arc;

use build_pricer::{AppContext, Catalog, Configurator, InMemoryKeyValueStore, SelectionPersistence};
use recording::{RecordingNavigator, RecordingView};

/// Shell-side wiring for one configurator page.
pub struct Harness {
    pub catalog: Arc<Catalog>,
    pub navigator: Arc<RecordingNavigator>,
    pub context: Arc<AppContext>,
    pub durable: InMemoryKeyValueStore,
    pub session: InMemoryKeyValueStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_durable(InMemoryKeyValueStore::new())
    }

    pub fn with_durable(durable: InMemoryKeyValueStore) -> Self {
        init_tracing();

        let catalog = Arc::new(Catalog::standard());
        let navigator = Arc::new(RecordingNavigator::default());
        let context = Arc::new(AppContext::new(navigator.clone(), catalog.clone()));

        Self {
            catalog,
            navigator,
            context,
            durable,
            session: InMemoryKeyValueStore::new(),
        }
    }

    pub fn persistence(&self) -> SelectionPersistence {
        SelectionPersistence::new(
            self.catalog.clone(),
            Arc::new(self.durable.clone()),
            Arc::new(self.session.clone()),
        )
    }

    pub fn mount(&self) -> Configurator<RecordingView> {
        Configurator::mount(
            self.context.clone(),
            self.persistence(),
            RecordingView::default(),
        )
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
