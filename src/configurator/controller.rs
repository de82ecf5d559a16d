use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::transition::TotalDisplay;
use super::view::{ConfiguratorView, FeatureCardState, SummaryView};
use crate::catalog::{Catalog, Price};
use crate::context::{AppContext, ConfiguratorEvent, Route};
use crate::persistence::SelectionPersistence;
use crate::pricing::{self, CurrencyFormat};
use crate::selection::{Selection, SelectionStore};

const DEFAULT_TRANSITION: Duration = Duration::from_millis(600);

/// The pricing configurator page.
///
/// Owns the selection store for its lifetime. Every accepted mutation, in
/// order: re-renders the affected card, persists the normalized build,
/// republishes the contact-page handoff, re-renders the summary and starts
/// a total transition. Ignored requests touch nothing.
pub struct Configurator<V: ConfiguratorView> {
    context: Arc<AppContext>,
    persistence: SelectionPersistence,
    store: SelectionStore,
    view: V,
    locale: String,
    format: CurrencyFormat,
    total: TotalDisplay,
    transition: Duration,
    events: Receiver<ConfiguratorEvent>,
    listener_id: Option<String>,
}

impl<V: ConfiguratorView> Configurator<V> {
    /// Load the stored build and render the page.
    pub fn mount(context: Arc<AppContext>, mut persistence: SelectionPersistence, view: V) -> Self {
        let catalog = context.catalog();
        persistence.set_catalog(Arc::clone(&catalog));

        let mut store = SelectionStore::from_selections(catalog, persistence.load());
        if store.resolve_options() {
            persistence.save(store.selections());
        }

        let total = pricing::total(store.catalog(), store.selections());
        let (listener_id, events) = context.subscribe();
        let locale = context.locale();
        let format = CurrencyFormat::for_locale(&locale);

        let mut configurator = Self {
            context,
            persistence,
            store,
            view,
            locale,
            format,
            total: TotalDisplay::new(total),
            transition: DEFAULT_TRANSITION,
            events,
            listener_id,
        };

        configurator.render_all();
        configurator.persistence.publish_summary(configurator.store.selections());

        info!(
            selections = configurator.store.selections().len(),
            total, "configurator mounted"
        );
        configurator
    }

    /// Length of future total transitions.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    pub fn toggle_fixed(&mut self, feature_id: &str) -> bool {
        let changed = self.store.toggle_fixed(feature_id);
        self.commit(feature_id, changed)
    }

    pub fn toggle_option_feature(&mut self, feature_id: &str) -> bool {
        let changed = self.store.toggle_option_feature(feature_id);
        self.commit(feature_id, changed)
    }

    pub fn select_option(&mut self, feature_id: &str, option_id: &str) -> bool {
        let changed = self.store.select_option(feature_id, option_id);
        self.commit(feature_id, changed)
    }

    /// Publish the current build for the contact page and go there.
    pub fn request_quote(&mut self) {
        self.persistence.publish_summary(self.store.selections());
        self.context.navigate(Route::Contact);
    }

    /// Handle catalog/locale changes delivered by the context.
    ///
    /// Waits up to `timeout` for the first event, then drains whatever else
    /// is queued. Returns the number of events handled.
    pub fn process_events(&mut self, timeout: Duration) -> usize {
        let mut next = if timeout.is_zero() {
            self.events.try_recv().ok()
        } else {
            self.events.recv_timeout(timeout).ok()
        };

        let mut handled = 0;
        while let Some(event) = next {
            self.handle_event(event);
            handled += 1;
            next = self.events.try_recv().ok();
        }
        handled
    }

    /// Advance the running-total transition and render the displayed value.
    pub fn tick_total(&mut self, progress: f64) -> Price {
        let value = self.total.sample(progress);
        let text = self.format.format(value);
        self.view.render_total(value, &text);
        value
    }

    /// Selections in catalog order.
    pub fn selections(&self) -> Vec<Selection> {
        self.store.normalized()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.store.catalog()
    }

    /// The true total of the current build.
    pub fn total(&self) -> Price {
        pricing::total(self.store.catalog(), self.store.selections())
    }

    /// The running total as last rendered.
    pub fn displayed_total(&self) -> Price {
        self.total.displayed()
    }

    pub fn summary(&self) -> String {
        pricing::summary_text_with(self.store.catalog(), &self.selections(), &self.format)
    }

    /// Locale the page was last rendered for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn commit(&mut self, feature_id: &str, changed: bool) -> bool {
        if !changed {
            return false;
        }

        self.render_card(feature_id);
        self.store.normalize_in_place();
        self.persistence.save(self.store.selections());
        self.persistence.publish_summary(self.store.selections());
        self.render_summary();

        debug!(
            feature_id,
            option_id = self.store.get(feature_id).and_then(Selection::option_id),
            total = self.total(),
            "selection updated"
        );
        true
    }

    fn handle_event(&mut self, event: ConfiguratorEvent) {
        match event {
            ConfiguratorEvent::LocaleChanged { .. } => {
                // Deliveries can arrive out of order; the context holds the latest.
                self.locale = self.context.locale();
                self.format = CurrencyFormat::for_locale(&self.locale);
                info!(locale = %self.locale, "re-rendering configurator for locale");
            }
            ConfiguratorEvent::CatalogChanged => {
                let catalog = self.context.catalog();
                self.store.replace_catalog(Arc::clone(&catalog));
                self.persistence.set_catalog(catalog);
                self.persistence.save(self.store.selections());
                self.persistence.publish_summary(self.store.selections());
                info!(
                    selections = self.store.selections().len(),
                    "re-rendering configurator for new catalog"
                );
            }
        }

        self.render_all();
    }

    fn render_all(&mut self) {
        let catalog = Arc::clone(self.store.catalog());
        for feature in catalog.features() {
            let card = FeatureCardState::new(feature, self.store.get(feature.id()), &self.format);
            self.view.render_card(&card);
        }
        self.render_summary();
    }

    fn render_card(&mut self, feature_id: &str) {
        let Some(feature) = self.store.catalog().feature(feature_id) else {
            return;
        };
        let card = FeatureCardState::new(feature, self.store.get(feature_id), &self.format);
        self.view.render_card(&card);
    }

    fn render_summary(&mut self) {
        let selections = self.store.selections();
        let catalog = self.store.catalog();
        let total = pricing::total(catalog, selections);
        let summary = SummaryView::new(
            pricing::summary_lines(catalog, selections),
            total,
            &self.format,
        );
        self.view.render_summary(&summary);

        match self.total.retarget(total, self.transition) {
            Some(transition) => self.view.start_total_transition(&transition),
            None => {
                let text = self.format.format(total);
                self.view.render_total(total, &text);
            }
        }
    }
}

impl<V: ConfiguratorView> Drop for Configurator<V> {
    fn drop(&mut self) {
        if let Some(id) = self.listener_id.take() {
            self.context.unsubscribe(&id);
        }
    }
}
