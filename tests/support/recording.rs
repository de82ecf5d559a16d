//! Recording doubles for the page shell: a view and a router.

#![allow(dead_code)]

use std::sync::Mutex;

use build_pricer::{
    ConfiguratorView, FeatureCardState, Navigator, Price, SummaryView, TotalTransition,
};

/// View that records every render call.
#[derive(Default)]
pub struct RecordingView {
    pub cards: Vec<FeatureCardState>,
    pub summaries: Vec<SummaryView>,
    pub totals: Vec<(Price, String)>,
    pub transitions: Vec<TotalTransition>,
}

impl RecordingView {
    pub fn last_card(&self, feature_id: &str) -> Option<&FeatureCardState> {
        self.cards
            .iter()
            .rev()
            .find(|card| card.feature_id == feature_id)
    }

    pub fn last_summary(&self) -> Option<&SummaryView> {
        self.summaries.last()
    }

    pub fn last_transition(&self) -> Option<&TotalTransition> {
        self.transitions.last()
    }
}

impl ConfiguratorView for RecordingView {
    fn render_card(&mut self, card: &FeatureCardState) {
        self.cards.push(card.clone());
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        self.summaries.push(summary.clone());
    }

    fn render_total(&mut self, value: Price, text: &str) {
        self.totals.push((value, text.to_string()));
    }

    fn start_total_transition(&mut self, transition: &TotalTransition) {
        self.transitions.push(*transition);
    }
}

/// Router that remembers where it was sent.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
