use crate::catalog::{Feature, Price};
use crate::pricing::{CurrencyFormat, SummaryLine};
use crate::selection::Selection;

/// Caption of a feature card's toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    /// Required feature; the toggle is disabled.
    Included,
    Remove,
    AddToBuild,
    Selected,
    ChooseOption,
}

impl ToggleLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleLabel::Included => "Included",
            ToggleLabel::Remove => "Remove",
            ToggleLabel::AddToBuild => "Add to build",
            ToggleLabel::Selected => "Selected",
            ToggleLabel::ChooseOption => "Choose option",
        }
    }
}

/// Everything a feature card shows that depends on the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCardState {
    pub feature_id: String,
    pub selected: bool,
    /// Toggle disabled; the feature is always part of the build.
    pub required: bool,
    pub toggle_label: ToggleLabel,
    /// Option shown as chosen: the selected one, else the default.
    pub displayed_option_id: Option<String>,
    pub option_label: Option<String>,
    pub price: Option<Price>,
    pub price_text: Option<String>,
    /// Option list visibility; open exactly while an option feature is selected.
    pub details_open: bool,
}

impl FeatureCardState {
    pub fn new(feature: &Feature, selection: Option<&Selection>, format: &CurrencyFormat) -> Self {
        let selected = selection.is_some();

        match feature {
            Feature::Fixed(fixed) => Self {
                feature_id: fixed.id.clone(),
                selected,
                required: fixed.required,
                toggle_label: if fixed.required {
                    ToggleLabel::Included
                } else if selected {
                    ToggleLabel::Remove
                } else {
                    ToggleLabel::AddToBuild
                },
                displayed_option_id: None,
                option_label: None,
                price: Some(fixed.price),
                price_text: Some(format.format(fixed.price)),
                details_open: false,
            },
            Feature::Options(options) => {
                let option = options.resolve(selection.and_then(Selection::option_id));
                Self {
                    feature_id: options.id.clone(),
                    selected,
                    required: false,
                    toggle_label: if selected {
                        ToggleLabel::Selected
                    } else {
                        ToggleLabel::ChooseOption
                    },
                    displayed_option_id: option.map(|option| option.id.clone()),
                    option_label: option.map(|option| option.label.clone()),
                    price: option.map(|option| option.price),
                    price_text: option.map(|option| format.format(option.price)),
                    details_open: selected,
                }
            }
        }
    }
}

/// The "Your Build" panel: priced lines and the true total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// Lines with a resolvable price, in catalog order.
    pub lines: Vec<SummaryLine>,
    pub total: Price,
    pub total_text: String,
}

impl SummaryView {
    pub fn new(lines: Vec<SummaryLine>, total: Price, format: &CurrencyFormat) -> Self {
        Self {
            lines: lines.into_iter().filter(|line| line.price.is_some()).collect(),
            total,
            total_text: format.format(total),
        }
    }

    /// No priced lines; the panel shows its placeholder.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Rendering surface driven by the configurator.
///
/// Calls arrive synchronously, inside the operation that caused them.
pub trait ConfiguratorView {
    /// Update one card in place.
    fn render_card(&mut self, card: &FeatureCardState);

    /// Replace the summary list.
    fn render_summary(&mut self, summary: &SummaryView);

    /// Show `value` as the running total.
    fn render_total(&mut self, value: Price, text: &str);

    /// A transition of the running total started; the host drives it with
    /// [`Configurator::tick_total`](super::Configurator::tick_total).
    fn start_total_transition(&mut self, _transition: &super::TotalTransition) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn required_card_is_included_and_disabled() {
        let catalog = Catalog::standard();
        let card = FeatureCardState::new(
            catalog.feature("landing").unwrap(),
            Some(&Selection::feature("landing")),
            &CurrencyFormat::default(),
        );

        assert!(card.selected && card.required);
        assert_eq!(card.toggle_label, ToggleLabel::Included);
        assert_eq!(card.price_text.as_deref(), Some("$1,500"));
    }

    #[test]
    fn fixed_card_labels_follow_selection() {
        let catalog = Catalog::standard();
        let feature = catalog.feature("animations").unwrap();
        let format = CurrencyFormat::default();

        let off = FeatureCardState::new(feature, None, &format);
        assert_eq!(off.toggle_label.as_str(), "Add to build");

        let on = FeatureCardState::new(feature, Some(&Selection::feature("animations")), &format);
        assert_eq!(on.toggle_label.as_str(), "Remove");
        assert!(!on.details_open);
    }

    #[test]
    fn option_card_shows_chosen_or_default_option() {
        let catalog = Catalog::standard();
        let feature = catalog.feature("multipage").unwrap();
        let format = CurrencyFormat::default();

        let off = FeatureCardState::new(feature, None, &format);
        assert_eq!(off.toggle_label, ToggleLabel::ChooseOption);
        assert_eq!(off.displayed_option_id.as_deref(), Some("multi-3-5"));
        assert!(!off.details_open);

        let on = FeatureCardState::new(
            feature,
            Some(&Selection::option("multipage", "multi-6-10")),
            &format,
        );
        assert_eq!(on.toggle_label, ToggleLabel::Selected);
        assert_eq!(on.option_label.as_deref(), Some("6-10 pages"));
        assert_eq!(on.price_text.as_deref(), Some("$3,500"));
        assert!(on.details_open);
    }

    #[test]
    fn summary_view_drops_unpriced_lines() {
        let lines = vec![
            SummaryLine {
                feature_id: "a".into(),
                name: "A".into(),
                option_label: None,
                price: Some(10),
            },
            SummaryLine {
                feature_id: "b".into(),
                name: "B".into(),
                option_label: None,
                price: None,
            },
        ];

        let view = SummaryView::new(lines, 10, &CurrencyFormat::default());
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.total_text, "$10");
        assert!(!view.is_empty());
    }
}
