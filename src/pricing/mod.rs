//! Pricing Engine - pure functions over a catalog and a list of selections.
//!
//! Stale references (a selection naming a feature or option the catalog no
//! longer has) never fail: they price at zero and drop out of summaries.

mod currency;

use crate::catalog::{Catalog, Feature, Price};
use crate::selection::Selection;

pub use currency::{format_currency, CurrencyFormat};

/// One resolvable selection, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub feature_id: String,
    pub name: String,
    /// Label of the effective option, for option features.
    pub option_label: Option<String>,
    /// `None` for an option feature whose option does not resolve.
    pub price: Option<Price>,
}

impl SummaryLine {
    fn render(&self, format: &CurrencyFormat) -> String {
        match (&self.option_label, self.price) {
            (Some(label), Some(price)) => {
                format!("{} ({}) ({})", self.name, label, format.format(price))
            }
            (None, Some(price)) => format!("{} ({})", self.name, format.format(price)),
            (_, None) => self.name.clone(),
        }
    }
}

/// Price of one selection; zero if its feature or option no longer resolves.
pub fn price_of(catalog: &Catalog, selection: &Selection) -> Price {
    match catalog.feature(&selection.feature_id) {
        Some(Feature::Fixed(feature)) => feature.price,
        Some(Feature::Options(feature)) => feature
            .resolve(selection.option_id())
            .map(|option| option.price)
            .unwrap_or(0),
        None => 0,
    }
}

/// Sum of [`price_of`] over every selection.
pub fn total(catalog: &Catalog, selections: &[Selection]) -> Price {
    selections
        .iter()
        .map(|selection| price_of(catalog, selection))
        .sum()
}

/// Resolvable selections in catalog order, one line per feature.
pub fn summary_lines(catalog: &Catalog, selections: &[Selection]) -> Vec<SummaryLine> {
    catalog
        .features()
        .iter()
        .filter_map(|feature| {
            let selection = selections
                .iter()
                .find(|selection| selection.feature_id == feature.id())?;

            let line = match feature {
                Feature::Fixed(fixed) => SummaryLine {
                    feature_id: fixed.id.clone(),
                    name: fixed.name.clone(),
                    option_label: None,
                    price: Some(fixed.price),
                },
                Feature::Options(options) => {
                    let option = options.resolve(selection.option_id());
                    SummaryLine {
                        feature_id: options.id.clone(),
                        name: options.name.clone(),
                        option_label: option.map(|option| option.label.clone()),
                        price: option.map(|option| option.price),
                    }
                }
            };
            Some(line)
        })
        .collect()
}

/// `"<entry>, <entry> | Total: <total>"` using the site's currency format.
pub fn summary_text(catalog: &Catalog, selections: &[Selection]) -> String {
    summary_text_with(catalog, selections, &CurrencyFormat::default())
}

pub fn summary_text_with(
    catalog: &Catalog,
    selections: &[Selection],
    format: &CurrencyFormat,
) -> String {
    let lines = summary_lines(catalog, selections);
    let total: Price = lines.iter().filter_map(|line| line.price).sum();
    let items = lines
        .iter()
        .map(|line| line.render(format))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} | Total: {}", items, format.format(total))
}
