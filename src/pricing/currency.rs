use crate::catalog::Price;

/// Whole-unit currency formatting (no decimal places).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
    group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}

impl CurrencyFormat {
    /// US dollars, en-US grouping: `$1,500`.
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ',',
        }
    }

    /// Format for a UI locale.
    ///
    /// Prices are quoted in US dollars whatever the interface language, so
    /// every supported locale currently maps to [`CurrencyFormat::usd`].
    pub fn for_locale(_locale: &str) -> Self {
        Self::usd()
    }

    pub fn format(&self, value: Price) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        format!("{}{}", self.symbol, grouped)
    }
}

/// Format a price the way the site displays it.
pub fn format_currency(value: Price) -> String {
    CurrencyFormat::usd().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(400), "$400");
        assert_eq!(format_currency(1500), "$1,500");
        assert_eq!(format_currency(35000), "$35,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn locales_share_usd() {
        assert_eq!(CurrencyFormat::for_locale("es").format(5400), "$5,400");
        assert_eq!(CurrencyFormat::for_locale("fr"), CurrencyFormat::default());
    }
}
