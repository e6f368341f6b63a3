//! Currency codes and their display symbols.

use std::fmt::Display;

/// An ISO 4217 currency code, as reported by the provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Currency {
    Gbp,
    Eur,
    Usd,
    Other(String),
}

impl Currency {
    /// The display symbol for the currency.
    /// Codes without a known symbol show as `?`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Other(_) => "?",
        }
    }

    /// The ISO 4217 code
    pub fn code(&self) -> &str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Other(code) => code,
        }
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        match code {
            "GBP" => Currency::Gbp,
            "EUR" => Currency::Eur,
            "USD" => Currency::Usd,
            _ => Currency::Other(code.to_string()),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn check_symbol(code: &str, expected: &str) {
        let observed = Currency::from(code);

        assert_eq!(expected, observed.symbol());
        assert_eq!(code, observed.code());
    }

    #[test]
    fn known_symbols() {
        check_symbol("GBP", "£");
        check_symbol("EUR", "€");
        check_symbol("USD", "$");
    }

    #[test]
    fn unknown_symbols() {
        check_symbol("JPY", "?");
        check_symbol("gbp", "?");
        check_symbol("", "?");
    }
}
