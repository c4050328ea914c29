//! Currencies and conversion results.
//!
//! The rate table is the single authority on which target codes are
//! supported; `Currency::from_code` is how the service decides between a
//! conversion and an `UnsupportedCurrency` failure.

use serde::{Deserialize, Serialize};

/// Supported conversion targets. Rates are INR → target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// Uppercase wire/display code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Fixed INR → target rate.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => 0.012,
            Currency::Eur => 0.011,
        }
    }

    /// Look a code up in the rate table. Case-sensitive on purpose: the UI
    /// always sends uppercase codes, and anything else is the unsupported
    /// path.
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.code() == code)
    }

    /// The other supported currency — the UI's selector is a two-way toggle.
    pub fn toggled(self) -> Currency {
        match self {
            Currency::Usd => Currency::Eur,
            Currency::Eur => Currency::Usd,
        }
    }
}

/// Result of a successful conversion.
///
/// `result` is the amount in the target currency fixed to two decimals;
/// it always equals `format!("{:.2}", original_amount * rate)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub original_amount: f64,
    pub target: Currency,
    pub result: String,
    pub rate: f64,
}
