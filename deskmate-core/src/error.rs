//! Service error taxonomy.
//!
//! The `Display` strings are the full user-visible contract: the TUI renders
//! them verbatim in error banners, so the wording here is load-bearing.

use thiserror::Error;

/// Errors a simulated service call can surface.
///
/// Every error is terminal for the current attempt only; a new trigger
/// starts a fresh request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Amount did not parse to a finite positive number.
    #[error("Invalid amount entered. Please enter a positive number.")]
    InvalidAmount,

    /// Currency code is not in the fixed rate table.
    #[error("Unsupported target currency.")]
    UnsupportedCurrency,

    /// The weather sentinel city.
    #[error("City data is currently unavailable.")]
    CityUnavailable,

    /// Injected quote-fetch fault (never produced by the service itself).
    #[error("Quote service is unavailable. Please try again.")]
    QuoteUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_exact() {
        assert_eq!(
            ServiceError::InvalidAmount.to_string(),
            "Invalid amount entered. Please enter a positive number."
        );
        assert_eq!(
            ServiceError::UnsupportedCurrency.to_string(),
            "Unsupported target currency."
        );
        assert_eq!(
            ServiceError::CityUnavailable.to_string(),
            "City data is currently unavailable."
        );
        assert_eq!(
            ServiceError::QuoteUnavailable.to_string(),
            "Quote service is unavailable. Please try again."
        );
    }
}
