//! INR currency conversion.

use crate::domain::{Conversion, Currency};
use crate::error::ServiceError;

/// Convert a raw INR amount string into a target currency.
///
/// The amount is user text and may be anything; it must parse to a finite
/// positive number. The target code must be in the rate table — the UI only
/// offers supported codes, so that failure is reachable only through direct
/// misuse of the service.
pub fn convert_currency(amount: &str, target_code: &str) -> Result<Conversion, ServiceError> {
    let original_amount: f64 = amount
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite() && *v > 0.0)
        .ok_or(ServiceError::InvalidAmount)?;

    let target = Currency::from_code(target_code).ok_or(ServiceError::UnsupportedCurrency)?;

    let rate = target.rate();
    Ok(Conversion {
        original_amount,
        target,
        result: format!("{:.2}", original_amount * rate),
        rate,
    })
}
