/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{I64_F64_BOUND, MICROS_PER_UNIT};
use crate::error::AppError;

/// Converts an amount in account currency units to micros
///
/// The value is rounded to the nearest micro, so `12.34` becomes `12_340_000`
/// even though `12.34 * 1e6` is not exactly representable.
///
/// Fails with [`AppError::Validation`] when the amount is not finite or its
/// micros value does not fit in an `i64`.
///
/// # Examples
/// ```
/// use gads_client::utils::finance::to_micros;
/// assert_eq!(to_micros(12.34).unwrap(), 12_340_000);
/// assert!(to_micros(1.0e13).is_err());
/// ```
pub fn to_micros(amount: f64) -> Result<i64, AppError> {
    let micros = (amount * MICROS_PER_UNIT).round();
    if !micros.is_finite() || micros >= I64_F64_BOUND || micros < -I64_F64_BOUND {
        return Err(AppError::Validation(format!(
            "amount {amount} is out of range for micros"
        )));
    }
    Ok(micros as i64)
}

/// Converts an amount in micros to account currency units
///
/// # Examples
/// ```
/// use gads_client::utils::finance::from_micros;
/// assert_eq!(from_micros(12_340_000), 12.34);
/// ```
#[must_use]
pub fn from_micros(micros: i64) -> f64 {
    micros as f64 / MICROS_PER_UNIT
}

/// Converts a fractional micros amount (e.g. `metrics.average_cpc`) to units
#[must_use]
pub fn from_micros_f64(micros: f64) -> f64 {
    micros / MICROS_PER_UNIT
}
