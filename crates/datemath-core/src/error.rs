//! Error taxonomy for offset arithmetic.

use thiserror::Error;

/// Errors produced when turning numeric quantities into timestamps.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DateMathError {
    /// The fractional quantity was infinite or NaN.
    #[error("{unit} quantity must be finite, got {value}")]
    NonFinite { unit: &'static str, value: f64 },

    /// The offset total, or the offset applied to its reference, does not fit
    /// the representable time range.
    #[error("offset of {hours}h {minutes}m {seconds}s is out of range")]
    OutOfRange { hours: i64, minutes: i64, seconds: i64 },
}
