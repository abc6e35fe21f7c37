//! Numeric-to-date convenience helpers.
//!
//! Each helper interprets a real number as a quantity in one unit, decomposes
//! it into whole components, and moves the reference forward by the result.
//! Negative values land before the reference.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::decompose;
use crate::error::DateMathError;
use crate::offset::Direction;

/// Timestamp `value` hours after `reference` (before, if negative).
pub fn hours_from(value: f64, reference: DateTime<Utc>) -> Result<DateTime<Utc>, DateMathError> {
    decompose::hours(value)?.apply(reference, Direction::Forward)
}

/// Timestamp `value` minutes after `reference` (before, if negative).
pub fn minutes_from(value: f64, reference: DateTime<Utc>) -> Result<DateTime<Utc>, DateMathError> {
    decompose::minutes(value)?.apply(reference, Direction::Forward)
}

/// Timestamp `value` seconds after `reference` (before, if negative).
pub fn seconds_from(value: f64, reference: DateTime<Utc>) -> Result<DateTime<Utc>, DateMathError> {
    decompose::seconds(value)?.apply(reference, Direction::Forward)
}

/// Timestamp `value` hours after the clock's current instant.
pub fn hours_from_now(value: f64, clock: &impl Clock) -> Result<DateTime<Utc>, DateMathError> {
    hours_from(value, clock.now())
}

/// Timestamp `value` minutes after the clock's current instant.
pub fn minutes_from_now(value: f64, clock: &impl Clock) -> Result<DateTime<Utc>, DateMathError> {
    minutes_from(value, clock.now())
}

/// Timestamp `value` seconds after the clock's current instant.
pub fn seconds_from_now(value: f64, clock: &impl Clock) -> Result<DateTime<Utc>, DateMathError> {
    seconds_from(value, clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn epoch_plus(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn whole_quantities_from_reference() {
        let t0 = epoch_plus(1000);
        assert_eq!(hours_from(2.0, t0).unwrap(), epoch_plus(8200));
        assert_eq!(minutes_from(90.0, t0).unwrap(), epoch_plus(6400));
        assert_eq!(seconds_from(-10.0, t0).unwrap(), epoch_plus(990));
    }

    #[test]
    fn fractional_hours_carry_into_minutes() {
        let t0 = epoch_plus(1000);
        assert_eq!(hours_from(1.5, t0).unwrap(), epoch_plus(6400));
    }

    #[test]
    fn fractional_minutes_carry_into_seconds() {
        let t0 = epoch_plus(1000);
        assert_eq!(minutes_from(1.5, t0).unwrap(), epoch_plus(1090));
    }

    #[test]
    fn from_now_uses_the_injected_clock() {
        let clock = FixedClock(epoch_plus(1000));
        assert_eq!(hours_from_now(1.0, &clock).unwrap(), epoch_plus(4600));
        assert_eq!(minutes_from_now(-1.0, &clock).unwrap(), epoch_plus(940));
        assert_eq!(seconds_from_now(30.0, &clock).unwrap(), epoch_plus(1030));
    }

    #[test]
    fn non_finite_quantity_propagates_the_error() {
        let t0 = epoch_plus(1000);
        assert!(hours_from(f64::NAN, t0).is_err());
    }
}
