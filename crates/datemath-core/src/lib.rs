//! Numeric-to-date offset arithmetic.
//!
//! This crate turns real numbers into timestamp offsets:
//! - Decomposition: a fractional quantity of hours or minutes becomes whole
//!   (hours, minutes, seconds) components by repeated truncation toward zero
//! - Application: whole components move a `DateTime<Utc>` forward or backward
//! - Convenience: `hours_from`, `minutes_from_now`, etc. combine the two,
//!   reading "now" from an injectable [`Clock`]
//!
//! ```
//! use chrono::DateTime;
//! use datemath_core::{Offset, future, hours_from};
//!
//! let reference = DateTime::from_timestamp(1000, 0).unwrap();
//! let later = hours_from(1.5, reference).unwrap();
//! assert_eq!(later, future(reference, Offset { hours: 1, minutes: 30, seconds: 0 }).unwrap());
//! ```

pub mod clock;
pub mod decompose;
mod error;
pub mod offset;
pub mod relative;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DateMathError;
pub use offset::{Direction, Offset, future, past};
pub use relative::{
    hours_from, hours_from_now, minutes_from, minutes_from_now, seconds_from, seconds_from_now,
};
