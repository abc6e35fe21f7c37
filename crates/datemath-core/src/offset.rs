//! Whole-component time offsets and their application to timestamps.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DateMathError;

/// A signed offset in whole hours, minutes, and seconds.
///
/// Components default to zero and may be set independently. Components are
/// not normalized: `Offset { minutes: 90, ..Offset::default() }` is a valid
/// offset of 5400 seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Whole hours, may be negative.
    #[serde(default)]
    pub hours: i64,
    /// Whole minutes, may be negative.
    #[serde(default)]
    pub minutes: i64,
    /// Whole seconds, may be negative.
    #[serde(default)]
    pub seconds: i64,
}

/// Which way an offset moves a reference timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Later than the reference.
    Forward,
    /// Earlier than the reference.
    Backward,
}

impl Offset {
    /// Offset of `hours` whole hours.
    #[must_use]
    pub const fn hours(hours: i64) -> Self {
        Self {
            hours,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Offset of `minutes` whole minutes.
    #[must_use]
    pub const fn minutes(minutes: i64) -> Self {
        Self {
            hours: 0,
            minutes,
            seconds: 0,
        }
    }

    /// Offset of `seconds` whole seconds.
    #[must_use]
    pub const fn seconds(seconds: i64) -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds,
        }
    }

    /// Total duration of the offset: `seconds + 60*minutes + 3600*hours`.
    pub fn to_delta(self) -> Result<TimeDelta, DateMathError> {
        let total = self
            .hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(self.minutes.checked_mul(60)?))
            .and_then(|hm| hm.checked_add(self.seconds))
            .ok_or_else(|| self.out_of_range())?;

        TimeDelta::try_seconds(total).ok_or_else(|| self.out_of_range())
    }

    /// Moves `reference` by this offset in the given direction.
    pub fn apply(
        self,
        reference: DateTime<Utc>,
        direction: Direction,
    ) -> Result<DateTime<Utc>, DateMathError> {
        let delta = self.to_delta()?;
        let shifted = match direction {
            Direction::Forward => reference.checked_add_signed(delta),
            Direction::Backward => reference.checked_sub_signed(delta),
        };
        shifted.ok_or_else(|| self.out_of_range())
    }

    const fn out_of_range(self) -> DateMathError {
        DateMathError::OutOfRange {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

/// Timestamp later than `reference` by `offset`.
pub fn future(reference: DateTime<Utc>, offset: Offset) -> Result<DateTime<Utc>, DateMathError> {
    offset.apply(reference, Direction::Forward)
}

/// Timestamp earlier than `reference` by `offset`.
pub fn past(reference: DateTime<Utc>, offset: Offset) -> Result<DateTime<Utc>, DateMathError> {
    offset.apply(reference, Direction::Backward)
}
