//! Fractional time decomposition.
//!
//! Converts a real-valued quantity of hours or minutes into whole
//! (hours, minutes, seconds) components. Each step truncates toward zero and
//! carries the fractional remainder into the next finer unit, so `1.5` hours
//! becomes 1 hour 30 minutes and `-1.5` becomes -1 hour -30 minutes.
//!
//! Truncation, not rounding, is the contract: the reconstructed duration may
//! undershoot the input by up to one second, and callers relying on the exact
//! component values (e.g. `hours(1.25)` giving 15 minutes, never 14 or 16)
//! get stable results for exactly-representable fractions.

use crate::error::DateMathError;
use crate::offset::Offset;

/// Decomposes a fractional quantity of hours into whole hours, minutes, and
/// seconds.
///
/// Quantities whose whole part exceeds the `i64` range saturate and are
/// rejected as out of range when the offset is applied.
pub fn hours(value: f64) -> Result<Offset, DateMathError> {
    check_finite("hours", value)?;

    let whole_hours = value.trunc();
    let minutes_real = (value - whole_hours) * 60.0;
    let whole_minutes = minutes_real.trunc();
    let seconds_real = (minutes_real - whole_minutes) * 60.0;

    let offset = Offset {
        hours: trunc_i64(whole_hours),
        minutes: trunc_i64(whole_minutes),
        seconds: trunc_i64(seconds_real),
    };
    tracing::trace!(
        value,
        hours = offset.hours,
        minutes = offset.minutes,
        seconds = offset.seconds,
        "decomposed fractional hours"
    );
    Ok(offset)
}

/// Decomposes a fractional quantity of minutes into whole minutes and
/// seconds. The hours component is always zero.
pub fn minutes(value: f64) -> Result<Offset, DateMathError> {
    check_finite("minutes", value)?;

    let whole_minutes = value.trunc();
    let seconds_real = (value - whole_minutes) * 60.0;

    Ok(Offset {
        hours: 0,
        minutes: trunc_i64(whole_minutes),
        seconds: trunc_i64(seconds_real),
    })
}

/// Truncates a fractional quantity of seconds. Seconds are the finest unit
/// modeled, so the fractional part is discarded.
pub fn seconds(value: f64) -> Result<Offset, DateMathError> {
    check_finite("seconds", value)?;
    Ok(Offset::seconds(trunc_i64(value)))
}

fn check_finite(unit: &'static str, value: f64) -> Result<(), DateMathError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DateMathError::NonFinite { unit, value })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn trunc_i64(value: f64) -> i64 {
    value.trunc() as i64
}
