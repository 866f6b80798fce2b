//! Validity window conversion.

use crate::domain::errors::RegistryError;
use chrono::TimeDelta;

/// Validity applied when the caller does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: f64 = 30.0;

/// Converts a validity in minutes into a duration of whole seconds.
///
/// Fractional seconds are rounded up, so any positive validity yields at
/// least one second.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidValidity`] if `minutes` is not a positive
/// finite number or does not fit in a [`TimeDelta`].
pub fn validity_duration(minutes: f64) -> Result<TimeDelta, RegistryError> {
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(RegistryError::InvalidValidity);
    }

    let seconds = (minutes * 60.0).ceil();
    if seconds > i64::MAX as f64 {
        return Err(RegistryError::InvalidValidity);
    }

    TimeDelta::try_seconds(seconds as i64).ok_or(RegistryError::InvalidValidity)
}
