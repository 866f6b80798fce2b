//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the camelCase JSON contract of the public API; timestamps
//! are rendered as ISO-8601 strings with millisecond precision.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
pub mod stats_list;

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso_string(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_string_format() {
        let time = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        assert_eq!(to_iso_string(time), "2024-01-01T00:00:00.000Z");
    }
}
