//! Timestamp formats used by the engines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Timestamp rendering for engine output
///
/// # Examples
///
/// ```
/// use rust_log_adapter::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Microseconds since the epoch
    UnixMicros,

    /// Any strftime-compatible format string; an invalid one renders as [`Iso8601`](Self::Iso8601)
    Custom(String),
}

impl TimestampFormat {
    /// Date and time the way line-oriented loggers print them: `2025/01/08 10:30:45`
    pub fn line_prefix() -> Self {
        TimestampFormat::Custom("%Y/%m/%d %H:%M:%S".to_string())
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format(ISO8601).to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(ISO8601).to_string();
                }
                out
            }
        }
    }

    /// JSON value for structured output; numeric formats stay numbers
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => serde_json::Value::Number(datetime.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            TimestampFormat::UnixMicros => {
                serde_json::Value::Number(datetime.timestamp_micros().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            TimestampFormat::Iso8601.format(&fixed_datetime()),
            "2025-01-08T10:30:45.123Z"
        );
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&fixed_datetime()),
            "2025-01-08T10:30:45.123456Z"
        );
    }

    #[test]
    fn test_line_prefix() {
        assert_eq!(
            TimestampFormat::line_prefix().format(&fixed_datetime()),
            "2025/01/08 10:30:45"
        );
    }

    #[test]
    fn test_invalid_custom_falls_back_to_iso8601() {
        let expected = TimestampFormat::Iso8601.format(&fixed_datetime());

        for bad in ["%Q", "%", "at %Y %!"] {
            let format = TimestampFormat::Custom(bad.to_string());
            assert_eq!(format.format(&fixed_datetime()), expected);
            assert_eq!(
                format.to_json_value(&fixed_datetime()),
                serde_json::Value::String(expected.clone())
            );
        }
    }

    #[test]
    fn test_json_value_numeric() {
        let value = TimestampFormat::UnixMillis.to_json_value(&fixed_datetime());
        assert!(value.is_number());
        assert!(TimestampFormat::UnixMillis.is_numeric());

        let value = TimestampFormat::Rfc3339.to_json_value(&fixed_datetime());
        assert!(value.as_str().unwrap().starts_with("2025-01-08T10:30:45"));
    }
}
