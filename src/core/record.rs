//! Log record structure

use super::fields::Fields;
use super::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One logical log call: produced per call by an engine and dropped after the
/// write. Only the capture adapter keeps records around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub level: Level,
    pub message: String,
    #[serde(flatten)]
    pub fields: Fields,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Fields::new(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}

/// Escape line breaks and tabs so one record stays on one output line.
///
/// Keeps injected text from forging extra log lines.
pub fn sanitize_line(message: &str) -> String {
    if !message.contains(|c: char| matches!(c, '\n' | '\r' | '\t')) {
        return message.to_string();
    }
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_flattened_fields() {
        let record = Record::new(Level::Warn, "disk low")
            .with_fields(Fields::new().with_field("free_mb", 12));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["level"], "Warn");
        assert_eq!(json["message"], "disk low");
        assert_eq!(json["free_mb"], 12);
    }

    #[test]
    fn test_sanitize_line() {
        assert_eq!(sanitize_line("plain"), "plain");
        assert_eq!(
            sanitize_line("User login\nERROR fake\r\tx"),
            "User login\\nERROR fake\\r\\tx"
        );
    }
}
