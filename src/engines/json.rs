//! Structured JSON engine
//!
//! Writes each record as a single-line JSON object (JSONL):
//!
//! ```text
//! {"foo":"bar","level":"debug","message":"hi there","time":"2025-01-08T10:30:45.123Z"}
//! ```
//!
//! The native API is a leveled builder: pick a level, add fields, set the
//! message. Context fields are attached with [`JsonEngine::with_context`],
//! which returns a new engine and leaves the original alone.

use super::destination::Destination;
use crate::core::{FieldValue, Fields, Level, Record, Result, TimestampFormat};

#[derive(Debug, Clone)]
pub struct JsonEngine {
    destination: Destination,
    context: Fields,
    min_level: Level,
    timestamp_format: Option<TimestampFormat>,
}

impl JsonEngine {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            context: Fields::new(),
            min_level: Level::Debug,
            timestamp_format: Some(TimestampFormat::default()),
        }
    }

    /// Drop events below `level`; terminal levels always pass
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Omit the `time` key
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// New engine whose context is this one's overridden by `fields`
    #[must_use]
    pub fn with_context(&self, fields: &Fields) -> Self {
        Self {
            destination: self.destination.clone(),
            context: self.context.merged(fields),
            min_level: self.min_level,
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    pub fn context(&self) -> &Fields {
        &self.context
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn event(&self, level: Level) -> Event<'_> {
        Event {
            engine: self,
            level,
            fields: Fields::new(),
        }
    }

    pub fn debug(&self) -> Event<'_> {
        self.event(Level::Debug)
    }

    pub fn info(&self) -> Event<'_> {
        self.event(Level::Info)
    }

    pub fn warn(&self) -> Event<'_> {
        self.event(Level::Warn)
    }

    pub fn error(&self) -> Event<'_> {
        self.event(Level::Error)
    }

    /// Encode a record as one JSON object.
    ///
    /// `level`, `message` and `time` take precedence over same-named fields.
    pub fn encode(&self, record: &Record) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        for (key, value) in record.fields.iter() {
            json_obj.insert(key.to_string(), value.to_json_value());
        }

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.as_lowercase().to_string()),
        );

        if let Some(ref format) = self.timestamp_format {
            json_obj.insert("time".to_string(), format.to_json_value(&record.timestamp));
        }

        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.flush()
    }
}

impl Default for JsonEngine {
    fn default() -> Self {
        Self::new(Destination::stdout())
    }
}

/// One pending JSON event
#[must_use = "an event is only written by calling `msg`"]
pub struct Event<'a> {
    engine: &'a JsonEngine,
    level: Level,
    fields: Fields,
}

impl Event<'_> {
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    pub fn enabled(&self) -> bool {
        self.level.is_enabled_at(self.engine.min_level)
    }

    /// Set the message and write the event
    pub fn msg(self, message: &str) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }

        let fields = self.engine.context.merged(&self.fields);
        let record = Record::new(self.level, message).with_fields(fields);
        let line = self.engine.encode(&record)?;
        self.engine.destination.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SharedBuffer;

    fn engine() -> (JsonEngine, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (JsonEngine::new(buffer.clone().into()), buffer)
    }

    #[test]
    fn test_event_is_one_json_line() -> Result<()> {
        let (engine, buffer) = engine();

        engine.info().field("user_id", 123).msg("User logged in")?;

        let content = buffer.contents();
        assert_eq!(content.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["message"], "User logged in");
        assert_eq!(parsed["user_id"], 123);
        assert!(parsed["time"].is_string());
        Ok(())
    }

    #[test]
    fn test_with_context_copies() -> Result<()> {
        let (engine, buffer) = engine();
        let parent = engine.with_context(&Fields::new().with_field("foo", "bar"));
        let child = parent.with_context(&Fields::new().with_field("foo", "baz"));

        parent.debug().msg("parent")?;
        child.debug().msg("child")?;

        let content = buffer.contents();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].contains(r#""foo":"bar""#));
        assert!(lines[1].contains(r#""foo":"baz""#));
        assert!(engine.context().is_empty());
        Ok(())
    }

    #[test]
    fn test_min_level_filters_but_not_terminal() -> Result<()> {
        let (engine, buffer) = engine();
        let engine = engine.with_min_level(Level::Error).without_timestamp();

        engine.warn().msg("dropped")?;
        engine.event(Level::Fatal).msg("kept")?;

        assert_eq!(buffer.contents(), "{\"level\":\"fatal\",\"message\":\"kept\"}\n");
        Ok(())
    }

    #[test]
    fn test_reserved_keys_win() -> Result<()> {
        let (engine, _buffer) = engine();
        let record = Record::new(Level::Warn, "real")
            .with_fields(Fields::new().with_field("message", "fake"));

        let parsed: serde_json::Value = serde_json::from_str(&engine.encode(&record)?)?;
        assert_eq!(parsed["message"], "real");
        Ok(())
    }

    #[test]
    fn test_numeric_timestamp() -> Result<()> {
        let (engine, buffer) = engine();
        let engine = engine.with_timestamp_format(TimestampFormat::UnixMillis);

        engine.error().msg("boom")?;

        let parsed: serde_json::Value = serde_json::from_str(buffer.contents().trim_end())?;
        assert!(parsed["time"].is_i64());
        Ok(())
    }
}
