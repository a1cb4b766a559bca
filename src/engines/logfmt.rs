//! Key-value engine writing logfmt lines
//!
//! ```text
//! level=debug foo=bar msg="hi there"
//! ```
//!
//! Context is an ordered key/value sequence attached with [`LogfmtEngine::with`].
//! Keys are not deduplicated here: appending a key that is already present
//! writes it twice, so callers that need override semantics resolve them
//! before handing pairs over.

use super::destination::Destination;
use crate::core::{FieldValue, Level, Result, TimestampFormat};
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct LogfmtEngine {
    destination: Destination,
    context: Vec<(String, FieldValue)>,
    min_level: Level,
    timestamp_format: Option<TimestampFormat>,
}

impl LogfmtEngine {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            context: Vec::new(),
            min_level: Level::Debug,
            timestamp_format: None,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Prefix every line with a `ts=` pair
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// New engine with `keyvals` appended to this one's context
    #[must_use]
    pub fn with<I, K, V>(&self, keyvals: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut engine = self.clone();
        engine
            .context
            .extend(keyvals.into_iter().map(|(k, v)| (k.into(), v.into())));
        engine
    }

    pub fn context(&self) -> &[(String, FieldValue)] {
        &self.context
    }

    /// Logger that prefixes a `level=` pair and applies the level filter
    pub fn leveled(&self, level: Level) -> Leveled<'_> {
        Leveled {
            engine: self,
            level,
            bypass_filter: false,
        }
    }

    /// Like [`leveled`](Self::leveled), but always written whatever the
    /// minimum level. For records standing in for levels this engine lacks.
    pub fn leveled_unfiltered(&self, level: Level) -> Leveled<'_> {
        Leveled {
            engine: self,
            level,
            bypass_filter: true,
        }
    }

    /// Write one line without a level pair
    pub fn log(&self, keyvals: &[(&str, FieldValue)]) -> Result<()> {
        self.write(None, keyvals)
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.flush()
    }

    /// Encode one line: `ts`, `level`, context, then the call's pairs
    pub fn encode(&self, level: Option<Level>, keyvals: &[(&str, FieldValue)]) -> String {
        let mut parts = Vec::with_capacity(self.context.len() + keyvals.len() + 2);

        if let Some(ref format) = self.timestamp_format {
            parts.push(format!("ts={}", escape_value(&format.format(&Utc::now()))));
        }

        if let Some(level) = level {
            parts.push(format!("level={}", level.as_lowercase()));
        }

        for (key, value) in &self.context {
            parts.push(encode_pair(key, value));
        }
        for (key, value) in keyvals {
            parts.push(encode_pair(key, value));
        }

        parts.join(" ")
    }

    fn write(&self, level: Option<Level>, keyvals: &[(&str, FieldValue)]) -> Result<()> {
        self.destination.write_line(&self.encode(level, keyvals))
    }
}

impl Default for LogfmtEngine {
    fn default() -> Self {
        Self::new(Destination::stdout())
    }
}

pub struct Leveled<'a> {
    engine: &'a LogfmtEngine,
    level: Level,
    bypass_filter: bool,
}

impl Leveled<'_> {
    pub fn enabled(&self) -> bool {
        self.bypass_filter || self.level.is_enabled_at(self.engine.min_level)
    }

    pub fn log(&self, keyvals: &[(&str, FieldValue)]) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }
        self.engine.write(Some(self.level), keyvals)
    }
}

fn encode_pair(key: &str, value: &FieldValue) -> String {
    let value = match value {
        FieldValue::String(s) => escape_value(s),
        other => other.to_string(),
    };
    format!("{}={}", escape_key(key), value)
}

/// Keep only characters that cannot break the `key=value` grammar
fn escape_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Quote when the value is empty or contains spaces, quotes, `=` or control characters
fn escape_value(value: &str) -> String {
    if value.is_empty()
        || value.contains(|c: char| c == ' ' || c == '"' || c == '=' || c.is_control())
    {
        quote_value(value)
    } else {
        value.to_string()
    }
}

fn quote_value(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SharedBuffer;

    fn engine() -> (LogfmtEngine, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (LogfmtEngine::new(buffer.clone().into()), buffer)
    }

    #[test]
    fn test_leveled_line() {
        let (engine, buffer) = engine();
        let engine = engine.with([("foo", "bar")]);

        engine
            .leveled(Level::Debug)
            .log(&[("msg", FieldValue::from("hi there"))])
            .unwrap();

        assert_eq!(buffer.contents(), "level=debug foo=bar msg=\"hi there\"\n");
    }

    #[test]
    fn test_with_leaves_parent_alone() {
        let (engine, _buffer) = engine();
        let child = engine.with([("a", 1)]);

        assert!(engine.context().is_empty());
        assert_eq!(child.context().len(), 1);
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let (engine, _buffer) = engine();
        let engine = engine.with([("foo", "a")]).with([("foo", "b")]);

        assert_eq!(engine.encode(None, &[]), "foo=a foo=b");
    }

    #[test]
    fn test_escape_special_chars() {
        let (engine, _buffer) = engine();
        let line = engine.encode(
            Some(Level::Info),
            &[
                ("query", FieldValue::from("SELECT * FROM users WHERE id=1")),
                ("empty", FieldValue::from("")),
                ("multi", FieldValue::from("a\nb")),
                ("count", FieldValue::from(5)),
            ],
        );

        assert_eq!(
            line,
            "level=info query=\"SELECT * FROM users WHERE id=1\" empty=\"\" multi=\"a\\nb\" count=5"
        );
    }

    #[test]
    fn test_key_filtering() {
        assert_eq!(escape_key("user id=1"), "userid1");
        assert_eq!(escape_key("http.status_code"), "http.status_code");
    }

    #[test]
    fn test_min_level() {
        let (engine, buffer) = engine();
        let engine = engine.with_min_level(Level::Warn);

        engine.leveled(Level::Info).log(&[("msg", "skip".into())]).unwrap();
        engine.leveled(Level::Error).log(&[("msg", "keep".into())]).unwrap();

        assert_eq!(buffer.contents(), "level=error msg=keep\n");
    }

    #[test]
    fn test_unfiltered_ignores_min_level() {
        let (engine, buffer) = engine();
        let engine = engine.with_min_level(Level::Panic);

        engine.leveled(Level::Error).log(&[("msg", "skip".into())]).unwrap();
        engine
            .leveled_unfiltered(Level::Error)
            .log(&[("msg", "keep".into())])
            .unwrap();

        assert_eq!(buffer.contents(), "level=error msg=keep\n");
    }

    #[test]
    fn test_timestamp_prefix() {
        let (engine, _buffer) = engine();
        let engine = engine.with_timestamp_format(TimestampFormat::Unix);

        let line = engine.encode(Some(Level::Warn), &[]);
        assert!(line.starts_with("ts="));
        assert!(line.ends_with(" level=warn"));
    }
}
