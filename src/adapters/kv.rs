//! Adapter over the logfmt engine
//!
//! The engine appends context pairs without deduplicating them, so the
//! adapter keeps the merged field set itself and derives each child engine
//! from the root engine it was built with. Overridden keys are therefore
//! written once, with the newest value.

use crate::core::{report_write_failure, FieldValue, Fields, Level, Logger};
use crate::engines::LogfmtEngine;

#[derive(Debug, Clone)]
pub struct KvLogger {
    root: LogfmtEngine,
    fields: Fields,
    engine: LogfmtEngine,
}

impl KvLogger {
    /// Wrap `engine`, or a default engine writing to stdout
    pub fn new(engine: Option<LogfmtEngine>) -> Self {
        let root = engine.unwrap_or_default();
        Self {
            engine: root.clone(),
            root,
            fields: Fields::new(),
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Typed form of [`Logger::with_fields`]
    pub fn child(&self, fields: &Fields) -> KvLogger {
        let fields = self.fields.merged(fields);
        Self {
            engine: self.root.with(fields.to_keyvals()),
            root: self.root.clone(),
            fields,
        }
    }
}

impl Default for KvLogger {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Marker for terminal levels the engine has no level for
fn terminal_marker(level: Level) -> Option<&'static str> {
    match level {
        Level::Fatal => Some("[FATAL] "),
        Level::Panic => Some("[PANIC] "),
        _ => None,
    }
}

impl Logger for KvLogger {
    fn log(&self, level: Level, message: &str) {
        let message = match terminal_marker(level) {
            Some(marker) => format!("{}{}", marker, message),
            None => message.to_string(),
        };

        // terminal records are emitted whatever the engine's minimum level
        let leveled = if level.is_terminal() {
            self.engine.leveled_unfiltered(level.severity())
        } else {
            self.engine.leveled(level)
        };
        let result = leveled.log(&[("msg", FieldValue::String(message))]);
        report_write_failure("logfmt", result);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.child(&fields))
    }

    fn flush(&self) {
        report_write_failure("logfmt", self.engine.flush());
    }
}
