//! Adapter over the plain-text engine

use crate::core::{report_write_failure, Fields, Level, Logger};
use crate::engines::TextEngine;

/// Logger printing `[LEVEL] message key=value ...` lines.
#[derive(Debug, Clone, Default)]
pub struct SimpleLogger {
    engine: TextEngine,
    fields: Fields,
}

impl SimpleLogger {
    /// Wrap `engine`, or a default engine writing to stdout
    pub fn new(engine: Option<TextEngine>) -> Self {
        Self {
            engine: engine.unwrap_or_default(),
            fields: Fields::new(),
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Typed form of [`Logger::with_fields`]
    pub fn child(&self, fields: &Fields) -> SimpleLogger {
        Self {
            engine: self.engine.clone(),
            fields: self.fields.merged(fields),
        }
    }

    fn line(&self, level: Level, message: &str) -> String {
        let tag = self.engine.level_tag(level);
        if self.fields.is_empty() {
            format!("{} {}", tag, message)
        } else {
            format!("{} {} {}", tag, message, self.fields.render())
        }
    }
}

impl Logger for SimpleLogger {
    fn log(&self, level: Level, message: &str) {
        if !self.engine.enabled(level) {
            return;
        }
        report_write_failure("text", self.engine.print(&self.line(level, message)));
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.child(&fields))
    }

    fn flush(&self) {
        report_write_failure("text", self.engine.flush());
    }
}
