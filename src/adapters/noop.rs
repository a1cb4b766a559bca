//! Adapter that discards everything

use crate::core::{Fields, Level, Logger};

/// Logger that writes nothing.
///
/// `fatal*` still exits the process and `panic*` still unwinds, so swapping
/// this in never changes control flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    pub fn new() -> Self {
        NoopLogger
    }
}

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}

    fn with_fields(&self, _fields: Fields) -> Box<dyn Logger> {
        Box::new(NoopLogger)
    }
}
