//! Adapter over the JSON engine

use crate::core::{report_write_failure, Fields, Level, Logger};
use crate::engines::JsonEngine;

/// Logger writing one JSON object per record.
///
/// Fatal and panic records keep their own level strings (`"fatal"`,
/// `"panic"`); termination is handled by the [`Logger`] trait after the
/// write, never by the engine.
#[derive(Debug, Clone, Default)]
pub struct StructuredLogger {
    engine: JsonEngine,
}

impl StructuredLogger {
    /// Wrap `engine`, or a default engine writing to stdout
    pub fn new(engine: Option<JsonEngine>) -> Self {
        Self {
            engine: engine.unwrap_or_default(),
        }
    }

    pub fn engine(&self) -> &JsonEngine {
        &self.engine
    }

    /// Typed form of [`Logger::with_fields`]
    pub fn child(&self, fields: &Fields) -> StructuredLogger {
        Self {
            engine: self.engine.with_context(fields),
        }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, level: Level, message: &str) {
        report_write_failure("json", self.engine.event(level).msg(message));
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.child(&fields))
    }

    fn flush(&self) {
        report_write_failure("json", self.engine.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SharedBuffer;

    fn logger() -> (StructuredLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let engine = JsonEngine::new(buffer.clone().into()).without_timestamp();
        (StructuredLogger::new(Some(engine)), buffer)
    }

    #[test]
    fn test_debug_with_fields() {
        let (logger, buffer) = logger();

        logger
            .with_fields(Fields::new().with_field("foo", "bar"))
            .debug(&[&"hi", &"there"]);

        assert_eq!(
            buffer.contents(),
            "{\"foo\":\"bar\",\"level\":\"debug\",\"message\":\"hi there\"}\n"
        );
    }

    #[test]
    fn test_each_level_string() {
        let (logger, buffer) = logger();

        logger.debug(&[&"d"]);
        logger.infof("{}", &[&"i"]);
        logger.warnln(&[&"w"]);
        logger.error(&[&"e"]);

        let levels: Vec<String> = buffer
            .contents()
            .lines()
            .map(|line| {
                let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
                parsed["level"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(levels, vec!["debug", "info", "warn", "error"]);
    }

    #[test]
    fn test_override_and_isolation() {
        let (logger, buffer) = logger();
        let parent = logger.with_fields(Fields::new().with_field("foo", "oldval"));
        let child = parent.with_fields(Fields::new().with_field("foo", "newval"));

        child.info(&[&"child"]);
        parent.info(&[&"parent"]);

        let content = buffer.contents();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].contains("\"foo\":\"newval\""));
        assert!(lines[1].contains("\"foo\":\"oldval\""));
        assert!(!lines[1].contains("newval"));
    }

    #[test]
    fn test_panic_level_written_before_unwind() {
        let (logger, buffer) = logger();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic(&[&"bad", &"state"]);
        }));

        assert!(result.is_err());
        assert_eq!(
            buffer.contents(),
            "{\"level\":\"panic\",\"message\":\"bad state\"}\n"
        );
    }

    #[test]
    fn test_default_writes_to_stdout() {
        let logger = StructuredLogger::default();
        assert_eq!(logger.engine().context().len(), 0);
    }
}
