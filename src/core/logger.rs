//! The logging interface every adapter implements
//!
//! Adapters supply two things: how one already-rendered message reaches their
//! engine ([`Logger::log`]) and how a child handle with more fields is built
//! ([`Logger::with_fields`]). Message rendering, the line policy and the
//! terminal levels live here as provided methods, so every adapter behaves
//! the same for the same call sequence.

use super::fields::Fields;
use super::level::Level;
use super::message::{format_template, join_variadic, Args};
use std::io::Write;
use std::sync::Arc;

/// Uniform logging interface.
///
/// No method returns an error: engine failures are swallowed by the adapter
/// and reported on stderr.
///
/// Every record is written as exactly one newline-terminated line, so the
/// `*ln` variants render the same message as their plain counterparts.
///
/// # Example
///
/// ```
/// use rust_log_adapter::prelude::*;
///
/// let logger = CaptureLogger::new();
/// let child = logger.with_fields(fields! { "request_id" => "abc-123" });
///
/// child.info(&[&"served", &3, &"items"]);
/// child.warnf("slow response: {}ms", &[&840]);
///
/// let out = logger.contents();
/// assert!(out.contains("[INFO] served 3 items request_id=abc-123"));
/// assert!(out.contains("[WARN] slow response: 840ms"));
/// assert_eq!(logger.call_count(), 2);
/// ```
pub trait Logger: Send + Sync {
    /// Emit one record carrying this handle's fields
    fn log(&self, level: Level, message: &str);

    /// Derive a handle whose fields are this handle's fields overridden by
    /// `fields`. The receiver is left untouched.
    fn with_fields(&self, fields: Fields) -> Box<dyn Logger>;

    /// Push buffered output to the destination
    fn flush(&self) {}

    fn debug(&self, args: &Args<'_>) {
        self.log(Level::Debug, &join_variadic(args));
    }

    fn info(&self, args: &Args<'_>) {
        self.log(Level::Info, &join_variadic(args));
    }

    fn warn(&self, args: &Args<'_>) {
        self.log(Level::Warn, &join_variadic(args));
    }

    fn error(&self, args: &Args<'_>) {
        self.log(Level::Error, &join_variadic(args));
    }

    fn debugf(&self, format: &str, args: &Args<'_>) {
        self.log(Level::Debug, &format_template(format, args));
    }

    fn infof(&self, format: &str, args: &Args<'_>) {
        self.log(Level::Info, &format_template(format, args));
    }

    fn warnf(&self, format: &str, args: &Args<'_>) {
        self.log(Level::Warn, &format_template(format, args));
    }

    fn errorf(&self, format: &str, args: &Args<'_>) {
        self.log(Level::Error, &format_template(format, args));
    }

    fn debugln(&self, args: &Args<'_>) {
        self.log(Level::Debug, &join_variadic(args));
    }

    fn infoln(&self, args: &Args<'_>) {
        self.log(Level::Info, &join_variadic(args));
    }

    fn warnln(&self, args: &Args<'_>) {
        self.log(Level::Warn, &join_variadic(args));
    }

    fn errorln(&self, args: &Args<'_>) {
        self.log(Level::Error, &join_variadic(args));
    }

    /// Log at `Fatal`, flush, then exit the process with status 1
    fn fatal(&self, args: &Args<'_>) -> ! {
        terminate(self, Level::Fatal, join_variadic(args))
    }

    fn fatalf(&self, format: &str, args: &Args<'_>) -> ! {
        terminate(self, Level::Fatal, format_template(format, args))
    }

    fn fatalln(&self, args: &Args<'_>) -> ! {
        terminate(self, Level::Fatal, join_variadic(args))
    }

    /// Log at `Panic`, flush, then panic with the rendered message as a
    /// `String` payload
    fn panic(&self, args: &Args<'_>) -> ! {
        terminate(self, Level::Panic, join_variadic(args))
    }

    fn panicf(&self, format: &str, args: &Args<'_>) -> ! {
        terminate(self, Level::Panic, format_template(format, args))
    }

    fn panicln(&self, args: &Args<'_>) -> ! {
        terminate(self, Level::Panic, join_variadic(args))
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Write the terminal record, then end the process or unwind. Runs exactly
/// once per call and never before the record is flushed.
fn terminate<L: Logger + ?Sized>(logger: &L, level: Level, message: String) -> ! {
    logger.log(level, &message);
    logger.flush();

    if level == Level::Panic {
        std::panic::panic_any(message);
    }

    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(1)
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        (**self).with_fields(fields)
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        (**self).with_fields(fields)
    }

    fn flush(&self) {
        (**self).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Minimal logger recording `(level, message)` pairs
    #[derive(Default, Clone)]
    struct Recording {
        lines: Arc<Mutex<Vec<(Level, String)>>>,
        fields: Fields,
    }

    impl Logger for Recording {
        fn log(&self, level: Level, message: &str) {
            let mut line = message.to_string();
            if !self.fields.is_empty() {
                line.push(' ');
                line.push_str(&self.fields.render());
            }
            self.lines.lock().push((level, line));
        }

        fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
            Box::new(Recording {
                lines: Arc::clone(&self.lines),
                fields: self.fields.merged(&fields),
            })
        }
    }

    #[test]
    fn test_provided_methods_render_messages() {
        let logger = Recording::default();

        logger.debug(&[&"hi", &"there"]);
        logger.infof("hi {}", &[&"there"]);
        logger.warnln(&[&"hi", &"there"]);
        logger.error(&[&42]);

        let lines = logger.lines.lock().clone();
        assert_eq!(
            lines,
            vec![
                (Level::Debug, "hi there".to_string()),
                (Level::Info, "hi there".to_string()),
                (Level::Warn, "hi there".to_string()),
                (Level::Error, "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_panic_unwinds_after_write() {
        let logger = Recording::default();
        let recorded = logger.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            logger.panicf("boom {}", &[&7]);
        }));

        let payload = result.expect_err("panic variant must unwind");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom 7"));
        assert_eq!(recorded.lines.lock()[0], (Level::Panic, "boom 7".to_string()));
    }

    #[test]
    fn test_box_and_arc_forwarding() {
        let recording = Recording::default();
        let boxed: BoxedLogger = Box::new(recording.clone());
        let shared: SharedLogger = Arc::new(recording.clone());

        boxed.info(&[&"boxed"]);
        shared.with_fields(Fields::new().with_field("k", 1)).info(&[&"shared"]);

        let lines = recording.lines.lock().clone();
        assert_eq!(lines[0].1, "boxed");
        assert_eq!(lines[1].1, "shared k=1");
    }
}
