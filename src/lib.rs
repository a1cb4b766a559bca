//! # Rust Log Adapter
//!
//! One small logging interface, many interchangeable backends.
//!
//! Application code depends on the [`Logger`] trait. Which engine ends up
//! writing the records (structured JSON, logfmt key-value pairs, plain text,
//! nothing at all, or an in-memory buffer for tests) is decided where the
//! logger is constructed, and every adapter behaves the same for the same
//! sequence of calls.
//!
//! ## Features
//!
//! - **Uniform interface**: variadic, template and line variants per level
//! - **Contextual fields**: derive child loggers without touching the parent
//! - **Interchangeable adapters**: structured, key-value, plain-text, no-op, capture
//! - **Thread safe**: every logger is `Send + Sync`
//!
//! ## Example
//!
//! ```
//! use rust_log_adapter::prelude::*;
//!
//! fn handle(logger: &dyn Logger, id: u32) {
//!     let logger = logger.with_fields(fields! { "request_id" => id });
//!     logger.infof("handled in {}ms", &[&12]);
//! }
//!
//! let capture = CaptureLogger::new();
//! handle(&capture, 7);
//! assert_eq!(capture.contents(), "[INFO] handled in 12ms request_id=7\n");
//!
//! // Same call site, different backend
//! handle(&NoopLogger::new(), 7);
//! ```

pub mod adapters;
pub mod core;
pub mod engines;
pub mod macros;

pub mod prelude {
    pub use crate::adapters::{CaptureLogger, KvLogger, NoopLogger, SimpleLogger, StructuredLogger};
    pub use crate::core::{
        BoxedLogger, FieldValue, Fields, Level, Logger, LoggerError, Result, SharedLogger,
        TimestampFormat,
    };
    pub use crate::engines::{Destination, JsonEngine, LogfmtEngine, SharedBuffer, TextEngine};
    pub use crate::fields;
}

pub use adapters::{CaptureLogger, KvLogger, NoopLogger, SimpleLogger, StructuredLogger};
pub use core::{
    format_template, join_variadic, merge, report_write_failure, space_separated, Args,
    BoxedLogger, FieldValue, Fields, Level, Logger, LoggerError, Record, Result, SharedLogger,
    TimestampFormat,
};
pub use engines::{Destination, JsonEngine, LogfmtEngine, SharedBuffer, TextEngine};
