//! Core logger types and traits

pub mod error;
pub mod fields;
pub mod level;
pub mod logger;
pub mod message;
pub mod record;
pub mod timestamp;

pub use error::{report_write_failure, LoggerError, Result};
pub use fields::{merge, FieldValue, Fields};
pub use level::Level;
pub use logger::{BoxedLogger, Logger, SharedLogger};
pub use message::{format_template, join_variadic, space_separated, Args};
pub use record::{sanitize_line, Record};
pub use timestamp::TimestampFormat;
