//! Logger implementations, one per engine
//!
//! Every adapter takes an optional, already-configured engine; `None` selects
//! the engine's default writing to standard output.

pub mod capture;
pub mod kv;
pub mod noop;
pub mod simple;
pub mod structured;

pub use capture::CaptureLogger;
pub use kv::KvLogger;
pub use noop::NoopLogger;
pub use simple::SimpleLogger;
pub use structured::StructuredLogger;
