//! In-memory logger for tests
//!
//! Every record is appended to a shared buffer as `[LEVEL] message fields`
//! and counted. Derived loggers share the buffer and the counter with the
//! logger they came from, so a test can hand a child to the code under test
//! and inspect everything through the root.

use crate::core::{Fields, Level, Logger, Record};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct CaptureState {
    bytes: Vec<u8>,
    calls: usize,
    records: Vec<Record>,
}

/// Logger capturing output in memory.
///
/// Not meant for production use.
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    state: Arc<Mutex<CaptureState>>,
    fields: Fields,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.state.lock().bytes.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().bytes).into_owned()
    }

    /// Number of records written since creation or the last [`reset`](Self::reset)
    pub fn call_count(&self) -> usize {
        self.state.lock().calls
    }

    /// Records written at `level`, counted the same way as [`call_count`](Self::call_count)
    pub fn call_count_for(&self, level: Level) -> usize {
        self.state
            .lock()
            .records
            .iter()
            .filter(|record| record.level == level)
            .count()
    }

    /// Captured records, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.state.lock().records.clone()
    }

    /// Clear the buffer and the counter together
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.bytes.clear();
        state.calls = 0;
        state.records.clear();
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Typed form of [`Logger::with_fields`]; shares this logger's buffer
    pub fn child(&self, fields: &Fields) -> CaptureLogger {
        Self {
            state: Arc::clone(&self.state),
            fields: self.fields.merged(fields),
        }
    }

    fn line(&self, level: Level, message: &str) -> String {
        if self.fields.is_empty() {
            format!("[{}] {}\n", level, message)
        } else {
            format!("[{}] {} {}\n", level, message, self.fields.render())
        }
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, message: &str) {
        let line = self.line(level, message);
        let record = Record::new(level, message).with_fields(self.fields.clone());

        let mut state = self.state.lock();
        state.bytes.extend_from_slice(line.as_bytes());
        state.calls += 1;
        state.records.push(record);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.child(&fields))
    }
}
