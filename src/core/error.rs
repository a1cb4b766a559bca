//! Error types for engines and destinations
//!
//! The [`Logger`](super::Logger) interface never returns these. They travel
//! between an engine and its destination, and adapters swallow them after
//! reporting on stderr.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to a destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Destination worker is gone
    #[error("Destination '{destination}' is closed")]
    DestinationClosed { destination: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a closed destination error
    pub fn destination_closed(destination: impl Into<String>) -> Self {
        LoggerError::DestinationClosed {
            destination: destination.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Report a swallowed engine failure on the side channel.
///
/// Adapters are write-and-forget: a failed write is not retried and is not
/// surfaced through the logger interface.
pub fn report_write_failure(engine: &str, result: Result<()>) {
    if let Err(e) = result {
        eprintln!("[LOGGER ERROR] {} write failed: {}", engine, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");

        let err = LoggerError::destination_closed("async");
        assert_eq!(err.to_string(), "Destination 'async' is closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_report_write_failure_swallows() {
        report_write_failure("test", Ok(()));
        report_write_failure("test", Err(LoggerError::other("simulated")));
    }
}
