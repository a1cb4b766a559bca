//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// `Debug < Info < Warn < Error` is the filter ordering. `Fatal` and `Panic`
/// are terminal: they are always emitted, whatever an engine's minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Lowercase name, as written by the structured and key-value engines
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    /// Whether emitting at this level ends the process or unwinds
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Level::Fatal | Level::Panic)
    }

    /// Severity used by backends without native terminal levels
    #[inline]
    pub fn severity(&self) -> Level {
        if self.is_terminal() {
            Level::Error
        } else {
            *self
        }
    }

    /// Whether a record at this level passes a `min` filter
    #[inline]
    pub fn is_enabled_at(&self, min: Level) -> bool {
        self.is_terminal() || *self >= min
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal | Level::Panic => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "PANIC" => Ok(Level::Panic),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_terminal_levels_always_enabled() {
        for min in Level::ALL {
            assert!(Level::Fatal.is_enabled_at(min));
            assert!(Level::Panic.is_enabled_at(min));
        }
        assert!(!Level::Debug.is_enabled_at(Level::Info));
        assert!(Level::Warn.is_enabled_at(Level::Warn));
    }

    #[test]
    fn test_severity() {
        assert_eq!(Level::Fatal.severity(), Level::Error);
        assert_eq!(Level::Panic.severity(), Level::Error);
        assert_eq!(Level::Warn.severity(), Level::Warn);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Panic".parse::<Level>().unwrap(), Level::Panic);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }
}
