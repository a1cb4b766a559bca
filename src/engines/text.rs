//! Plain-text line engine
//!
//! Prints preformatted lines, optionally prefixed with a date/time stamp:
//!
//! ```text
//! 2025/01/08 10:30:45 [DEBUG] hi there you
//! ```

use super::destination::Destination;
use crate::core::{sanitize_line, Level, Result, TimestampFormat};
use chrono::Utc;

#[cfg(feature = "console")]
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct TextEngine {
    destination: Destination,
    timestamp_format: Option<TimestampFormat>,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    min_level: Level,
}

impl TextEngine {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            timestamp_format: Some(TimestampFormat::line_prefix()),
            use_colors: false,
            min_level: Level::Debug,
        }
    }

    /// Colorize level tags (needs the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    pub fn enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.min_level)
    }

    /// `[LEVEL]` tag for a line
    pub fn level_tag(&self, level: Level) -> String {
        let tag = format!("[{}]", level.to_str());

        #[cfg(feature = "console")]
        if self.use_colors {
            return tag.color(level.color()).to_string();
        }

        tag
    }

    /// Print one line; embedded line breaks are escaped
    pub fn print(&self, line: &str) -> Result<()> {
        let line = sanitize_line(line);
        match self.timestamp_format {
            Some(ref format) => {
                let stamped = format!("{} {}", format.format(&Utc::now()), line);
                self.destination.write_line(&stamped)
            }
            None => self.destination.write_line(&line),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.flush()
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new(Destination::stdout())
    }
}
