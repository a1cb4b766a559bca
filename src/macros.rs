//! Logging macros for ergonomic call sites.
//!
//! The leveled macros take any number of `Display` values and hand them to the
//! matching [`Logger`](crate::Logger) method, so callers don't have to build
//! the `&[&dyn Display]` slice by hand.
//!
//! # Examples
//!
//! ```
//! use rust_log_adapter::prelude::*;
//! use rust_log_adapter::{info, warnf};
//!
//! let logger = CaptureLogger::new();
//!
//! // Values are joined with single spaces
//! let port = 8080;
//! info!(logger, "listening on port", port);
//!
//! // Runtime templates use `{}` and `{N}` placeholders
//! warnf!(logger, "retry {} of {}", 3, 5);
//!
//! assert_eq!(
//!     logger.contents(),
//!     "[INFO] listening on port 8080\n[WARN] retry 3 of 5\n"
//! );
//! ```

/// Build a [`Fields`](crate::Fields) set from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_log_adapter::fields;
///
/// let fields = fields! { "user_id" => 42, "action" => "login" };
/// assert_eq!(fields.render(), "action=login user_id=42");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Fields::new()$(.with_field($key, $value))+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_call {
    ($logger:expr, $method:ident, $($arg:expr),* $(,)?) => {{
        use $crate::Logger as _;
        $logger.$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logf_call {
    ($logger:expr, $method:ident, $format:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.$method($format, &[$(&$arg as &dyn ::std::fmt::Display),*])
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # let logger = CaptureLogger::new();
/// use rust_log_adapter::debug;
/// debug!(logger, "counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, debug, $($arg),*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # let logger = CaptureLogger::new();
/// use rust_log_adapter::info;
/// info!(logger, "processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, info, $($arg),*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, warn, $($arg),*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # let logger = CaptureLogger::new();
/// use rust_log_adapter::error;
/// error!(logger, "connection refused");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, error, $($arg),*)
    };
}

/// Log a fatal message, then exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, fatal, $($arg),*)
    };
}

/// Log a debug-level message as one line; same output as [`debug!`].
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, debugln, $($arg),*)
    };
}

/// Log an info-level message as one line; same output as [`info!`].
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # let logger = CaptureLogger::new();
/// use rust_log_adapter::infoln;
/// infoln!(logger, "ready", true);
/// assert_eq!(logger.contents(), "[INFO] ready true\n");
/// ```
#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, infoln, $($arg),*)
    };
}

/// Log a warning-level message as one line; same output as [`warn!`].
#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, warnln, $($arg),*)
    };
}

/// Log an error-level message as one line; same output as [`error!`].
#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_call!($logger, errorln, $($arg),*)
    };
}

/// Log a debug-level message from a runtime template.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, debugf, $format $(, $arg)*)
    };
}

/// Log an info-level message from a runtime template.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # let logger = CaptureLogger::new();
/// use rust_log_adapter::infof;
/// infof!(logger, "user {} performed {}", 42, "login");
/// assert_eq!(logger.contents(), "[INFO] user 42 performed login\n");
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, infof, $format $(, $arg)*)
    };
}

/// Log a warning-level message from a runtime template.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, warnf, $format $(, $arg)*)
    };
}

/// Log an error-level message from a runtime template.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, errorf, $format $(, $arg)*)
    };
}

/// Log a fatal message from a runtime template, then exit with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, fatalf, $format $(, $arg)*)
    };
}

/// Log a panic-level message from a runtime template, then panic.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::__logf_call!($logger, panicf, $format $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_fields_macro() {
        let empty = fields!();
        assert!(empty.is_empty());

        let fields = fields! { "b" => 2, "a" => "x", };
        assert_eq!(fields.render(), "a=x b=2");
    }

    #[test]
    fn test_leveled_macros() {
        let logger = CaptureLogger::new();
        let count = 3;

        debug!(logger, "a", count);
        info!(logger);
        warn!(&logger, "by", "ref");
        error!(logger, "e",);

        assert_eq!(
            logger.contents(),
            "[DEBUG] a 3\n[INFO] \n[WARN] by ref\n[ERROR] e\n"
        );
    }

    #[test]
    fn test_line_macros() {
        let logger = CaptureLogger::new();
        let child = logger.child(&fields! { "k" => "v" });

        debugln!(logger, "a", 1);
        infoln!(child, "b");
        warnln!(&logger);
        errorln!(logger, "c", 2.5,);

        assert_eq!(
            logger.contents(),
            "[DEBUG] a 1\n[INFO] b k=v\n[WARN] \n[ERROR] c 2.5\n"
        );
        assert_eq!(logger.call_count(), 4);
    }

    #[test]
    fn test_template_macros() {
        let logger = CaptureLogger::new();
        let boxed: BoxedLogger = Box::new(logger.clone());

        debugf!(boxed, "hi there {}", "you");
        errorf!(logger, "{1} before {0}", "b", "a");
        infof!(logger, "no args");

        assert_eq!(
            logger.contents(),
            "[DEBUG] hi there you\n[ERROR] a before b\n[INFO] no args\n"
        );
    }

    #[test]
    fn test_panicf_macro_unwinds() {
        let logger = CaptureLogger::new();
        let captured = logger.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            panicf!(logger, "bad {}", 1);
        }));

        assert!(result.is_err());
        assert_eq!(captured.contents(), "[PANIC] bad 1\n");
    }
}
