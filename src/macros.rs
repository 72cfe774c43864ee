//! Logging macros for format-string emission.
//!
//! Each macro takes the logger first, then `format!`-style arguments, and
//! forwards `format_args!` to the matching `*f` method.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::info;
//!
//! let logger = Logger::new(SharedBuffer::new(), Level::Debug);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new(SharedBuffer::new(), Level::Debug);
/// use leveled_log::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.for_level($level).printf(::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new(SharedBuffer::new(), Level::Debug);
/// use leveled_log::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a warn-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log at Error level and evaluate to an exit [`Terminate`](crate::Terminate) signal.
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new(SharedBuffer::new(), Level::Debug);
/// use leveled_log::fatal;
/// let signal = fatal!(logger, "config {} missing", "app.toml");
/// assert_eq!(signal.kind(), TerminateKind::Exit);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
