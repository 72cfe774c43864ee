//! # Leveled Log
//!
//! A thin leveled-logging facade: one formatted sink per level over a
//! single destination, per-level enable/disable gating, colored level
//! labels on interactive terminals, and an optional process-wide default
//! logger.
//!
//! ## Features
//!
//! - **Level Gating**: levels below the minimum are wired to a shared discard sink
//! - **Terminal Aware**: ANSI-colored labels only when writing to a TTY
//! - **Thread Safe**: level changes swap a complete wiring snapshot
//! - **Explicit Termination**: `fatal*`/`panic*` return a [`Terminate`] signal
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone(), Level::Warn);
//!
//! logger.debug("x");
//! logger.info("y");
//! logger.warn("z");
//! logger.error("w");
//!
//! let lines = buffer.lines();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].ends_with("warn  z"));
//! assert!(lines[1].ends_with("error w"));
//! ```

pub mod macros;

#[cfg(feature = "log-bridge")]
pub mod bridge;
pub mod core;
pub mod global;

pub mod prelude {
    pub use crate::core::{
        to_json, to_json_indent, ColorMode, Destination, Level, Logger, LoggerBuilder,
        LoggerError, Result, SharedBuffer, Sink, Terminate, TerminateKind, TimestampFormat,
    };
    pub use crate::global::default_logger;
}

pub use crate::core::{
    to_json, to_json_indent, ColorMode, Destination, Discard, Level, Logger, LoggerBuilder,
    LoggerError, Result, SharedBuffer, SharedDestination, Sink, Terminate, TerminateKind,
    TimestampFormat, FATAL_EXIT_CODE,
};
pub use global::default_logger;
