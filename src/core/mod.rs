//! Core logger types

pub mod destination;
pub mod error;
pub mod json;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod terminate;
pub mod timestamp;

pub use destination::{ColorMode, Destination, Discard, SharedBuffer};
pub use error::{LoggerError, Result};
pub use json::{to_json, to_json_indent};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{SharedDestination, Sink};
pub use terminate::{Terminate, TerminateKind, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
