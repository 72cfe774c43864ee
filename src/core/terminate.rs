//! Termination signal returned by the `fatal*` and `panic*` emission forms
//!
//! The logger writes the message and hands the decision back to the
//! caller. The signal is produced even when the Error level is disabled.

use std::fmt;

/// Exit status used by [`Terminate::raise`] for [`TerminateKind::Exit`].
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminateKind {
    /// Exit the process with a non-zero status
    Exit,
    /// Unwind with a panic carrying the message
    Panic,
}

/// A request to stop, carrying the message that was logged
///
/// # Example
///
/// ```should_panic
/// use leveled_log::{Level, Logger, SharedBuffer};
///
/// let logger = Logger::new(SharedBuffer::new(), Level::Debug);
/// logger.panic("invariant broken").raise();
/// ```
#[must_use = "a Terminate signal does nothing until `raise` is called"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminate {
    kind: TerminateKind,
    message: String,
}

impl Terminate {
    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            kind: TerminateKind::Exit,
            message: message.into(),
        }
    }

    pub fn panic(message: impl Into<String>) -> Self {
        Self {
            kind: TerminateKind::Panic,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> TerminateKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        FATAL_EXIT_CODE
    }

    /// Carry out the termination: exit the process or panic.
    pub fn raise(self) -> ! {
        match self.kind {
            TerminateKind::Exit => std::process::exit(FATAL_EXIT_CODE),
            TerminateKind::Panic => panic!("{}", self.message.trim_end_matches('\n')),
        }
    }
}

impl fmt::Display for Terminate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            TerminateKind::Exit => "fatal",
            TerminateKind::Panic => "panic",
        };
        write!(f, "{}: {}", verb, self.message.trim_end_matches('\n'))
    }
}
