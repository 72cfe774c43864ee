//! Formatted output sink
//!
//! A [`Sink`] turns a message into one line of the form
//! `<timestamp> <prefix><message>` and writes it to a shared destination.
//! Every [`Logger`](super::logger::Logger) owns one sink per level, all
//! pointing at the same destination, plus a handle to the process-wide
//! discard sink.

use super::destination::{Destination, Discard};
use super::timestamp::TimestampFormat;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::sync::Arc;

/// Destination shared by the sinks of one logger; the mutex serializes lines.
pub type SharedDestination = Arc<Mutex<Box<dyn Destination>>>;

static DISCARD: Lazy<Arc<Sink>> = Lazy::new(|| {
    Arc::new(Sink {
        out: Arc::new(Mutex::new(Box::new(Discard))),
        prefix: String::new(),
        timestamp: TimestampFormat::default(),
        utc: false,
        discard: true,
    })
});

pub struct Sink {
    out: SharedDestination,
    prefix: String,
    timestamp: TimestampFormat,
    utc: bool,
    discard: bool,
}

impl Sink {
    pub fn new(out: SharedDestination, prefix: impl Into<String>, timestamp: TimestampFormat) -> Self {
        Self {
            out,
            prefix: prefix.into(),
            timestamp,
            utc: false,
            discard: false,
        }
    }

    /// Render timestamps in UTC instead of local time
    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// The shared sink that formats and then drops every message
    ///
    /// It renders with an empty prefix and the `Standard` timestamp, not the
    /// disabled level's own label and timestamp format.
    pub fn discard() -> Arc<Sink> {
        Arc::clone(&DISCARD)
    }

    pub fn is_discard(&self) -> bool {
        self.discard
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp
    }

    /// Build the full line for `message`, appending a newline if it lacks one
    pub fn format_line(&self, message: &str) -> String {
        let stamp = self.timestamp.now(self.utc);
        let mut line = String::with_capacity(stamp.len() + self.prefix.len() + message.len() + 2);
        if !stamp.is_empty() {
            line.push_str(&stamp);
            line.push(' ');
        }
        line.push_str(&self.prefix);
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Write one already rendered message.
    ///
    /// Write failures are swallowed; logging never fails back into the caller.
    pub fn output(&self, message: &str) {
        let line = self.format_line(message);
        let mut out = self.out.lock();
        let _ = out.write_all(line.as_bytes());
    }

    /// Write a single operand as-is
    pub fn print(&self, message: impl Display) {
        self.output(&message.to_string());
    }

    /// Write operands separated by single spaces, always newline-terminated
    pub fn println(&self, parts: &[&dyn Display]) {
        self.output(&join_operands(parts));
    }

    /// Write pre-formatted arguments, usually from `format_args!`
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(literal) => self.output(literal),
            None => self.output(&fmt::format(args)),
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.lock().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("prefix", &self.prefix)
            .field("timestamp", &self.timestamp)
            .field("utc", &self.utc)
            .field("discard", &self.discard)
            .finish()
    }
}

pub(crate) fn join_operands(parts: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        let _ = write!(joined, "{}", part);
    }
    joined.push('\n');
    joined
}
