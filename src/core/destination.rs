//! Output destinations and terminal detection
//!
//! A [`Destination`] is any byte stream a [`Logger`](super::logger::Logger)
//! can write to. Besides `io::Write` it answers one question: is this an
//! interactive terminal? Only real console devices say yes; files that
//! turn out to be redirected, in-memory buffers and unknown writers say no.

use is_terminal::IsTerminal;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

pub trait Destination: Write + Send {
    /// Whether this destination is an interactive terminal.
    ///
    /// Defaults to `false`, so unknown writers never receive color codes.
    fn is_tty(&self) -> bool {
        false
    }
}

impl Destination for io::Stdout {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Destination for io::Stderr {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Destination for File {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Destination for Vec<u8> {}

impl Destination for io::Sink {}

impl Destination for io::Cursor<Vec<u8>> {}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

/// Whether label colors are decided by the destination or forced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when the destination reports a terminal
    #[default]
    Auto,
    /// Always color, even for files and buffers
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    pub fn use_colors(self, destination: &dyn Destination) -> bool {
        match self {
            ColorMode::Auto => destination.is_tty(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writer that accepts and drops everything, always reporting full success.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Write for Discard {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Destination for Discard {}

/// Cloneable in-memory destination
///
/// All clones share one buffer, so a test can hand one clone to a logger
/// and read the output back through another.
///
/// # Example
///
/// ```
/// use leveled_log::{Level, Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(buffer.clone(), Level::Info);
/// logger.info("hello");
/// assert!(buffer.contents().ends_with("info  hello\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Destination for SharedBuffer {}
