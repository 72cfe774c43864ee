//! Bridge from the `log` facade
//!
//! Lets dependencies that log through `log::info!` and friends write
//! through a [`Logger`]. Trace records are treated as Debug.

use crate::core::{Level, Logger, LoggerError, Result};

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        self.for_level(record.level().into()).printf(*record.args());
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Install `logger` as the `log` facade backend.
///
/// The facade's max level is left wide open; gating stays with the
/// logger, so later `set_level` calls on the returned handle take effect.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    let logger: &'static Logger = Box::leak(Box::new(logger));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInstalled)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(logger)
}
