//! Main logger implementation

use super::{
    destination::{ColorMode, Destination},
    error::Result,
    log_level::Level,
    sink::{join_operands, SharedDestination, Sink},
    terminate::Terminate,
    timestamp::TimestampFormat,
};
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Level-to-sink wiring for one minimum level.
///
/// Never mutated; `set_level` replaces the whole snapshot so readers see
/// either the old wiring or the new one, never a mix.
struct ActiveSinks {
    level: Level,
    sinks: [Arc<Sink>; Level::COUNT],
}

/// A leveled logger over a single destination
///
/// Holds one formatted [`Sink`] per level. Levels below the current
/// minimum are wired to the shared discard sink, so every emission takes
/// the same path whether the level is enabled or not.
///
/// Each emission shape takes its operands differently: `debug`/`info`/...
/// take a single `Display` value written as-is (compose several operands
/// yourself or use the `ln` form), `debugln`/`infoln`/... join a slice of
/// operands with single spaces, and `debugf`/`infof`/... take
/// `format_args!` output.
///
/// # Example
///
/// ```
/// use leveled_log::{Level, Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(buffer.clone(), Level::Warn);
///
/// logger.info("dropped");
/// logger.warn("kept");
/// assert_eq!(buffer.lines().len(), 1);
/// ```
pub struct Logger {
    sinks: [Arc<Sink>; Level::COUNT],
    discard: Arc<Sink>,
    active: RwLock<Arc<ActiveSinks>>,
    colored: bool,
}

impl Logger {
    /// Create a logger writing enabled levels to `out`, starting at `level`.
    #[must_use]
    pub fn new<D: Destination + 'static>(out: D, level: Level) -> Self {
        LoggerBuilder::new().level(level).build(out)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn with_config(out: Box<dyn Destination>, config: LoggerBuilder) -> Self {
        let colored = config.color_mode.use_colors(&*out);
        let shared: SharedDestination = Arc::new(Mutex::new(out));

        let sinks = Level::ALL.map(|level| {
            Arc::new(
                Sink::new(
                    Arc::clone(&shared),
                    level_prefix(level, colored),
                    config.timestamp_format.clone(),
                )
                .with_utc(config.utc),
            )
        });
        let discard = Sink::discard();

        let initial = ActiveSinks {
            level: config.level,
            sinks: Level::ALL.map(|_| Arc::clone(&discard)),
        };
        let logger = Self {
            sinks,
            discard,
            active: RwLock::new(Arc::new(initial)),
            colored,
        };
        logger.set_level(config.level);
        logger
    }

    fn resolve(&self, level: Level, min_level: Level) -> Arc<Sink> {
        if level >= min_level {
            Arc::clone(&self.sinks[level.index()])
        } else {
            Arc::clone(&self.discard)
        }
    }

    /// Change the minimum enabled level.
    ///
    /// All four slots are rewired every time and the new snapshot is
    /// swapped in under the write lock.
    pub fn set_level(&self, level: Level) {
        let snapshot = ActiveSinks {
            level,
            sinks: Level::ALL.map(|l| self.resolve(l, level)),
        };
        *self.active.write() = Arc::new(snapshot);
    }

    /// Set the minimum level from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid level (`0..=3`). Out-of-range
    /// values only come from hard-coded misuse.
    pub fn set_level_index(&self, value: u8) {
        match Level::try_from(value) {
            Ok(level) => self.set_level(level),
            Err(e) => panic!("{}", e),
        }
    }

    #[inline]
    fn snapshot(&self) -> Arc<ActiveSinks> {
        Arc::clone(&*self.active.read())
    }

    pub fn level(&self) -> Level {
        self.snapshot().level
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// The sink currently wired for `level`: its real sink when enabled,
    /// the discard sink otherwise.
    pub fn for_level(&self, level: Level) -> Arc<Sink> {
        Arc::clone(&self.snapshot().sinks[level.index()])
    }

    /// Whether level labels are wrapped in color codes
    pub fn uses_colors(&self) -> bool {
        self.colored
    }

    pub fn flush(&self) -> Result<()> {
        self.sinks[0].flush()?;
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Display) {
        self.for_level(Level::Debug).print(message);
    }

    #[inline]
    pub fn debugln(&self, parts: &[&dyn Display]) {
        self.for_level(Level::Debug).println(parts);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.for_level(Level::Debug).printf(args);
    }

    #[inline]
    pub fn info(&self, message: impl Display) {
        self.for_level(Level::Info).print(message);
    }

    #[inline]
    pub fn infoln(&self, parts: &[&dyn Display]) {
        self.for_level(Level::Info).println(parts);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.for_level(Level::Info).printf(args);
    }

    #[inline]
    pub fn warn(&self, message: impl Display) {
        self.for_level(Level::Warn).print(message);
    }

    #[inline]
    pub fn warnln(&self, parts: &[&dyn Display]) {
        self.for_level(Level::Warn).println(parts);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.for_level(Level::Warn).printf(args);
    }

    #[inline]
    pub fn error(&self, message: impl Display) {
        self.for_level(Level::Error).print(message);
    }

    #[inline]
    pub fn errorln(&self, parts: &[&dyn Display]) {
        self.for_level(Level::Error).println(parts);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.for_level(Level::Error).printf(args);
    }

    /// Same as [`Logger::info`]
    #[inline]
    pub fn print(&self, message: impl Display) {
        self.info(message);
    }

    /// Same as [`Logger::infoln`]
    #[inline]
    pub fn println(&self, parts: &[&dyn Display]) {
        self.infoln(parts);
    }

    /// Same as [`Logger::infof`]
    #[inline]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.infof(args);
    }

    /// Log at Error level and return an exit signal.
    ///
    /// The signal does not depend on the level wiring: should the Error slot
    /// hold the discard sink, the message is dropped but termination is
    /// still requested.
    pub fn fatal(&self, message: impl Display) -> Terminate {
        Terminate::exit(self.emit_error(message.to_string()))
    }

    pub fn fatalln(&self, parts: &[&dyn Display]) -> Terminate {
        Terminate::exit(self.emit_error(join_operands(parts)))
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> Terminate {
        Terminate::exit(self.emit_error(fmt::format(args)))
    }

    /// Log at Error level and return a panic signal, regardless of level.
    pub fn panic(&self, message: impl Display) -> Terminate {
        Terminate::panic(self.emit_error(message.to_string()))
    }

    pub fn panicln(&self, parts: &[&dyn Display]) -> Terminate {
        Terminate::panic(self.emit_error(join_operands(parts)))
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> Terminate {
        Terminate::panic(self.emit_error(fmt::format(args)))
    }

    fn emit_error(&self, message: String) -> String {
        self.for_level(Level::Error).output(&message);
        message
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("colored", &self.colored)
            .finish()
    }
}

/// Level label, wrapped in the level's ANSI color when `colored` is set
fn level_prefix(level: Level, colored: bool) -> String {
    if colored {
        format!(
            "\x1b[{}m{}\x1b[0m",
            level.color_code().to_fg_str(),
            level.label()
        )
    } else {
        level.label().to_string()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
///
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .color_mode(ColorMode::Never)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build(std::io::stdout());
/// assert!(!logger.uses_colors());
/// ```
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    level: Level,
    color_mode: ColorMode,
    timestamp_format: TimestampFormat,
    utc: bool,
}

impl LoggerBuilder {
    /// Create a new builder: Debug level, automatic colors, standard timestamps
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            color_mode: ColorMode::Auto,
            timestamp_format: TimestampFormat::default(),
            utc: false,
        }
    }

    /// Set the initial minimum level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Read the initial level from an environment variable.
    ///
    /// Keeps the current setting when the variable is unset or holds an
    /// unknown level name.
    #[must_use = "builder methods return a new value"]
    pub fn level_from_env(mut self, var: &str) -> Self {
        if let Some(level) = std::env::var(var).ok().and_then(|v| v.parse().ok()) {
            self.level = level;
        }
        self
    }

    /// Decide colors from the destination, or force them on or off
    #[must_use = "builder methods return a new value"]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render timestamps in UTC instead of local time
    #[must_use = "builder methods return a new value"]
    pub fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Build the Logger over `out`
    pub fn build<D: Destination + 'static>(self, out: D) -> Logger {
        Logger::with_config(Box::new(out), self)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
