//! Process-wide default logger
//!
//! A convenience for binaries: one [`Logger`] over standard output,
//! starting at Debug, created on first use. Library code should take a
//! `&Logger` instead of reaching for these functions.

use crate::core::{Level, Logger, Sink, Terminate};
use once_cell::sync::Lazy;
use std::fmt::{self, Display};
use std::io;
use std::sync::Arc;

static DEFAULT: Lazy<Logger> = Lazy::new(|| Logger::new(io::stdout(), Level::Debug));

/// The default logger instance
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

/// Set the minimum level of the default logger
pub fn set_level(level: Level) {
    DEFAULT.set_level(level);
}

pub fn level() -> Level {
    DEFAULT.level()
}

pub fn is_enabled(level: Level) -> bool {
    DEFAULT.is_enabled(level)
}

pub fn for_level(level: Level) -> Arc<Sink> {
    DEFAULT.for_level(level)
}

pub fn debug(message: impl Display) {
    DEFAULT.debug(message);
}

pub fn debugln(parts: &[&dyn Display]) {
    DEFAULT.debugln(parts);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT.debugf(args);
}

pub fn info(message: impl Display) {
    DEFAULT.info(message);
}

pub fn infoln(parts: &[&dyn Display]) {
    DEFAULT.infoln(parts);
}

pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT.infof(args);
}

pub fn warn(message: impl Display) {
    DEFAULT.warn(message);
}

pub fn warnln(parts: &[&dyn Display]) {
    DEFAULT.warnln(parts);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    DEFAULT.warnf(args);
}

pub fn error(message: impl Display) {
    DEFAULT.error(message);
}

pub fn errorln(parts: &[&dyn Display]) {
    DEFAULT.errorln(parts);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT.errorf(args);
}

pub fn print(message: impl Display) {
    DEFAULT.print(message);
}

pub fn println(parts: &[&dyn Display]) {
    DEFAULT.println(parts);
}

pub fn printf(args: fmt::Arguments<'_>) {
    DEFAULT.printf(args);
}

pub fn fatal(message: impl Display) -> Terminate {
    DEFAULT.fatal(message)
}

pub fn fatalln(parts: &[&dyn Display]) -> Terminate {
    DEFAULT.fatalln(parts)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> Terminate {
    DEFAULT.fatalf(args)
}

pub fn panic(message: impl Display) -> Terminate {
    DEFAULT.panic(message)
}

pub fn panicln(parts: &[&dyn Display]) -> Terminate {
    DEFAULT.panicln(parts)
}

pub fn panicf(args: fmt::Arguments<'_>) -> Terminate {
    DEFAULT.panicf(args)
}
