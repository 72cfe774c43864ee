//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    /// Number of levels; sizes the per-level sink arrays and bounds validation.
    pub const COUNT: usize = 4;

    /// All levels, most verbose first.
    pub const ALL: [Level; Level::COUNT] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Fixed-width label written in front of every message.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Debug => "debug ",
            Level::Info => "info  ",
            Level::Warn => "warn  ",
            Level::Error => "error ",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Magenta,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        match value {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            other => Err(LoggerError::invalid_level(other)),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(LoggerError::unknown_level_name(s)),
        }
    }
}
