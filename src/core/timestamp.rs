//! Timestamp formatting utilities
//!
//! Every line written by a [`Sink`](super::sink::Sink) starts with a
//! timestamp. The default layout is `2025/01/08 10:30:45` in local time;
//! the other variants cover the usual machine-readable formats.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write as _};

/// Timestamp format options for the line prefix
///
/// # Examples
///
/// ```
/// use leveled_log::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025/01/08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// Date and time with microseconds: `2025/01/08 10:30:45.123456`
    StandardMicros,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z` (for UTC)
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// ```
    /// use leveled_log::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),

    /// No timestamp; lines start directly with the level label
    None,
}

impl TimestampFormat {
    /// Format a datetime in any timezone according to this format
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::StandardMicros => {
                datetime.format("%Y/%m/%d %H:%M:%S%.6f").to_string()
            }
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                // Unknown specifiers make chrono's formatter fail.
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => TimestampFormat::Standard.format(datetime),
                }
            }
            TimestampFormat::None => String::new(),
        }
    }

    /// Build a `Custom` format, rejecting patterns chrono cannot render.
    ///
    /// Unchecked `Custom` values are still accepted; an invalid pattern
    /// renders as [`TimestampFormat::Standard`].
    ///
    /// ```
    /// use leveled_log::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%H:%M").is_ok());
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// ```
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_timestamp_format(pattern));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Format the current instant, in UTC or local time
    #[must_use]
    pub fn now(&self, utc: bool) -> String {
        if matches!(self, TimestampFormat::None) {
            return String::new();
        }
        if utc {
            self.format(&Utc::now())
        } else {
            self.format(&Local::now())
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, TimestampFormat::None)
    }
}
