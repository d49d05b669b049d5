//! Error types for civil date/time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date validation and Julian Day conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year or month out of range, impossible day-of-month, or a day inside
    /// the October 1582 reform gap.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside its accepted range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time: {hour:02}:{minute:02}:{second}"),
        }
    }
}

impl Error for TimeError {}
