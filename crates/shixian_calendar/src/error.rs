//! Error types for calendar computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use shixian_ephem::EphemError;
use shixian_time::TimeError;

/// Errors from solar-term and lunar calendar computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Invalid civil date or time.
    Time(TimeError),
    /// Year outside the ephemeris range.
    Ephemeris(EphemError),
    /// The lunar date does not exist: leap month absent or mismatched, or the
    /// day exceeds the month's length.
    NonexistentLunarDate {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },
    /// Solar-term index range outside 0..=25 or reversed.
    InvalidTermRange { start: usize, end: usize },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::NonexistentLunarDate {
                year,
                month,
                day,
                leap,
            } => {
                let prefix = if *leap { "leap " } else { "" };
                write!(
                    f,
                    "nonexistent lunar date: year {year}, {prefix}month {month}, day {day}"
                )
            }
            Self::InvalidTermRange { start, end } => {
                write!(f, "invalid solar-term range {start}..={end} (indices 0..=25)")
            }
        }
    }
}

impl Error for CalendarError {}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemError> for CalendarError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
