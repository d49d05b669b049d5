//! Error types for pillar and chart computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use shixian_calendar::CalendarError;
use shixian_time::TimeError;

/// Errors from BaZi computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Invalid birth date or time.
    Time(TimeError),
    /// Solar-term or lunar calendar failure.
    Calendar(CalendarError),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for BaziError {}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CalendarError> for BaziError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::Time(t) => Self::Time(t),
            other => Self::Calendar(other),
        }
    }
}
