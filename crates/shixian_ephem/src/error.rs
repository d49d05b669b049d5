//! Error types for ephemeris evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the closed-form ephemeris.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Vernal equinox requested for a year outside [-8000, 8001].
    OutOfRange(i32),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(year) => {
                write!(f, "year {year} outside ephemeris range [-8000, 8001]")
            }
        }
    }
}

impl Error for EphemError {}
