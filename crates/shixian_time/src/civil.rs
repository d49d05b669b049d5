//! Civil (proleptic Julian / Gregorian) date and date-time values.
//!
//! All civil values are wall-clock times in the fixed UTC+8 convention used
//! by the calendar; no timezone handling happens here.

use crate::error::TimeError;
use crate::julian::{julian_to_solar, solar_to_julian};

/// Civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Attach a time of day.
    pub fn at(self, hour: u32, minute: u32, second: u32) -> CivilDateTime {
        CivilDateTime::new(self.year, self.month, self.day, hour, minute, second)
    }

    /// Julian Date of this date at noon.
    pub fn to_julian_noon(&self) -> Result<f64, TimeError> {
        solar_to_julian(self.year, self.month, self.day, 12, 0, 0.0)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Civil date and time with whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Date, validating the date and time.
    pub fn to_julian(&self) -> Result<f64, TimeError> {
        solar_to_julian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second as f64,
        )
    }

    /// Civil date and time of a Julian Date.
    pub fn from_julian(jd: f64) -> Self {
        julian_to_solar(jd)
    }

    /// The calendar date part.
    pub fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilDateTime::new(2024, 3, 20, 12, 30, 45);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert_eq!(t.second, 45);
    }

    #[test]
    fn display_date_time() {
        let t = CivilDateTime::new(1990, 6, 6, 6, 45, 8);
        assert_eq!(t.to_string(), "1990-06-06 06:45:08");
    }

    #[test]
    fn display_date() {
        assert_eq!(CivilDate::new(998, 1, 5).to_string(), "0998-01-05");
    }

    #[test]
    fn julian_roundtrip() {
        let t = CivilDateTime::new(2024, 2, 10, 23, 30, 0);
        let jd = t.to_julian().unwrap();
        assert_eq!(CivilDateTime::from_julian(jd), t);
    }

    #[test]
    fn date_noon() {
        let jd = CivilDate::new(2000, 1, 1).to_julian_noon().unwrap();
        assert_eq!(jd, 2_451_545.0);
    }

    #[test]
    fn ordering_follows_time() {
        let a = CivilDateTime::new(2023, 12, 31, 23, 59, 59);
        let b = CivilDate::new(2024, 1, 1).at(0, 0, 0);
        assert!(a < b);
    }
}
