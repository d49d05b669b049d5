//! Civil calendar ↔ Julian Day conversion.
//!
//! This crate provides:
//! - Civil date validation over years -1000..=3000, including the
//!   October 1582 reform gap
//! - Civil date-time → Julian Date (Julian calendar before the reform,
//!   Gregorian after)
//! - Julian Date → civil date-time (total inverse)
//! - `CivilDate` / `CivilDateTime` value types

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, CivilDateTime};
pub use error::TimeError;
pub use julian::{
    GREGORIAN_REFORM_JD, J2000_JD, MAX_YEAR, MIN_YEAR, in_reform_gap, is_leap_year,
    is_valid_date, is_valid_time, jd_to_centuries, julian_to_solar, midnight_julian_unchecked,
    solar_month_length, solar_to_julian,
};
