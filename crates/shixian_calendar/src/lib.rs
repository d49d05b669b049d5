//! The Chinese lunisolar calendar.
//!
//! This crate provides:
//! - The 24 solar terms of a year (mean and adjusted instants) and the jie /
//!   zhongqi sequences derived from them
//! - Lunar month resolution with the intercalary-month rule
//! - Solar ↔ lunar date conversion and lunar month lengths
//!
//! All instants are Julian Dates in the UTC+8 civil convention.

pub mod convert;
pub mod error;
pub mod jie;
pub mod lunar_month;
pub mod solar_terms;

pub use convert::{LunarDate, lunar_month_length, lunar_to_solar, solar_to_lunar};
pub use error::CalendarError;
pub use jie::{ALL_JIE, Jie};
pub use lunar_month::{
    LunarYear, MONTH_CODE_COUNT, MonthCode, NEW_MOON_COUNT, new_moons_since_winter_solstice,
    resolve_lunar_months,
};
pub use solar_terms::{
    LICHUN_INDEX, SolarTermRecord, TERM_COUNT, TermSlice, WINTER_SOLSTICE_INDEX,
    adjusted_solar_terms, mean_solar_terms, midterms_since_winter_solstice,
    principal_terms_since_spring, spring_begins, year_solar_terms,
};
