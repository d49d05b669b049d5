//! Civil date ↔ Julian Day conversion.
//!
//! Dates up to 1582-10-04 are Julian-calendar dates, dates from 1582-10-15
//! onward are Gregorian. The ten days in between do not exist and are
//! rejected. The Julian Day axis itself is continuous across the reform.

use crate::civil::CivilDateTime;
use crate::error::TimeError;

/// Earliest supported civil year (astronomical numbering).
pub const MIN_YEAR: i32 = -1000;

/// Latest supported civil year.
pub const MAX_YEAR: i32 = 3000;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1582-10-15 00:00, the first Gregorian day.
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// Day-count origin of the Gregorian year-length approximation.
const GREGORIAN_EPOCH_JD: f64 = 1_721_119.5;

/// Day-count origin of the Julian year-length approximation.
const JULIAN_EPOCH_JD: f64 = 1_721_117.5;

/// Whether the date falls inside the nonexistent 1582-10-05..=1582-10-14 gap.
pub fn in_reform_gap(year: i32, month: u32, day: u32) -> bool {
    year == 1582 && month == 10 && (5..15).contains(&day)
}

fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

/// Leap-year rule: Julian (every fourth year) through 1582, Gregorian after.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    } else {
        year % 4 == 0
    }
}

/// Number of days in a civil month, or 0 when the year or month is out of range.
pub fn solar_month_length(year: i32, month: u32) -> u32 {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
        return 0;
    }
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Civil validity: year in range, month 1-12, day within the month, and
/// outside the reform gap.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    if in_reform_gap(year, month, day) {
        return false;
    }
    let len = solar_month_length(year, month);
    len > 0 && (1..=len).contains(&day)
}

/// Time-of-day validity. Hour 24 and minute/second 60 are accepted as
/// end-of-period values.
pub fn is_valid_time(hour: u32, minute: u32, second: f64) -> bool {
    hour <= 24 && minute <= 60 && (0.0..=60.0).contains(&second)
}

/// Convert a civil date and time to a Julian Date.
///
/// The integer part of the result changes at noon, so midnight maps to
/// `x.5`.
pub fn solar_to_julian(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64, TimeError> {
    if !is_valid_date(year, month, day) {
        return Err(TimeError::InvalidDate { year, month, day });
    }
    if !is_valid_time(hour, minute, second) {
        return Err(TimeError::InvalidTime {
            hour,
            minute,
            second,
        });
    }

    let day_fraction = (hour as f64 + (minute as f64 + second / 60.0) / 60.0) / 24.0;
    Ok(midnight_julian_unchecked(year, month, day) + day_fraction)
}

/// Julian Date of 00:00 on a civil date, without range or gap checks.
///
/// Years outside [`MIN_YEAR`]..=[`MAX_YEAR`] extend the same calendars
/// proleptically. Used where only an approximate instant is needed, such as
/// seeding a lunation search.
pub fn midnight_julian_unchecked(year: i32, month: u32, day: u32) -> f64 {
    // The computational year starts in March so February's length sits last.
    let yp = f64::from(if month < 3 { year - 1 } else { year });
    let (epoch, year_days) = if is_gregorian(year, month, day) {
        (
            GREGORIAN_EPOCH_JD,
            (yp * 365.25).floor() - (yp / 100.0).floor() + (yp / 400.0).floor(),
        )
    } else {
        (JULIAN_EPOCH_JD, (yp * 365.25).floor())
    };

    let mp = (month + 9) % 12;
    let month_days = f64::from(mp * 30 + (mp + 1) * 34 / 57);
    let day_days = f64::from(day) - 1.0;

    year_days + month_days + day_days + epoch
}

/// Convert a Julian Date back to a civil date and time.
///
/// Total over all finite inputs. Seconds are truncated after a 0.05 ms bias
/// so that instants produced by [`solar_to_julian`] land on the same second.
pub fn julian_to_solar(jd: f64) -> CivilDateTime {
    let (epoch, days_per_400y) = if jd >= GREGORIAN_REFORM_JD {
        (GREGORIAN_EPOCH_JD, 146_097.0)
    } else {
        (JULIAN_EPOCH_JD, 146_100.0)
    };

    let jdr = (jd - epoch).floor();
    let days_per_century = days_per_400y / 4.0;
    let century = ((jdr + 0.75) / days_per_century).floor();
    let mut d = (jdr + 0.75 - century * days_per_century).floor();

    let days_per_year = 1461.0 / 4.0;
    let year_in_century = ((d + 0.75) / days_per_year).floor();
    d = (d + 0.75 - days_per_year * year_in_century + 1.0).floor();

    let mp = ((d - 0.5) / (153.0 / 5.0)).floor();
    d = ((d - 0.5) - 30.6 * mp + 1.0).floor();

    let mut year = 100.0 * century + year_in_century;
    let month = (mp + 2.0) % 12.0 + 1.0;
    if month < 3.0 {
        year += 1.0;
    }

    let shifted = jd + 0.5;
    let seconds_of_day = ((shifted - shifted.floor()) * 86_400.0 + 0.00005).floor();
    let minutes_of_day = (seconds_of_day / 60.0).floor();

    CivilDateTime {
        year: year as i32,
        month: month as u32,
        day: d as u32,
        hour: (minutes_of_day / 60.0).floor() as u32,
        minute: (minutes_of_day % 60.0) as u32,
        second: (seconds_of_day % 60.0) as u32,
    }
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(solar_to_julian(2000, 1, 1, 12, 0, 0.0), Ok(J2000_JD));
    }

    #[test]
    fn reform_edges() {
        assert_eq!(solar_to_julian(1582, 10, 4, 0, 0, 0.0), Ok(2_299_159.5));
        assert_eq!(solar_to_julian(1582, 10, 15, 0, 0, 0.0), Ok(GREGORIAN_REFORM_JD));
    }

    #[test]
    fn reform_gap_is_half_open() {
        assert!(!in_reform_gap(1582, 10, 4));
        assert!(in_reform_gap(1582, 10, 5));
        assert!(in_reform_gap(1582, 10, 14));
        assert!(!in_reform_gap(1582, 10, 15));
        assert!(!in_reform_gap(1583, 10, 10));
    }

    #[test]
    fn julian_to_solar_reform_edges() {
        let before = julian_to_solar(2_299_159.5);
        assert_eq!((before.year, before.month, before.day), (1582, 10, 4));
        let after = julian_to_solar(GREGORIAN_REFORM_JD);
        assert_eq!((after.year, after.month, after.day), (1582, 10, 15));
    }

    #[test]
    fn julian_to_solar_j2000() {
        let t = julian_to_solar(J2000_JD);
        assert_eq!(t, CivilDateTime::new(2000, 1, 1, 12, 0, 0));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(solar_month_length(2024, 2), 29);
        assert_eq!(solar_month_length(2023, 2), 28);
        assert_eq!(solar_month_length(1900, 2), 28);
        assert_eq!(solar_month_length(2000, 2), 29);
        // Julian rule before the reform: 1500 is a leap year.
        assert_eq!(solar_month_length(1500, 2), 29);
        assert_eq!(solar_month_length(-4, 2), 29);
        assert_eq!(solar_month_length(2024, 7), 31);
        assert_eq!(solar_month_length(2024, 8), 31);
        assert_eq!(solar_month_length(2024, 9), 30);
        assert_eq!(solar_month_length(2024, 12), 31);
    }

    #[test]
    fn month_length_out_of_range() {
        assert_eq!(solar_month_length(3001, 1), 0);
        assert_eq!(solar_month_length(-1001, 1), 0);
        assert_eq!(solar_month_length(2024, 0), 0);
        assert_eq!(solar_month_length(2024, 13), 0);
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(solar_to_julian(2023, 2, 29, 0, 0, 0.0).is_err());
        assert!(solar_to_julian(2023, 4, 31, 0, 0, 0.0).is_err());
        assert!(solar_to_julian(2023, 1, 0, 0, 0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_time() {
        assert!(matches!(
            solar_to_julian(2023, 1, 1, 25, 0, 0.0),
            Err(TimeError::InvalidTime { hour: 25, .. })
        ));
        assert!(solar_to_julian(2023, 1, 1, 0, 61, 0.0).is_err());
        assert!(solar_to_julian(2023, 1, 1, 0, 0, 60.5).is_err());
        assert!(solar_to_julian(2023, 1, 1, 0, 0, -1.0).is_err());
        assert!(solar_to_julian(2023, 1, 1, 24, 0, 0.0).is_ok());
    }

    #[test]
    fn hour_24_is_next_midnight() {
        let end = solar_to_julian(2023, 1, 1, 24, 0, 0.0).unwrap();
        let next = solar_to_julian(2023, 1, 2, 0, 0, 0.0).unwrap();
        assert!((end - next).abs() < 1e-9);
    }

    #[test]
    fn unchecked_midnight_agrees_inside_range() {
        for (y, m, d) in [(-1000, 1, 1), (1582, 10, 4), (1582, 10, 15), (2024, 2, 29)] {
            let checked = solar_to_julian(y, m, d, 0, 0, 0.0).unwrap();
            assert_eq!(midnight_julian_unchecked(y, m, d), checked);
        }
    }

    #[test]
    fn unchecked_midnight_extends_before_range() {
        let a = midnight_julian_unchecked(-1001, 11, 1);
        let b = solar_to_julian(-1000, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(b - a, 61.0);
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
