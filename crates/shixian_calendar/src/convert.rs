//! Solar ↔ lunar date conversion.

use shixian_time::{CivilDate, MAX_YEAR, MIN_YEAR, is_valid_date, julian_to_solar};
use tracing::debug;

use crate::error::CalendarError;
use crate::lunar_month::{LunarYear, MONTH_CODE_COUNT, day_floor, resolve_lunar_months};

/// A date of the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12, 正月 = 1.
    pub month: u32,
    /// 1..=30.
    pub day: u32,
    /// Intercalary month.
    pub leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }

    fn nonexistent(&self) -> CalendarError {
        CalendarError::NonexistentLunarDate {
            year: self.year,
            month: self.month,
            day: self.day,
            leap: self.leap,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap {
            f.write_str(" (leap)")?;
        }
        Ok(())
    }
}

/// Lunar date of a civil date.
pub fn solar_to_lunar(date: CivilDate) -> Result<LunarDate, CalendarError> {
    let day = date.to_julian_noon()?.floor();

    let mut lunar_year = resolve_lunar_months(date.year)?;
    let before_first_month = day < day_floor(lunar_year.new_moons[0]);
    if before_first_month {
        debug!(%date, "date precedes solstice month, using prior year's months");
        lunar_year = resolve_lunar_months(date.year - 1)?;
    }

    let sm = &lunar_year.new_moons;
    let i = (0..MONTH_CODE_COUNT)
        .find(|&i| day >= day_floor(sm[i]) && day < day_floor(sm[i + 1]))
        .unwrap_or(0);
    let code = lunar_year.codes[i];

    let year = if code.ordinal < 2 || before_first_month {
        date.year - 1
    } else {
        date.year
    };
    Ok(LunarDate {
        year,
        month: code.month(),
        day: (day - day_floor(sm[i])) as u32 + 1,
        leap: code.leap,
    })
}

/// Month index into `lunar_year` for a lunar month number, or `None` when the
/// requested leap month does not exist.
fn month_index(lunar_year: &LunarYear, month: u32, leap: bool) -> Option<usize> {
    // Month 1 (正月) sits at index 2 when no leap month precedes it.
    let m = month as usize + 2;
    let leap_at = lunar_year.leap_index();
    if leap {
        leap_at.filter(|&l| l >= 3 && l == m)
    } else {
        Some(m - 1 + usize::from(leap_at.is_some_and(|l| m > l)))
    }
}

/// Lunar years that can hold a supported civil date. The 11th and 12th months
/// of the year before [`MIN_YEAR`] fall in January and February of it.
fn in_lunar_range(year: i32, month: u32) -> bool {
    (MIN_YEAR - 1..=MAX_YEAR).contains(&year) && (1..=12).contains(&month)
}

/// Civil date of a lunar date.
pub fn lunar_to_solar(date: LunarDate) -> Result<CivilDate, CalendarError> {
    if !in_lunar_range(date.year, date.month) || !(1..=30).contains(&date.day) {
        return Err(date.nonexistent());
    }

    let lunar_year = resolve_lunar_months(date.year)?;
    let idx = month_index(&lunar_year, date.month, date.leap).ok_or_else(|| date.nonexistent())?;
    if date.day > lunar_year.month_length(idx) {
        return Err(date.nonexistent());
    }

    let jd = lunar_year.new_moons[idx] + f64::from(date.day) - 1.0;
    let solar = julian_to_solar(jd).date();
    if !is_valid_date(solar.year, solar.month, solar.day) {
        return Err(date.nonexistent());
    }
    Ok(solar)
}

/// Days in a lunar month, or 0 when the month does not exist.
pub fn lunar_month_length(year: i32, month: u32, leap: bool) -> u32 {
    if !in_lunar_range(year, month) {
        return 0;
    }
    let Ok(lunar_year) = resolve_lunar_months(year) else {
        return 0;
    };
    month_index(&lunar_year, month, leap).map_or(0, |i| lunar_year.month_length(i))
}
