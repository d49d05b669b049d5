//! Lunar months between two winter solstices and the leap-month rule.
//!
//! A lunar year is resolved from the 15 zhongqi since the prior winter
//! solstice and the 16 new moons starting with the month that contains it.
//! Month ordinal 0 is the solstice month (冬月), 1 is 腊月, 2 is 正月 and so
//! on. When 13 new-moon intervals fit before the next solstice, the first
//! month without a zhongqi is intercalary.

use shixian_ephem::{delta_t, mean_new_moon, true_new_moon};
use shixian_time::midnight_julian_unchecked;
use tracing::debug;

use crate::error::CalendarError;
use crate::solar_terms::midterms_since_winter_solstice;

/// Number of new moons in a resolved lunar year.
pub const NEW_MOON_COUNT: usize = 16;

/// Number of month codes (and zhongqi) in a resolved lunar year.
pub const MONTH_CODE_COUNT: usize = 15;

/// Candidate new moons generated around the solstice.
const CANDIDATES: usize = 20;

/// Civil day number of a JD: the integer JD of that day's noon.
pub(crate) fn day_floor(jd: f64) -> f64 {
    (jd + 0.5).floor()
}

/// The 16 new moons (JD UTC+8) starting with the one that opens the month
/// containing the winter solstice `winter_solstice`.
///
/// `year` is the year whose prior-year solstice is passed; new moons are
/// seeded from 1 November of `year - 1`.
pub fn new_moons_since_winter_solstice(
    year: i32,
    winter_solstice: f64,
) -> [f64; NEW_MOON_COUNT] {
    let (k0, _) = mean_new_moon(midnight_julian_unchecked(year - 1, 11, 1));

    let candidates: [f64; CANDIDATES] = std::array::from_fn(|i| {
        let jd = true_new_moon(k0 + i as i64) + 1.0 / 3.0;
        jd - delta_t(year, i as i32 - 1) / 1440.0
    });

    // The seed lunation starts before the solstice, so the first new moon on a
    // later civil day is among the first few candidates.
    let ws_day = day_floor(winter_solstice);
    let start = (1..=CANDIDATES - NEW_MOON_COUNT)
        .find(|&j| day_floor(candidates[j]) > ws_day)
        .map_or(CANDIDATES - NEW_MOON_COUNT, |j| j - 1);

    std::array::from_fn(|i| candidates[start + i])
}

/// Ordinal of a lunar month counted from the solstice month, with the
/// intercalary flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthCode {
    /// 0 = solstice month, 1 = 腊月, 2 = 正月, ...
    pub ordinal: u8,
    /// Intercalary month following the month `ordinal`.
    pub leap: bool,
}

impl MonthCode {
    pub const fn regular(ordinal: u8) -> Self {
        Self {
            ordinal,
            leap: false,
        }
    }

    pub const fn leap(ordinal: u8) -> Self {
        Self {
            ordinal,
            leap: true,
        }
    }

    /// Numeric code: the ordinal, plus 0.5 for a leap month.
    pub fn as_f64(self) -> f64 {
        f64::from(self.ordinal) + if self.leap { 0.5 } else { 0.0 }
    }

    /// Civil lunar month number 1..=12 (正月 = 1).
    pub fn month(self) -> u32 {
        (u32::from(self.ordinal) + 10) % 12 + 1
    }
}

/// Zhongqi, new moons and month codes of one lunar year.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarYear {
    pub year: i32,
    /// Zhongqi since the prior winter solstice (index 12 = this year's).
    pub midterms: [f64; MONTH_CODE_COUNT],
    /// New moons; month `i` spans `new_moons[i]..new_moons[i + 1]`.
    pub new_moons: [f64; NEW_MOON_COUNT],
    pub codes: [MonthCode; MONTH_CODE_COUNT],
}

impl LunarYear {
    /// Index of the intercalary month, if any.
    pub fn leap_index(&self) -> Option<usize> {
        (1..MONTH_CODE_COUNT).find(|&i| self.codes[i].leap)
    }

    /// Days in month `index`, counted between new-moon civil days.
    pub fn month_length(&self, index: usize) -> u32 {
        (day_floor(self.new_moons[index + 1]) - day_floor(self.new_moons[index])) as u32
    }
}

/// Assign codes to months in `range`, flagging at most one intercalary month.
///
/// Month `i` is intercalary when it starts after zhongqi `i - 1` and the next
/// month starts on or before zhongqi `i`, i.e. it holds no zhongqi of its own.
fn scan_months(
    midterms: &[f64; MONTH_CODE_COUNT],
    new_moons: &[f64; NEW_MOON_COUNT],
    codes: &mut [MonthCode; MONTH_CODE_COUNT],
    range: std::ops::RangeInclusive<usize>,
) -> Option<usize> {
    let mut leap = None;
    for i in range {
        let offset = usize::from(leap.is_some());
        let lacks_zhongqi = leap.is_none()
            && new_moons[i] + 0.5 > day_floor(midterms[i - 1])
            && day_floor(new_moons[i + 1]) <= day_floor(midterms[i]);
        codes[i] = if lacks_zhongqi {
            leap = Some(i);
            MonthCode::leap((i - 1) as u8)
        } else {
            MonthCode::regular((i - offset) as u8)
        };
    }
    leap
}

/// Resolve the lunar months of `year`.
pub fn resolve_lunar_months(year: i32) -> Result<LunarYear, CalendarError> {
    let midterms = midterms_since_winter_solstice(year)?;
    let new_moons = new_moons_since_winter_solstice(year, midterms[0]);
    let mut codes = [MonthCode::default(); MONTH_CODE_COUNT];

    // Thirteen months before the next solstice: one of them is intercalary.
    let thirteen = day_floor(midterms[12]) >= day_floor(new_moons[13]);
    let scan_from = if thirteen {
        1
    } else {
        for (i, code) in codes.iter_mut().enumerate().take(13) {
            *code = MonthCode::regular(i as u8);
        }
        13
    };

    match scan_months(&midterms, &new_moons, &mut codes, scan_from..=14) {
        Some(i) => debug!(year, index = i, code = codes[i].as_f64(), "intercalary month"),
        None => debug!(year, thirteen, "no intercalary month"),
    }

    Ok(LunarYear {
        year,
        midterms,
        new_moons,
        codes,
    })
}
