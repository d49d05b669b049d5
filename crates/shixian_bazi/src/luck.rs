//! Luck pillars (大运) and their onset.
//!
//! Two onset theories are kept apart:
//! - [`primary_onset`]: the exact span to the bracketing jie at three days per
//!   year, giving an onset instant and twelve decade onsets 3600 days apart.
//! - [`alternate_onset`]: whole civil days to the jie, rounded to years, with
//!   the onset found by moving the lunar birthday forward by that many years.

use shixian_calendar::{CalendarError, LunarDate, lunar_to_solar, solar_to_lunar};
use shixian_time::{CivilDate, CivilDateTime, julian_to_solar};
use tracing::debug;

use crate::error::BaziError;
use crate::pillars::FourPillars;
use crate::sexagenary::{Pillar, Stem};

/// Number of luck pillars in a chart.
pub const LUCK_PILLAR_COUNT: usize = 12;

/// Nominal length of a luck pillar in days (ten 360-day years).
const DECADE_DAYS: f64 = 3_600.0;

/// Onset days per day of span: three days of span count as one year.
const DAYS_PER_SPAN_DAY: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Order in which luck pillars follow the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Forward for yang-year males and yin-year females, backward otherwise.
    pub fn for_birth(year_stem: Stem, gender: Gender) -> Self {
        match (year_stem.is_yang(), gender) {
            (true, Gender::Male) | (false, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// Cycle step between consecutive luck pillars.
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Age at onset in 360-day years and 30-day months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OnsetAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl OnsetAge {
    /// Age for a span between birth and the bracketing jie, in days.
    pub fn from_span(span_days: f64) -> Self {
        let days = (span_days * DAYS_PER_SPAN_DAY).floor() as u32;
        Self {
            years: days / 360,
            months: days % 360 / 30,
            days: days % 30,
        }
    }
}

impl std::fmt::Display for OnsetAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years {} months {} days",
            self.years, self.months, self.days
        )
    }
}

/// Luck pillars timed by the exact span to the jie.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryOnset {
    /// Days between birth and the jie in the luck direction.
    pub span_days: f64,
    pub age: OnsetAge,
    pub luck_pillars: [Pillar; LUCK_PILLAR_COUNT],
    /// Onset instant of each luck pillar, JD UTC+8.
    pub onset_jds: [f64; LUCK_PILLAR_COUNT],
    pub onsets: [CivilDateTime; LUCK_PILLAR_COUNT],
}

/// Luck pillars stepping from the month pillar in `direction`.
pub fn luck_pillars(month: Pillar, direction: LuckDirection) -> [Pillar; LUCK_PILLAR_COUNT] {
    std::array::from_fn(|i| month.offset(direction.step() * (i as i64 + 1)))
}

/// Span to the following jie (forward) or from the preceding one (backward).
pub fn primary_onset(pillars: &FourPillars, direction: LuckDirection) -> PrimaryOnset {
    let span_days = match direction {
        LuckDirection::Forward => pillars.terms[1] - pillars.jd,
        LuckDirection::Backward => pillars.jd - pillars.terms[0],
    };
    let start = pillars.jd + span_days * DAYS_PER_SPAN_DAY;
    let onset_jds: [f64; LUCK_PILLAR_COUNT] =
        std::array::from_fn(|i| start + i as f64 * DECADE_DAYS);

    PrimaryOnset {
        span_days,
        age: OnsetAge::from_span(span_days),
        luck_pillars: luck_pillars(pillars.month, direction),
        onset_jds,
        onsets: onset_jds.map(julian_to_solar),
    }
}

/// Luck onset found by shifting the lunar birthday.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternateOnset {
    /// Whole civil days between birth and the jie, counting the jie's day
    /// when it differs from the birth day.
    pub span_days: i64,
    /// `span_days / 3`, rounded.
    pub age_years: i32,
    /// Lunar birthday moved to the onset year, after any fallback.
    pub lunar_onset: LunarDate,
    /// `None` when the onset falls after the supported calendar range.
    pub onset: Option<CivilDate>,
    /// Up to 11 further onsets, ten lunar years apart. Stops early when a
    /// date falls outside the supported calendar range.
    pub markers: Vec<CivilDate>,
}

/// Civil-day span between birth and the jie.
pub fn alternate_span(birth_jd: f64, term_jd: f64, direction: LuckDirection) -> i64 {
    let same_day = julian_to_solar(birth_jd).date() == julian_to_solar(term_jd).date();
    let term_day = match direction {
        LuckDirection::Forward => term_jd.floor(),
        LuckDirection::Backward => term_jd.ceil(),
    };
    (birth_jd.floor() - term_day).abs() as i64 + i64::from(!same_day)
}

/// Resolve a lunar date that may not exist in its year.
///
/// A missing leap month falls back to the regular month, and a day 30 that
/// the month lacks falls back to day 29. `date` is updated to the date
/// actually resolved.
pub fn shift_lunar_to_solar(date: &mut LunarDate) -> Result<CivilDate, CalendarError> {
    if let Ok(solar) = lunar_to_solar(*date) {
        return Ok(solar);
    }
    if date.leap {
        debug!(%date, "leap month absent, using regular month");
        date.leap = false;
        if let Ok(solar) = lunar_to_solar(*date) {
            return Ok(solar);
        }
    }
    debug!(%date, "day absent, using previous day");
    date.day = date.day.saturating_sub(1);
    lunar_to_solar(*date)
}

/// Onset by moving the lunar birthday forward `round(span / 3)` years.
pub fn alternate_onset(
    birth: &CivilDateTime,
    pillars: &FourPillars,
    direction: LuckDirection,
) -> Result<AlternateOnset, BaziError> {
    let term_jd = match direction {
        LuckDirection::Forward => pillars.terms[1],
        LuckDirection::Backward => pillars.terms[0],
    };
    let span_days = alternate_span(pillars.jd, term_jd, direction);
    let age_years = (span_days as f64 / 3.0).round() as i32;

    let mut lunar = solar_to_lunar(birth.date())?;
    lunar.year += age_years;
    let onset = match shift_lunar_to_solar(&mut lunar) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(error = %e, "onset beyond calendar range");
            None
        }
    };
    let lunar_onset = lunar;

    let decades = if onset.is_some() { LUCK_PILLAR_COUNT - 1 } else { 0 };
    let mut markers = Vec::with_capacity(decades);
    for _ in 0..decades {
        lunar.year += 10;
        match shift_lunar_to_solar(&mut lunar) {
            Ok(date) => markers.push(date),
            Err(e) => {
                debug!(error = %e, "decade markers end");
                break;
            }
        }
    }

    Ok(AlternateOnset {
        span_days,
        age_years,
        lunar_onset,
        onset,
        markers,
    })
}
