//! Year, month, day and hour pillars of an instant.
//!
//! The year pillar changes at Lichun and the month pillar at each jie, not at
//! the lunar new year or new moon. The day pillar changes at 23:00, when the
//! 子 hour of the next day begins.

use shixian_calendar::{Jie, principal_terms_since_spring};
use shixian_time::{CivilDateTime, solar_to_julian};

use crate::error::BaziError;
use crate::sexagenary::Pillar;

/// Cycle index of the civil day whose noon is JD 0 (癸丑).
const DAY_CYCLE_EPOCH: i64 = 49;

/// Options for pillar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PillarConfig {
    /// Keep 23:00-24:00 on the current day's pillar (晚子时) instead of the
    /// next day's.
    pub split_zi_hour: bool,
}

impl PillarConfig {
    pub fn new(split_zi_hour: bool) -> Self {
        Self { split_zi_hour }
    }

    /// Early/late 子 hours split at midnight.
    pub fn split_zi() -> Self {
        Self::new(true)
    }
}

/// The four pillars of a moment and the jie bracketing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Instant used for the computation, JD UTC+8.
    pub jd: f64,
    /// Index of the preceding jie in the term year's principal-term sequence
    /// (0 = prior Xiaohan, 1 = Lichun, ...).
    pub term_index: usize,
    /// Instants of the preceding and following jie.
    pub terms: [f64; 2],
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The jie at or before the moment.
    pub fn front_jie(&self) -> Jie {
        Jie::from_sequence_index(self.term_index)
    }

    /// The next jie after the moment.
    pub fn back_jie(&self) -> Jie {
        Jie::from_sequence_index(self.term_index + 1)
    }
}

/// Compute the four pillars of a civil moment (UTC+8).
///
/// Seconds are clamped to at least 1 so that an exact midnight is never
/// evaluated on the day boundary itself.
pub fn four_pillars(
    time: &CivilDateTime,
    config: &PillarConfig,
) -> Result<FourPillars, BaziError> {
    let jd = solar_to_julian(
        time.year,
        time.month,
        time.day,
        time.hour,
        time.minute,
        f64::from(time.second.max(1)),
    )?;

    let mut term_year = time.year;
    let mut jie = principal_terms_since_spring(term_year)?;
    if jd < jie[1] {
        term_year -= 1;
        jie = principal_terms_since_spring(term_year)?;
    }
    let ty = i64::from(term_year);

    let year = Pillar::new(ty + 4736);

    let term_index = jie
        .iter()
        .position(|&t| t >= jd)
        .map_or(jie.len() - 2, |j| j.saturating_sub(1));
    let month = Pillar::new((ty + 4712) * 12 + term_index as i64 - 1 + 50);

    // Shift by one hour so the day turns over at the start of the 子 hour.
    let jda = jd + 0.5;
    let day_jd = jda.floor() + ((jda - jda.floor()) * 86_400.0 + 3_600.0) / 86_400.0;
    let mut day = Pillar::new(day_jd.floor() as i64 + DAY_CYCLE_EPOCH);
    if config.split_zi_hour && time.hour >= 23 {
        day = day.offset(-1);
    }

    let hour = Pillar::new((day_jd * 12.0 + 48.0).floor() as i64);

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
        jd,
        term_index,
        terms: [jie[term_index], jie[term_index + 1]],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::{Branch, Stem};

    fn stems_branches(p: &FourPillars) -> ([u8; 4], [u8; 4]) {
        let ps = p.pillars();
        (
            ps.map(|x| x.stem().index()),
            ps.map(|x| x.branch().index()),
        )
    }

    #[test]
    fn summer_1990() {
        let t = CivilDateTime::new(1990, 6, 15, 14, 30, 0);
        let p = four_pillars(&t, &PillarConfig::default()).unwrap();
        assert_eq!(stems_branches(&p), ([6, 8, 7, 1], [6, 6, 11, 7]));
        assert_eq!(p.term_index, 5);
        assert_eq!(p.front_jie(), Jie::Mangzhong);
        assert_eq!(p.back_jie(), Jie::Xiaoshu);
        assert!((p.jd - 2_448_058.104_178_240_5).abs() < 1e-9);
        assert_eq!(p.year.to_string(), "庚午");
    }

    #[test]
    fn before_lichun_uses_prior_year() {
        let t = CivilDateTime::new(2023, 1, 22, 12, 0, 0);
        let p = four_pillars(&t, &PillarConfig::default()).unwrap();
        assert_eq!(stems_branches(&p), ([8, 9, 6, 8], [2, 1, 4, 6]));
        assert_eq!(p.term_index, 12);
        assert_eq!(p.year.stem(), Stem::Ren);
        assert_eq!(p.year.branch(), Branch::Yin);
    }

    #[test]
    fn late_zi_hour() {
        let t = CivilDateTime::new(2024, 2, 10, 23, 30, 0);
        let next_day = four_pillars(&t, &PillarConfig::default()).unwrap();
        assert_eq!(stems_branches(&next_day), ([0, 2, 1, 2], [4, 2, 5, 0]));

        let split = four_pillars(&t, &PillarConfig::split_zi()).unwrap();
        assert_eq!(split.day, next_day.day.offset(-1));
        assert_eq!(split.hour, next_day.hour);
        assert_eq!(split.day.stem(), Stem::Jia);
        assert_eq!(split.day.branch(), Branch::Chen);
    }

    #[test]
    fn split_only_affects_late_hours() {
        let t = CivilDateTime::new(2024, 2, 10, 22, 59, 0);
        let a = four_pillars(&t, &PillarConfig::default()).unwrap();
        let b = four_pillars(&t, &PillarConfig::split_zi()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn terms_bracket_the_instant() {
        let t = CivilDateTime::new(2024, 3, 5, 10, 22, 0);
        let p = four_pillars(&t, &PillarConfig::default()).unwrap();
        assert_eq!(p.term_index, 1);
        assert!(p.terms[0] <= p.jd && p.jd < p.terms[1]);
    }

    #[test]
    fn invalid_time() {
        let t = CivilDateTime::new(2024, 2, 30, 0, 0, 0);
        assert!(matches!(
            four_pillars(&t, &PillarConfig::default()),
            Err(BaziError::Time(_))
        ));
    }
}
