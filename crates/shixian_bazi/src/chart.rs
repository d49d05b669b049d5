//! Full BaZi chart: four pillars, bracketing jie and luck pillars.

use shixian_calendar::Jie;
use shixian_time::{CivilDateTime, julian_to_solar};

use crate::error::BaziError;
use crate::luck::{
    AlternateOnset, Gender, LuckDirection, PrimaryOnset, alternate_onset, primary_onset,
};
use crate::pillars::{FourPillars, PillarConfig, four_pillars};

/// Configuration for chart construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    pub pillars: PillarConfig,
}

impl ChartConfig {
    pub fn new(pillars: PillarConfig) -> Self {
        Self { pillars }
    }
}

/// A jie next to the birth moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthTerm {
    pub jie: Jie,
    pub jd: f64,
    pub time: CivilDateTime,
}

impl BirthTerm {
    fn new(jie: Jie, jd: f64) -> Self {
        Self {
            jie,
            jd,
            time: julian_to_solar(jd),
        }
    }
}

/// A complete chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BaziChart {
    pub birth: CivilDateTime,
    pub gender: Gender,
    pub pillars: FourPillars,
    /// Jie at or before birth.
    pub front: BirthTerm,
    /// Jie after birth.
    pub back: BirthTerm,
    pub direction: LuckDirection,
    pub primary: PrimaryOnset,
    pub alternate: AlternateOnset,
}

/// Build the chart of a birth moment (UTC+8).
pub fn build_chart(
    gender: Gender,
    birth: &CivilDateTime,
    config: &ChartConfig,
) -> Result<BaziChart, BaziError> {
    let pillars = four_pillars(birth, &config.pillars)?;
    let direction = LuckDirection::for_birth(pillars.year.stem(), gender);

    Ok(BaziChart {
        birth: *birth,
        gender,
        front: BirthTerm::new(pillars.front_jie(), pillars.terms[0]),
        back: BirthTerm::new(pillars.back_jie(), pillars.terms[1]),
        direction,
        primary: primary_onset(&pillars, direction),
        alternate: alternate_onset(birth, &pillars, direction)?,
        pillars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_1990() {
        let birth = CivilDateTime::new(1990, 6, 15, 14, 30, 0);
        let chart = build_chart(Gender::Male, &birth, &ChartConfig::default()).unwrap();
        assert_eq!(chart.direction, LuckDirection::Forward);
        assert_eq!(chart.front.jie, Jie::Mangzhong);
        assert_eq!(chart.front.time.to_string(), "1990-06-06 06:45:48");
        assert_eq!(chart.back.jie, Jie::Xiaoshu);
        assert_eq!(chart.back.time.to_string(), "1990-07-07 17:00:31");
        assert_eq!(chart.primary.age.to_string(), "7 years 4 months 12 days");
    }

    #[test]
    fn female_runs_backward() {
        let birth = CivilDateTime::new(1990, 6, 15, 14, 30, 0);
        let chart = build_chart(Gender::Female, &birth, &ChartConfig::default()).unwrap();
        assert_eq!(chart.direction, LuckDirection::Backward);
        assert_eq!(chart.primary.age.to_string(), "3 years 1 months 8 days");
    }

    #[test]
    fn invalid_birth() {
        let birth = CivilDateTime::new(1582, 10, 10, 0, 0, 0);
        assert!(matches!(
            build_chart(Gender::Male, &birth, &ChartConfig::default()),
            Err(BaziError::Time(_))
        ));
    }
}
