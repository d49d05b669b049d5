//! The 24 solar terms of a tropical year.
//!
//! Term index 0 is the March equinox (春分); odd indices are jie, even indices
//! are zhongqi. Sets carry 26 entries so that the following year's equinox
//! and Qingming are available without a second computation.
//!
//! Mean instants partition the orbit by true anomaly with a closed-form
//! Kepler solution, so terms are unequally spaced in time. Adjusted instants
//! add the periodic perturbation, subtract ΔT and shift to UTC+8.

use std::f64::consts::PI;

use shixian_ephem::{EphemError, delta_t, perturbation, vernal_equinox};
use shixian_time::{CivilDateTime, J2000_JD, julian_to_solar};

use crate::error::CalendarError;
use crate::jie::Jie;

/// Entries in a solar-term set (24 plus a margin of 2).
pub const TERM_COUNT: usize = 26;

/// Term index of Lichun (start of spring) in a set.
pub const LICHUN_INDEX: usize = 21;

/// Term index of the winter solstice in a set.
pub const WINTER_SOLSTICE_INDEX: usize = 18;

/// UTC+8 offset in days.
const UTC8_OFFSET: f64 = 1.0 / 3.0;

/// Which year's set an entry of a re-sliced sequence comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermYear {
    Prior,
    Current,
}

use TermYear::{Current, Prior};

/// Jie since the prior Xiaohan: Xiaohan, Lichun, Jingzhe of the prior set,
/// then Qingming .. Qingming (odd indices 1..=25) of the current set.
#[rustfmt::skip]
static JIE_SLOTS: [(TermYear, usize); 16] = [
    (Prior, 19), (Prior, 21), (Prior, 23),
    (Current, 1), (Current, 3), (Current, 5), (Current, 7), (Current, 9),
    (Current, 11), (Current, 13), (Current, 15), (Current, 17), (Current, 19),
    (Current, 21), (Current, 23), (Current, 25),
];

/// Zhongqi since the prior winter solstice: solstice, Dahan, Yushui of the
/// prior set, then even indices 0..=22 of the current set.
#[rustfmt::skip]
static ZHONGQI_SLOTS: [(TermYear, usize); 15] = [
    (Prior, 18), (Prior, 20), (Prior, 22),
    (Current, 0), (Current, 2), (Current, 4), (Current, 6), (Current, 8),
    (Current, 10), (Current, 12), (Current, 14), (Current, 16), (Current, 18),
    (Current, 20), (Current, 22),
];

/// Mean solar-term instants of `year`, JD TT, starting at the March equinox.
pub fn mean_solar_terms(year: i32) -> Result<[f64; TERM_COUNT], EphemError> {
    let jd = vernal_equinox(year)?;
    let tropical_year = vernal_equinox(year + 1)? - jd;

    let tx = (jd - J2000_JD) / 365_250.0;
    let e = 0.0167086342 - 0.0004203654 * tx - 0.0000126734 * tx * tx
        + 0.0000001444 * tx * tx * tx
        - 0.0000000002 * tx * tx * tx * tx
        + 0.0000000003 * tx * tx * tx * tx * tx;

    // Longitude of perihelion, degrees.
    let tt = f64::from(year) / 1000.0;
    let vp = 111.25586939 - 17.0119934518333 * tt - 0.044091890166673 * tt * tt
        - 4.37356166661345E-04 * tt * tt * tt
        + 8.16716666602386E-06 * tt * tt * tt * tt;
    let rvp = vp * 2.0 * PI / 360.0;

    let step = 2.0 * PI / 24.0;
    let ecc_factor = ((1.0 - e) / (1.0 + e)).sqrt();
    let since_perihelion: [f64; TERM_COUNT] = std::array::from_fn(|i| {
        let mut th = step * i as f64 + rvp;
        let mut laps = 0.0;
        if PI < th && th <= 3.0 * PI {
            th = 2.0 * PI - th;
            laps = 1.0;
        } else if 3.0 * PI < th {
            th = 4.0 * PI - th;
            laps = 2.0;
        }
        let f1 = 2.0 * (ecc_factor * (th / 2.0).tan()).atan();
        let f2 = (e * (1.0 - e * e).sqrt() * th.sin()) / (1.0 + e * th.cos());
        let f = (f1 - f2) * tropical_year / 2.0 / PI;
        if laps == 0.0 { f } else { laps * tropical_year - f }
    });

    Ok(std::array::from_fn(|i| {
        jd + since_perihelion[i] - since_perihelion[0]
    }))
}

/// Adjust one mean term of `year` to a UTC+8 instant.
fn localize(year: i32, index: usize, mean_jd: f64) -> f64 {
    let dt = delta_t(year, ((index + 1) / 2 + 3) as i32);
    mean_jd + perturbation(mean_jd) - dt / 60.0 / 24.0 + UTC8_OFFSET
}

/// A contiguous run of adjusted solar terms of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSlice {
    /// Term index of `instants[0]`.
    pub first: usize,
    /// Adjusted instants, JD UTC+8.
    pub instants: Vec<f64>,
}

impl TermSlice {
    /// Instant of term `index`, if it lies in the slice.
    pub fn get(&self, index: usize) -> Option<f64> {
        index
            .checked_sub(self.first)
            .and_then(|i| self.instants.get(i).copied())
    }
}

/// Adjusted instants of terms `start..=end` of `year`.
pub fn adjusted_solar_terms(
    year: i32,
    start: usize,
    end: usize,
) -> Result<TermSlice, CalendarError> {
    if start > end || end >= TERM_COUNT {
        return Err(CalendarError::InvalidTermRange { start, end });
    }
    let mean = mean_solar_terms(year)?;
    let instants = (start..=end)
        .map(|k| localize(year, k, mean[k]))
        .collect();
    Ok(TermSlice {
        first: start,
        instants,
    })
}

fn gather<const N: usize>(
    year: i32,
    slots: &[(TermYear, usize); N],
) -> Result<[f64; N], CalendarError> {
    let prior = mean_solar_terms(year - 1)?;
    let current = mean_solar_terms(year)?;
    Ok(std::array::from_fn(|i| match slots[i] {
        (Prior, k) => localize(year - 1, k, prior[k]),
        (Current, k) => localize(year, k, current[k]),
    }))
}

/// The 16 jie from the prior year's Xiaohan through this year's set's
/// Qingming. Index 1 is this year's Lichun.
pub fn principal_terms_since_spring(year: i32) -> Result<[f64; 16], CalendarError> {
    gather(year, &JIE_SLOTS)
}

/// The 15 zhongqi from the prior year's winter solstice. Index 12 is this
/// year's winter solstice.
pub fn midterms_since_winter_solstice(year: i32) -> Result<[f64; 15], CalendarError> {
    gather(year, &ZHONGQI_SLOTS)
}

/// Lichun (start of spring) of `year`, JD UTC+8.
pub fn spring_begins(year: i32) -> Result<f64, CalendarError> {
    let mean = mean_solar_terms(year - 1)?;
    Ok(localize(year - 1, LICHUN_INDEX, mean[LICHUN_INDEX]))
}

/// One principal term of a year with its civil time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermRecord {
    /// The term.
    pub jie: Jie,
    /// Civil time (UTC+8).
    pub time: CivilDateTime,
    /// Instant, JD UTC+8.
    pub jd: f64,
    /// Civil months from this term to the next, modulo 12.
    pub month_delta: u32,
    /// Civil day of month of the next term.
    pub next_day: u32,
}

/// The 12 jie of `year`, Lichun through the following Xiaohan.
pub fn year_solar_terms(year: i32) -> Result<Vec<SolarTermRecord>, CalendarError> {
    let jds = principal_terms_since_spring(year)?;
    // One extra term so the last record knows its successor.
    let times: Vec<CivilDateTime> = jds[1..14].iter().map(|&jd| julian_to_solar(jd)).collect();

    Ok(times
        .windows(2)
        .enumerate()
        .map(|(i, pair)| SolarTermRecord {
            jie: Jie::from_sequence_index(i + 1),
            time: pair[0],
            jd: jds[i + 1],
            month_delta: (pair[1].month + 12 - pair[0].month) % 12,
            next_day: pair[1].day,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_set_starts_at_equinox() {
        let terms = mean_solar_terms(2000).unwrap();
        assert!((terms[0] - vernal_equinox(2000).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn mean_set_is_increasing() {
        for year in [-1000, 0, 1582, 2024, 3000] {
            let terms = mean_solar_terms(year).unwrap();
            for w in terms.windows(2) {
                let gap = w[1] - w[0];
                assert!(gap > 14.0 && gap < 16.5, "{year}: gap {gap}");
            }
        }
    }

    #[test]
    fn index_24_is_next_equinox() {
        let terms = mean_solar_terms(2024).unwrap();
        let next = vernal_equinox(2025).unwrap();
        assert!((terms[24] - next).abs() < 1e-6);
    }

    #[test]
    fn invalid_ranges() {
        assert_eq!(
            adjusted_solar_terms(2024, 0, 26),
            Err(CalendarError::InvalidTermRange { start: 0, end: 26 })
        );
        assert!(adjusted_solar_terms(2024, 5, 4).is_err());
    }

    #[test]
    fn slice_indexing() {
        let slice = adjusted_solar_terms(2024, 19, 23).unwrap();
        assert_eq!(slice.instants.len(), 5);
        assert!(slice.get(18).is_none());
        assert!(slice.get(24).is_none());
        assert_eq!(slice.get(19), Some(slice.instants[0]));
    }

    #[test]
    fn spring_matches_sequence() {
        let seq = principal_terms_since_spring(2024).unwrap();
        assert_eq!(spring_begins(2024).unwrap(), seq[1]);
    }

    #[test]
    fn lichun_2024() {
        // 2024-02-04 16:27 UTC+8.
        let jd = spring_begins(2024).unwrap();
        assert!((jd - 2_460_345.185_447_454_5).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn sequences_agree_with_slices() {
        let seq = principal_terms_since_spring(2024).unwrap();
        let slice = adjusted_solar_terms(2024, 1, 25).unwrap();
        assert_eq!(seq[3], slice.get(1).unwrap());
        assert_eq!(seq[15], slice.get(25).unwrap());

        let zq = midterms_since_winter_solstice(2024).unwrap();
        let prior = adjusted_solar_terms(2023, WINTER_SOLSTICE_INDEX, 22).unwrap();
        assert_eq!(zq[0], prior.get(WINTER_SOLSTICE_INDEX).unwrap());
        assert_eq!(zq[12], slice.get(WINTER_SOLSTICE_INDEX).unwrap());
    }

    #[test]
    fn ephemeris_range_propagates() {
        assert!(matches!(
            mean_solar_terms(8001),
            Err(EphemError::OutOfRange(8002))
        ));
    }
}
