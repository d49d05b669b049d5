//! Inverse search: four pillars → civil date-time windows.
//!
//! The year pillar repeats every 60 years, so the search walks a bounded
//! number of 60-year cycles from a base year. Within a matching year the
//! month branch fixes the solar month, the day pillar fixes one day of it and
//! the hour branch a two-hour window.

use shixian_calendar::principal_terms_since_spring;
use shixian_time::{CivilDateTime, julian_to_solar};
use tracing::{debug, trace};

use crate::error::BaziError;
use crate::pillars::PillarConfig;
use crate::sexagenary::Pillar;

/// Where a 子-hour pillar is placed relative to the day pillar's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZiWindow {
    /// 00:00-01:00 of the day.
    #[default]
    Early,
    /// 23:00-24:00 of the day, for pillars computed with a split 子 hour.
    Late,
    /// 23:00 of the previous day to 01:00, for pillars computed without a
    /// split 子 hour.
    Whole,
}

/// Search bounds and the 子-hour convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveConfig {
    pub zi: ZiWindow,
    /// First year searched.
    pub base_year: i32,
    /// Number of 60-year cycles searched.
    pub cycle_count: u32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            zi: ZiWindow::Early,
            base_year: 1500,
            cycle_count: 17,
        }
    }
}

impl ResolveConfig {
    pub fn with_zi(zi: ZiWindow) -> Self {
        Self {
            zi,
            ..Self::default()
        }
    }

    /// Default bounds with the late 子-hour convention.
    pub fn late_zi() -> Self {
        Self::with_zi(ZiWindow::Late)
    }

    /// Window matching [`four_pillars`] for `config`.
    ///
    /// [`four_pillars`]: crate::four_pillars
    pub fn for_pillars(config: &PillarConfig) -> Self {
        Self::with_zi(if config.split_zi_hour {
            ZiWindow::Late
        } else {
            ZiWindow::Whole
        })
    }
}

/// A civil time window matching a pillar combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub start_jd: f64,
    pub end_jd: f64,
    pub start: CivilDateTime,
    pub end: CivilDateTime,
}

impl DateWindow {
    fn new(start_jd: f64, end_jd: f64) -> Self {
        Self {
            start_jd,
            end_jd,
            start: julian_to_solar(start_jd),
            end: julian_to_solar(end_jd),
        }
    }

    pub fn contains(&self, jd: f64) -> bool {
        (self.start_jd..=self.end_jd).contains(&jd)
    }
}

/// Offsets from the day's noon, in days, of a two-hour branch window.
fn hour_window(branch: u8, zi: ZiWindow) -> (f64, f64) {
    match (branch, zi) {
        (0, ZiWindow::Early) => (-12.0 / 24.0, -11.0 / 24.0),
        (0, ZiWindow::Late) => (11.0 / 24.0, 12.0 / 24.0 - 1e-8),
        (h, _) => {
            let h = f64::from(h);
            ((2.0 * h - 13.0) / 24.0, (2.0 * h - 11.0) / 24.0)
        }
    }
}

/// All windows within the configured cycles whose pillars are `year`,
/// `month`, `day` and `hour`. Only the branches of the month and hour pillars
/// are used.
///
/// An empty result means no date in the searched span matches.
pub fn resolve_pillars_to_dates(
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
    config: &ResolveConfig,
) -> Result<Vec<DateWindow>, BaziError> {
    let base_cycle = (i64::from(config.base_year) + 56).rem_euclid(60);
    let first_year = config.base_year + (i64::from(year.cycle()) - base_cycle).rem_euclid(60) as i32;
    // Lichun opens the 寅 month, the first of the term year.
    let month_slot = (usize::from(month.branch().index()) + 10) % 12;
    let (from_noon, to_noon) = hour_window(hour.branch().index(), config.zi);

    let mut windows = Vec::new();
    for m in 0..config.cycle_count {
        let target = first_year + 60 * m as i32;
        let terms = principal_terms_since_spring(target)?;
        let head = terms[1 + month_slot];
        let foot = terms[2 + month_slot];

        let head_cycle = (head.floor() as i64 + 49).rem_euclid(60);
        let day_diff = (i64::from(day.cycle()) - head_cycle).rem_euclid(60);
        let noon = (head + day_diff as f64).floor();

        let from = noon + from_noon;
        let to = noon + to_noon;
        if to < head || foot < from {
            debug!(year = target, "pillars not realised in this cycle");
            continue;
        }

        let window = DateWindow::new(from.max(head), to.min(foot));
        trace!(year = target, start = %window.start, end = %window.end, "candidate window");
        windows.push(window);
    }
    Ok(windows)
}
