//! BaZi (Four Pillars) charts.
//!
//! This crate provides:
//! - Stems, branches and the 60-pillar cycle
//! - Year/month/day/hour pillars of a civil moment
//! - Chart assembly with luck pillars under two onset theories
//! - The inverse search from four pillars to civil date windows

pub mod chart;
pub mod error;
pub mod luck;
pub mod pillars;
pub mod resolve;
pub mod sexagenary;

pub use chart::{BaziChart, BirthTerm, ChartConfig, build_chart};
pub use error::BaziError;
pub use luck::{
    AlternateOnset, Gender, LUCK_PILLAR_COUNT, LuckDirection, OnsetAge, PrimaryOnset,
    alternate_onset, alternate_span, luck_pillars, primary_onset, shift_lunar_to_solar,
};
pub use pillars::{FourPillars, PillarConfig, four_pillars};
pub use resolve::{DateWindow, ResolveConfig, ZiWindow, resolve_pillars_to_dates};
pub use sexagenary::{ALL_BRANCHES, ALL_STEMS, Branch, Pillar, Stem};
