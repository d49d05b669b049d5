//! Closed-form ephemeris for the Chinese calendar.
//!
//! - [`lunation`]: mean and true new moons
//! - [`equinox`]: mean March equinox and solar-term perturbation
//! - [`delta_t`]: TT − UT
//!
//! All instants are Julian Dates. New moons and equinoxes are returned in
//! TT; callers subtract [`delta_t`] and add the UTC+8 offset themselves.

pub mod delta_t;
pub mod equinox;
pub mod error;
pub mod lunation;

pub use delta_t::{delta_t, delta_t_seconds};
pub use equinox::{EQUINOX_YEAR_RANGE, perturbation, vernal_equinox};
pub use error::EphemError;
pub use lunation::{NEW_MOON_EPOCH_JD, SYNODIC_MONTH, mean_new_moon, true_new_moon};
