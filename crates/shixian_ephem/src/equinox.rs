//! Mean March equinox and the periodic perturbation of solar-term instants.
//!
//! Polynomials from Meeus, *Astronomical Algorithms*, ch. 27 (tables 27.A
//! and 27.B), and the 24-term periodic series of table 27.C.

use shixian_time::jd_to_centuries;

use crate::error::EphemError;

/// Years for which the equinox polynomials are defined.
pub const EQUINOX_YEAR_RANGE: std::ops::RangeInclusive<i32> = -8000..=8001;

/// Mean March equinox of `year`, JD TT.
///
/// Uses the 1000..=8001 polynomial where it applies and the −1000..1000
/// polynomial otherwise.
pub fn vernal_equinox(year: i32) -> Result<f64, EphemError> {
    if !EQUINOX_YEAR_RANGE.contains(&year) {
        return Err(EphemError::OutOfRange(year));
    }
    let y = f64::from(year);
    let jd = if year >= 1000 {
        let m = (y - 2000.0) / 1000.0;
        2_451_623.80984 + 365_242.37404 * m + 0.05169 * m * m - 0.00411 * m * m * m
            - 0.00057 * m * m * m * m
    } else {
        let m = y / 1000.0;
        1_721_139.29189 + 365_242.1374 * m + 0.06134 * m * m + 0.00111 * m * m * m
            - 0.00071 * m * m * m * m
    };
    Ok(jd)
}

/// Periodic terms `[A, B (deg), C (deg per century)]`.
#[rustfmt::skip]
static PERTURBATION_TERMS: [[f64; 3]; 24] = [
    [485.0, 324.96,   1934.136],
    [203.0, 337.23,  32964.467],
    [199.0, 342.08,     20.186],
    [182.0,  27.85, 445267.112],
    [156.0,  73.14,  45036.886],
    [136.0, 171.52,  22518.443],
    [ 77.0, 222.54,  65928.934],
    [ 74.0, 296.72,   3034.906],
    [ 70.0, 243.58,   9037.513],
    [ 58.0, 119.81,  33718.147],
    [ 52.0, 297.17,    150.678],
    [ 50.0,  21.02,   2281.226],
    [ 45.0, 247.54,  29929.562],
    [ 44.0, 325.15,  31555.956],
    [ 29.0,  60.93,   4443.417],
    [ 18.0, 155.12,  67555.328],
    [ 17.0, 288.79,   4562.452],
    [ 16.0, 198.04,  62894.029],
    [ 14.0, 199.76,  31436.921],
    [ 12.0,  95.39,  14577.848],
    [ 12.0, 287.11,  31931.756],
    [ 12.0, 320.81,  34777.259],
    [  9.0, 227.73,   1222.114],
    [  8.0,  15.45,  16859.074],
];

/// Periodic correction in days to add to a mean solar-term instant.
pub fn perturbation(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let s: f64 = PERTURBATION_TERMS
        .iter()
        .map(|&[a, b, c]| a * (b + c * t).to_radians().cos())
        .sum();
    let w = (35_999.373 * t - 2.47).to_radians();
    let l = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    0.00001 * s / l
}
