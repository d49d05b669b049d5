//! Mean and true new moon instants.
//!
//! Lunations are numbered by `k`, with `k = 0` the first new moon of 2000
//! (2000-01-06). The true instant adds the periodic corrections of Meeus,
//! *Astronomical Algorithms*, ch. 49, to the mean instant.

use shixian_time::jd_to_centuries;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Mean new moon of lunation 0 (2000-01-06), JD TT.
pub const NEW_MOON_EPOCH_JD: f64 = 2_451_550.09765;

/// Quadratic-to-quartic secular drift of the mean lunation, in days.
fn secular_drift(t: f64) -> f64 {
    0.0001337 * t * t - 0.00000015 * t * t * t + 0.00000000073 * t * t * t * t
}

/// Mean new moon of the lunation containing `jd`.
///
/// Returns `(k, jd_mean)` where `k` is the lunation number.
pub fn mean_new_moon(jd: f64) -> (i64, f64) {
    let k = ((jd - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).floor();
    let jdt = NEW_MOON_EPOCH_JD + k * SYNODIC_MONTH;
    let t = jd_to_centuries(jdt);
    (k as i64, jdt + secular_drift(t))
}

/// Dominant periodic terms of the new-moon correction.
///
/// Each row: `[amplitude_days, power_of_E, n_M', n_M, n_F, n_Ω]`; the
/// argument is `n_M'·M' + n_M·M + n_F·F + n_Ω·Ω` in degrees and the term is
/// `amplitude · E^power · sin(argument)`.
#[rustfmt::skip]
static NEW_MOON_TERMS: [[f64; 6]; 25] = [
    //   amp      E    M'    M     F     Ω
    [-0.40720,  0.0,  1.0,  0.0,  0.0,  0.0],
    [ 0.17241,  1.0,  0.0,  1.0,  0.0,  0.0],
    [ 0.01608,  0.0,  2.0,  0.0,  0.0,  0.0],
    [ 0.01039,  0.0,  0.0,  0.0,  2.0,  0.0],
    [ 0.00739,  1.0,  1.0, -1.0,  0.0,  0.0],
    [-0.00514,  1.0,  1.0,  1.0,  0.0,  0.0],
    [ 0.00208,  2.0,  0.0,  2.0,  0.0,  0.0],
    [-0.00111,  0.0,  1.0,  0.0, -2.0,  0.0],
    [-0.00057,  0.0,  1.0,  0.0,  2.0,  0.0],
    [ 0.00056,  1.0,  2.0,  1.0,  0.0,  0.0],
    [-0.00042,  0.0,  3.0,  0.0,  0.0,  0.0],
    [ 0.00042,  1.0,  0.0,  1.0,  2.0,  0.0],
    [ 0.00038,  1.0,  0.0,  1.0, -2.0,  0.0],
    [-0.00024,  1.0,  2.0, -1.0,  0.0,  0.0],
    [-0.00017,  0.0,  0.0,  0.0,  0.0,  1.0],
    [-0.00007,  0.0,  1.0,  2.0,  0.0,  0.0],
    [ 0.00004,  0.0,  2.0,  0.0, -2.0,  0.0],
    [ 0.00004,  0.0,  0.0,  3.0,  0.0,  0.0],
    [ 0.00003,  0.0,  1.0,  1.0, -2.0,  0.0],
    [ 0.00003,  0.0,  2.0,  0.0,  2.0,  0.0],
    [-0.00003,  0.0,  1.0,  1.0,  2.0,  0.0],
    [ 0.00003,  0.0,  1.0, -1.0,  2.0,  0.0],
    [-0.00002,  0.0,  1.0, -1.0, -2.0,  0.0],
    [-0.00002,  0.0,  3.0,  1.0,  0.0,  0.0],
    [ 0.00002,  0.0,  4.0,  0.0,  0.0,  0.0],
];

/// Additional planetary-argument terms.
///
/// Each row: `[amplitude_days, phase_deg, rate_deg_per_lunation, t²_coeff]`.
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 4]; 14] = [
    [0.000325, 299.77,  0.107408, -0.009173],
    [0.000165, 251.88,  0.016321,  0.0],
    [0.000164, 251.83, 26.651886,  0.0],
    [0.000126, 349.42, 36.412478,  0.0],
    [0.000110,  84.66, 18.206239,  0.0],
    [0.000062, 141.74, 53.303771,  0.0],
    [0.000060, 207.14,  2.453732,  0.0],
    [0.000056, 154.84,  7.306860,  0.0],
    [0.000047,  34.52, 27.261239,  0.0],
    [0.000042, 207.19,  0.121824,  0.0],
    [0.000040, 291.34,  1.844379,  0.0],
    [0.000037, 161.72, 24.198154,  0.0],
    [0.000035, 239.56, 25.513099,  0.0],
    [0.000023, 331.55,  3.592518,  0.0],
];

/// Fundamental arguments `[M, M', F, Ω]` in degrees for lunation `k`.
///
/// - `M`  = Sun's mean anomaly
/// - `M'` = Moon's mean anomaly
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's ascending node
pub fn lunation_arguments(k: f64, t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let m = 2.5534 + 29.10535669 * k - 0.0000218 * t2 - 0.00000011 * t3;
    let mprime =
        201.5643 + 385.81693528 * k + 0.0107438 * t2 + 0.00001239 * t3 - 0.000000058 * t4;
    let f = 160.7108 + 390.67050274 * k - 0.0016341 * t2 - 0.00000227 * t3 + 0.000000011 * t4;
    let omega = 124.7746 - 1.5637558 * k + 0.0020691 * t2 + 0.00000215 * t3;

    [m, mprime, f, omega]
}

/// True new moon of lunation `k`, JD TT.
pub fn true_new_moon(k: i64) -> f64 {
    let kf = k as f64;
    let jdt = NEW_MOON_EPOCH_JD + kf * SYNODIC_MONTH;
    let t = jd_to_centuries(jdt);
    let t2 = t * t;
    let mean = jdt + secular_drift(t);

    let [m, mprime, f, omega] = lunation_arguments(kf, t);
    // Eccentricity of Earth's orbit, decreasing with time.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let dominant: f64 = NEW_MOON_TERMS
        .iter()
        .map(|row| {
            let arg = row[2] * mprime + row[3] * m + row[4] * f + row[5] * omega;
            row[0] * e.powi(row[1] as i32) * arg.to_radians().sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .map(|row| row[0] * (row[1] + row[2] * kf + row[3] * t2).to_radians().sin())
        .sum();

    mean + dominant + planetary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_lunation_is_zero() {
        let (k, jd) = mean_new_moon(NEW_MOON_EPOCH_JD + 1.0);
        assert_eq!(k, 0);
        assert!((jd - NEW_MOON_EPOCH_JD).abs() < 1e-6);
    }

    #[test]
    fn lunation_before_epoch_is_negative() {
        let (k, _) = mean_new_moon(NEW_MOON_EPOCH_JD - 1.0);
        assert_eq!(k, -1);
    }

    #[test]
    fn mean_lunations_are_synodic_months_apart() {
        let (_, a) = mean_new_moon(NEW_MOON_EPOCH_JD + 0.5);
        let (_, b) = mean_new_moon(NEW_MOON_EPOCH_JD + SYNODIC_MONTH + 0.5);
        assert!((b - a - SYNODIC_MONTH).abs() < 1e-6);
    }

    #[test]
    fn true_new_moon_january_2000() {
        // 2000-01-06 18:14 UT (Meeus example value region).
        let jd = true_new_moon(0);
        assert!((jd - 2_451_550.2602).abs() < 1e-3, "got {jd}");
    }

    #[test]
    fn correction_stays_within_a_day() {
        for k in [-15_000, -3000, -1, 0, 1, 250, 600, 12_000] {
            let (_, mean) = mean_new_moon(NEW_MOON_EPOCH_JD + k as f64 * SYNODIC_MONTH + 1.0);
            let corr = true_new_moon(k) - mean;
            assert!(corr.abs() < 0.75, "k={k}: correction {corr}");
        }
    }

    #[test]
    fn term_tables_sizes() {
        assert_eq!(NEW_MOON_TERMS.len(), 25);
        assert_eq!(PLANETARY_TERMS.len(), 14);
    }
}
