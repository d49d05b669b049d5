//! ΔT = TT − UT approximation.
//!
//! Espenak–Meeus piecewise polynomials (NASA eclipse web site, 2006) with a
//! long-term parabola outside the historical record, plus the tidal
//! acceleration correction outside 1955..2005.

/// How one piece of the ΔT curve is evaluated.
#[derive(Debug, Clone, Copy)]
enum Formula {
    /// `Σ cᵢ·uⁱ` with `u = (y − origin) / scale`.
    Polynomial {
        origin: f64,
        scale: f64,
        coeffs: &'static [f64],
    },
    /// `−20 + 32·u²` with `u = (y − 1820) / 100`.
    Parabola,
    /// Parabola pulled toward the 2050 value: `− 0.5628·(2150 − y)`.
    BlendedParabola,
}

/// A piece of the curve that applies to years below `until`.
#[derive(Debug, Clone, Copy)]
struct Segment {
    until: f64,
    formula: Formula,
}

const fn poly(until: f64, origin: f64, scale: f64, coeffs: &'static [f64]) -> Segment {
    Segment {
        until,
        formula: Formula::Polynomial {
            origin,
            scale,
            coeffs,
        },
    }
}

/// Segments in increasing order of `until`. Years at or before -500 use the
/// parabola directly; see [`delta_t_seconds`].
#[rustfmt::skip]
static SEGMENTS: [Segment; 14] = [
    poly(500.0,     0.0, 100.0, &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521]),
    poly(1600.0, 1000.0, 100.0, &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073]),
    poly(1700.0, 1600.0,   1.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
    poly(1800.0, 1700.0,   1.0, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0]),
    poly(1860.0, 1800.0,   1.0, &[13.72, -0.332447, 0.0068612, 0.0041116, -0.00037436, 0.0000121272, -0.0000001699, 0.000000000875]),
    poly(1900.0, 1860.0,   1.0, &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0]),
    poly(1920.0, 1900.0,   1.0, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197]),
    poly(1941.0, 1920.0,   1.0, &[21.2, 0.84493, -0.0761, 0.0020936]),
    poly(1961.0, 1950.0,   1.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
    poly(1986.0, 1975.0,   1.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
    poly(2005.0, 2000.0,   1.0, &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599]),
    poly(2050.0, 2000.0,   1.0, &[62.92, 0.32217, 0.005589]),
    Segment { until: 2150.0, formula: Formula::BlendedParabola },
    Segment { until: f64::INFINITY, formula: Formula::Parabola },
];

fn horner(coeffs: &[f64], u: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * u + c)
}

fn parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

impl Formula {
    fn eval(self, y: f64) -> f64 {
        match self {
            Self::Polynomial {
                origin,
                scale,
                coeffs,
            } => horner(coeffs, (y - origin) / scale),
            Self::Parabola => parabola(y),
            Self::BlendedParabola => parabola(y) - 0.5628 * (2150.0 - y),
        }
    }
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(y: f64) -> f64 {
    let dt = if y <= -500.0 {
        parabola(y)
    } else {
        SEGMENTS
            .iter()
            .find(|s| y < s.until)
            .map_or_else(|| parabola(y), |s| s.formula.eval(y))
    };

    // Tidal acceleration correction outside the interval fitted with the
    // modern lunar ephemeris value.
    if !(1955.0..2005.0).contains(&y) {
        let d = y - 1955.0;
        dt - 0.000012932 * d * d
    } else {
        dt
    }
}

/// ΔT in minutes for the middle of a month.
///
/// `month` is not range-checked; callers pass offsets like 0 or 13 and the
/// decimal year simply moves outside the civil year.
pub fn delta_t(year: i32, month: i32) -> f64 {
    let y = f64::from(year) + (f64::from(month) - 0.5) / 12.0;
    delta_t_seconds(y) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2000() {
        let dt = delta_t(2000, 1);
        assert!((dt - 1.064_563_880_182_654).abs() < 1e-9, "got {dt}");
    }

    #[test]
    fn segments_are_ordered() {
        for pair in SEGMENTS.windows(2) {
            assert!(pair[0].until < pair[1].until);
        }
    }

    #[test]
    fn continuous_at_modern_boundaries() {
        // Adjacent fits agree to well under a few seconds at their seams.
        for &y in &[1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0] {
            let below = delta_t_seconds(y - 1e-6);
            let above = delta_t_seconds(y);
            assert!((above - below).abs() < 2.0, "seam {y}: {below} vs {above}");
        }
    }

    #[test]
    fn ancient_values_are_large() {
        // Several hours around -1000.
        let dt = delta_t_seconds(-1000.0);
        assert!(dt > 20_000.0 && dt < 30_000.0, "got {dt}");
    }

    #[test]
    fn historical_pieces() {
        // Espenak–Meeus values at the piece origins, less the tidal term.
        for (y, expected) in [
            (0.0, 10_534.173_572_7),
            (250.0, 8_125.470_200_6),
            (1000.0, 1_562.405_692_7),
            (1300.0, 486.355_377_0),
        ] {
            let dt = delta_t_seconds(y);
            assert!((dt - expected).abs() < 1e-6, "{y}: got {dt}");
        }
    }

    #[test]
    fn modern_value_near_one_minute() {
        let dt = delta_t_seconds(2024.0);
        assert!(dt > 60.0 && dt < 80.0, "got {dt}");
    }

    #[test]
    fn far_future_uses_parabola() {
        let y = 2500.0;
        let expected = parabola(y) - 0.000012932 * (y - 1955.0) * (y - 1955.0);
        assert!((delta_t_seconds(y) - expected).abs() < 1e-9);
    }
}
