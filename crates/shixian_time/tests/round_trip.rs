//! Property: `julian_to_solar(solar_to_julian(d)) == d` for every valid
//! civil date-time in the supported range.

use proptest::prelude::*;
use shixian_time::{CivilDateTime, is_valid_date, julian_to_solar, solar_to_julian};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn civil_julian_round_trip(
        year in -1000i32..=3000,
        month in 1u32..=12,
        day in 1u32..=31,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        prop_assume!(is_valid_date(year, month, day));
        let jd = solar_to_julian(year, month, day, hour, minute, second as f64).unwrap();
        prop_assert_eq!(
            julian_to_solar(jd),
            CivilDateTime::new(year, month, day, hour, minute, second)
        );
    }

    #[test]
    fn julian_is_monotonic_within_day(
        year in 1583i32..=3000,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..23,
    ) {
        let a = solar_to_julian(year, month, day, hour, 0, 0.0).unwrap();
        let b = solar_to_julian(year, month, day, hour + 1, 0, 0.0).unwrap();
        prop_assert!(b > a);
        prop_assert!((b - a - 1.0 / 24.0).abs() < 1e-9);
    }
}

#[test]
fn every_day_of_reform_year_round_trips() {
    for month in 1..=12 {
        for day in 1..=31 {
            if !is_valid_date(1582, month, day) {
                continue;
            }
            let jd = solar_to_julian(1582, month, day, 0, 0, 0.0).unwrap();
            assert_eq!(
                julian_to_solar(jd),
                CivilDateTime::new(1582, month, day, 0, 0, 0)
            );
        }
    }
}
