//! Stem and branch of every pillar come from one cycle index.

use proptest::prelude::*;
use shixian_bazi::{Pillar, PillarConfig, four_pillars};
use shixian_time::CivilDateTime;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn stems_and_branches_agree(
        jd in 1_360_000.0f64..2_816_000.0,
        split: bool,
    ) {
        let t = CivilDateTime::from_julian(jd);
        let p = four_pillars(&t, &PillarConfig::new(split)).unwrap();
        for pillar in p.pillars() {
            let cycle = i64::from(pillar.cycle());
            prop_assert_eq!(i64::from(pillar.stem().index()), cycle % 10);
            prop_assert_eq!(i64::from(pillar.branch().index()), cycle % 12);
            prop_assert_eq!(Pillar::from_stem_branch(pillar.stem(), pillar.branch()), Some(pillar));
        }
        prop_assert!(p.terms[0] < p.jd + 1e-9 && p.jd <= p.terms[1]);
    }

    #[test]
    fn consecutive_days_step_the_day_pillar(jd in 2_400_000.0f64..2_500_000.0) {
        let noon = jd.floor();
        let a = four_pillars(&CivilDateTime::from_julian(noon), &PillarConfig::default()).unwrap();
        let b = four_pillars(&CivilDateTime::from_julian(noon + 1.0), &PillarConfig::default()).unwrap();
        prop_assert_eq!(b.day, a.day.offset(1));
        prop_assert_eq!(b.hour, a.hour.offset(12));
    }
}
