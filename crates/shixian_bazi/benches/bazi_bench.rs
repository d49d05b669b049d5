use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shixian_bazi::{
    ChartConfig, Gender, Pillar, PillarConfig, ResolveConfig, build_chart, four_pillars,
    resolve_pillars_to_dates,
};
use shixian_time::CivilDateTime;

fn bazi_benches(c: &mut Criterion) {
    let birth = CivilDateTime::new(1990, 6, 15, 14, 30, 0);
    let mut group = c.benchmark_group("bazi");

    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&birth), &PillarConfig::default()))
    });

    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(Gender::Male, black_box(&birth), &ChartConfig::default()))
    });

    group.bench_function("resolve_pillars_to_dates", |b| {
        b.iter(|| {
            resolve_pillars_to_dates(
                black_box(Pillar::new(6)),
                Pillar::new(18),
                Pillar::new(47),
                Pillar::new(31),
                &ResolveConfig::default(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bazi_benches);
criterion_main!(benches);
