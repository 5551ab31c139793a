use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_core::{CachedEphemeris, CalcFlags, HouseSystem, MeanElementsEphemeris};
use jyotish_search::{
    DailyWindow, MuhurtaRequest, MuhurtaScanConfig, compute_chart, panchang_for_moment,
    score_muhurta,
};
use jyotish_time::{CivilDateTime, GeoLocation, Moment};
use jyotish_vedic_base::{ActivityCategory, Rating};

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090).expect("valid location")
}

fn moment() -> Moment {
    Moment::new(
        CivilDateTime::new(2024, 1, 15, 12, 0, 0.0).expect("valid time"),
        delhi(),
        5.5,
    )
    .expect("valid moment")
}

fn chart_bench(c: &mut Criterion) {
    let eph = MeanElementsEphemeris::new();
    let m = moment();
    let flags = CalcFlags::default();

    let mut group = c.benchmark_group("search_chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| {
            compute_chart(black_box(&eph), black_box(&m), HouseSystem::WholeSign, flags)
                .expect("chart should compute")
        })
    });
    group.bench_function("panchang_for_moment", |b| {
        b.iter(|| panchang_for_moment(black_box(&eph), black_box(&m), flags).expect("panchang"))
    });
    group.finish();
}

fn muhurta_bench(c: &mut Criterion) {
    let eph = CachedEphemeris::new(MeanElementsEphemeris::new(), 4096);
    let request = MuhurtaRequest {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 21).expect("valid date"),
        daily_window: DailyWindow::new(6.0, 20.0),
        location: delhi(),
        utc_offset_hours: 5.5,
        category: ActivityCategory::Business,
    };
    let config = MuhurtaScanConfig {
        min_rating: Rating::Fair,
        alternative_days: 0,
        ..MuhurtaScanConfig::default()
    };

    let mut group = c.benchmark_group("search_muhurta");
    group.sample_size(20);
    group.bench_function("week_scan", |b| {
        b.iter(|| score_muhurta(black_box(&eph), black_box(&request), &config).expect("scan"))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, muhurta_bench);
criterion_main!(benches);
