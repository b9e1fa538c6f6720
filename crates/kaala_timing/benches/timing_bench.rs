use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaala_chart::{GeoLocation, NatalChart};
use kaala_ephem::Body;
use kaala_time::{CivilTime, TimeInstant, calendar_to_jd};
use kaala_timing::{
    AnalysisContext, EventCategory, PeriodTable, SubPeriod, TimingMethod, TransitMethod,
    timing_report,
};

fn setup() -> (NatalChart, PeriodTable, f64, f64) {
    let birth = TimeInstant::new(CivilTime::new(1990, 5, 15, 14, 30, 0.0));
    let chart = NatalChart::for_instant(&birth, &GeoLocation::new(28.6139, 77.2090))
        .expect("chart should build");
    let start = calendar_to_jd(&CivilTime::new(2024, 1, 1, 0, 0, 0.0));
    let end = calendar_to_jd(&CivilTime::new(2026, 1, 1, 0, 0, 0.0));
    let periods = PeriodTable::new(vec![
        SubPeriod::new(Body::Venus, Body::Venus, start, start + 300.0),
        SubPeriod::new(Body::Venus, Body::Sun, start + 300.0, start + 500.0),
        SubPeriod::new(Body::Venus, Body::Moon, start + 500.0, end),
    ])
    .expect("table should validate");
    (chart, periods, start, end)
}

fn transit_bench(c: &mut Criterion) {
    let (chart, periods, start, end) = setup();
    let ctx = AnalysisContext {
        chart: &chart,
        periods: &periods,
        event: EventCategory::Marriage,
        start_jd: start,
        end_jd: end,
    };

    let mut group = c.benchmark_group("timing_transit");
    group.bench_function("two_years_monthly", |b| {
        b.iter(|| TransitMethod.analyze(black_box(&ctx)).expect("should analyze"))
    });
    group.finish();
}

fn report_bench(c: &mut Criterion) {
    let (chart, periods, start, end) = setup();

    let mut group = c.benchmark_group("timing_report");
    group.bench_function("marriage_two_years", |b| {
        b.iter(|| {
            timing_report(
                black_box(&chart),
                black_box(&periods),
                EventCategory::Marriage,
                black_box(start),
                black_box(end),
            )
            .expect("should report")
        })
    });
    group.finish();
}

criterion_group!(benches, transit_bench, report_bench);
criterion_main!(benches);
