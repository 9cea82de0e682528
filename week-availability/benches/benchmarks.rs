use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use week_availability::fill::{Uniform, WeekdaysOnly};
use week_availability::{week_of, AvailabilityFacade, DayKey, TimeSlot, TimeSlotCatalog};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
}

fn bench_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("week");

    group.bench_function("week_of", |b| b.iter(|| week_of(black_box(anchor()))));

    group.bench_function("day_keys", |b| {
        let week = week_of(anchor()).unwrap();
        b.iter(|| black_box(week).day_keys())
    });

    group.bench_function("catalog", |b| {
        b.iter(|| TimeSlotCatalog::generate(black_box(0), black_box(24)))
    });
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("visit_year", |b| {
        b.iter(|| {
            let mut availability =
                AvailabilityFacade::new(TimeSlotCatalog::default(), WeekdaysOnly);

            for week in 0..52 {
                availability
                    .set_anchor_date(anchor() + Days::new(7 * week))
                    .unwrap();
            }

            availability.commit()
        })
    });

    group.bench_function("revisit_week", |b| {
        let mut availability = AvailabilityFacade::new(TimeSlotCatalog::default(), WeekdaysOnly);
        availability.set_anchor_date(anchor()).unwrap();
        b.iter(|| availability.set_anchor_date(black_box(anchor())).unwrap())
    });
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    let mut availability = AvailabilityFacade::new(TimeSlotCatalog::default(), Uniform(true));
    availability.set_anchor_date(anchor()).unwrap();

    let day = DayKey::from(anchor());
    let slot = TimeSlot::new(12, 30).unwrap();

    group.bench_function("toggle_slot", |b| {
        b.iter(|| availability.toggle_slot(black_box(&day), black_box(slot)))
    });

    group.bench_function("available_count", |b| {
        b.iter(|| availability.available_count(black_box(&day)))
    });
}

criterion_group!(benches, bench_week, bench_navigation, bench_edit);
criterion_main!(benches);
