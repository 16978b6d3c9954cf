use chrono::{DateTime, TimeZone, Utc};
use common::UnLocode;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Itinerary, Leg, Location, RouteSpecification, RoutingStatus};

fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn location(code: &str, name: &str) -> Location {
    Location::new(UnLocode::new(code).unwrap(), name)
}

fn sample_spec() -> RouteSpecification {
    RouteSpecification::new(
        location("USNYC", "New York"),
        location("SESTO", "Stockholm"),
        date(25),
    )
    .unwrap()
}

fn sample_itinerary() -> Itinerary {
    Itinerary::new(vec![
        Leg::new(
            "V100",
            UnLocode::new("USNYC").unwrap(),
            UnLocode::new("DEHAM").unwrap(),
            date(1),
            date(6),
        ),
        Leg::new(
            "V200",
            UnLocode::new("DEHAM").unwrap(),
            UnLocode::new("SESTO").unwrap(),
            date(7),
            date(10),
        ),
    ])
    .unwrap()
}

fn bench_is_satisfied_by(c: &mut Criterion) {
    let spec = sample_spec();
    let itinerary = sample_itinerary();

    c.bench_function("domain/is_satisfied_by", |b| {
        b.iter(|| spec.is_satisfied_by(std::hint::black_box(&itinerary)));
    });
}

fn bench_derive_status(c: &mut Criterion) {
    let spec = sample_spec();
    let itinerary = sample_itinerary();

    c.bench_function("domain/derive_status", |b| {
        b.iter(|| RoutingStatus::derive(std::hint::black_box(&spec), Some(&itinerary)));
    });
}

criterion_group!(benches, bench_is_satisfied_by, bench_derive_status);
criterion_main!(benches);
