use criterion::{black_box, criterion_group, criterion_main, Criterion};
use station_nav::components::route_overlay::{RoutePlan, RouteProgress};
use station_nav::data::StationRegistry;
use station_nav::locator::{find_nearest_station, sort_by_distance};

fn benchmark_locator(c: &mut Criterion) {
    let registry = StationRegistry::load().expect("seed data should parse");
    let stations = registry.get_station_list();

    c.bench_function("find_nearest_station", |b| {
        b.iter(|| {
            find_nearest_station(
                black_box(stations.iter().copied()),
                black_box(Some(13.0674)),
                black_box(Some(80.2376)),
            )
        });
    });

    c.bench_function("sort_by_distance", |b| {
        b.iter(|| sort_by_distance(black_box(stations.iter().copied()), black_box(Some(13.0674)), black_box(Some(80.2376))));
    });
}

fn benchmark_route_plan(c: &mut Criterion) {
    let registry = StationRegistry::load().expect("seed data should parse");
    let (_, route) = registry
        .find_route("chennai-central", "chennai-central-platform")
        .expect("seed route exists");

    c.bench_function("route_plan_build", |b| {
        b.iter(|| {
            RoutePlan::build(
                black_box(&route.waypoints),
                black_box((500.0, 300.0)),
                black_box(RouteProgress::AtStep(2)),
            )
        });
    });
}

criterion_group!(benches, benchmark_locator, benchmark_route_plan);
criterion_main!(benches);
