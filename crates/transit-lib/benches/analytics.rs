use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use transit_lib::analytics::{all_pairs_shortest_paths, betweenness_centrality};
use transit_lib::{build_graph, load_network, plan_route, DatasetPaths, NetworkGraph, RouteRequest};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/boston_subway")
}

static NETWORK: Lazy<NetworkGraph> =
    Lazy::new(|| load_network(&DatasetPaths::for_dir(fixture_dir())).expect("fixture loads"));
static DIRECT_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Alewife", "South Station"));
static TRANSFER_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Harvard", "Boston College"));

fn benchmark_routing(c: &mut Criterion) {
    let network = &*NETWORK;

    c.bench_function("plan_direct_alewife_south_station", |b| {
        let request = &*DIRECT_REQUEST;
        b.iter(|| black_box(plan_route(network, request).expect("route exists")));
    });

    c.bench_function("plan_transfer_harvard_boston_college", |b| {
        let request = &*TRANSFER_REQUEST;
        b.iter(|| black_box(plan_route(network, request).expect("route exists")));
    });
}

fn benchmark_analytics(c: &mut Criterion) {
    let graph = build_graph(&NETWORK);

    c.bench_function("all_pairs_shortest_paths", |b| {
        b.iter(|| black_box(all_pairs_shortest_paths(&graph).reachable_pairs()));
    });

    c.bench_function("betweenness_centrality", |b| {
        b.iter(|| black_box(betweenness_centrality(&graph)));
    });
}

criterion_group!(benches, benchmark_routing, benchmark_analytics);
criterion_main!(benches);
