//! Routing benchmarks.
//!
//! Benchmarks: single search on layered graphs and batch fan-out.
//! Run with: cargo bench -p relay-routing --bench routing_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use relay_routing::{find_minimum_latency, find_minimum_latency_batch, RouteGraph};

/// Layered graph: `layers` layers of `width` nodes, every node linked
/// to every node of the next layer with a mildly varying latency.
fn layered_graph(layers: usize, width: usize) -> RouteGraph {
    let mut g = RouteGraph::new();
    for layer in 0..layers.saturating_sub(1) {
        for from in 0..width {
            for to in 0..width {
                let latency = 1.0 + ((from * 7 + to * 3) % 10) as f64;
                g.add_link(
                    &format!("l{layer}_n{from}"),
                    &format!("l{}_n{to}", layer + 1),
                    latency,
                );
            }
        }
    }
    g
}

fn search_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_layered");
    group.sample_size(20);

    for (layers, width) in [(10, 10), (20, 20), (40, 25)] {
        let g = layered_graph(layers, width);
        let source = "l0_n0".to_string();
        let destination = format!("l{}_n{}", layers - 1, width - 1);

        group.bench_with_input(
            BenchmarkId::new("search", format!("{layers}x{width}")),
            &g,
            |b, g| {
                b.iter(|| {
                    find_minimum_latency(g, &["l1_n0", "l2_n1"], &source, &destination).unwrap()
                });
            },
        );
    }
    group.finish();
}

fn batch_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_fanout");
    group.sample_size(10);

    let g = layered_graph(20, 20);
    let destinations: Vec<String> = (0..20).map(|n| format!("l19_n{n}")).collect();
    let queries: Vec<(&str, &str)> = destinations
        .iter()
        .map(|d| ("l0_n0", d.as_str()))
        .collect();

    group.bench_function("batch_20_queries", |b| {
        b.iter(|| find_minimum_latency_batch(&g, &[], &queries).unwrap());
    });
    group.finish();
}

criterion_group!(benches, search_layered, batch_fanout);
criterion_main!(benches);
