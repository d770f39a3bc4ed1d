//! Criterion benchmarks for keyed-graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use keyed_graph::graph::traversal::{dfs, DfsOptions, TraversalMode};
use keyed_graph::graph::KeyedGraph;
use keyed_graph::types::{Attributes, GraphOptions};

/// Build a random mixed multigraph.
fn make_large_graph(node_count: usize, edges_per_node: usize) -> KeyedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = KeyedGraph::with_options(GraphOptions::multi());
    let keys: Vec<String> = (0..node_count).map(|i| format!("node_{}", i)).collect();
    graph.add_nodes_from(keys.iter().cloned()).unwrap();

    for source in &keys {
        for _ in 0..edges_per_node {
            let target = &keys[rng.gen_range(0..node_count)];
            if rng.gen_bool(0.8) {
                graph
                    .add_directed_edge(source, target, Attributes::new())
                    .unwrap();
            } else {
                graph
                    .add_undirected_edge(source, target, Attributes::new())
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_10k_nodes_50k_edges", |b| {
        b.iter(|| make_large_graph(black_box(10_000), 5))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 5);
    let mut rng = rand::thread_rng();
    let pairs: Vec<(String, String)> = (0..1_000)
        .map(|_| {
            (
                format!("node_{}", rng.gen_range(0..10_000)),
                format!("node_{}", rng.gen_range(0..10_000)),
            )
        })
        .collect();

    c.bench_function("get_edge_1k_pairs", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(u, v)| graph.get_edge(u, v).is_some())
                .count()
        })
    });

    c.bench_function("degree_1k_nodes", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|(u, _)| graph.degree(u).unwrap())
                .sum::<usize>()
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 5);

    for mode in [TraversalMode::Outbound, TraversalMode::All] {
        let options = DfsOptions::with_mode(mode);
        c.bench_function(&format!("dfs_10k_nodes_{}", mode), |b| {
            b.iter(|| {
                let mut visited = 0usize;
                dfs(&graph, |_, _, _| visited += 1, &options).unwrap();
                visited
            })
        });
    }
}

criterion_group!(benches, bench_build, bench_lookup, bench_dfs);
criterion_main!(benches);
