//! Phase 2 tests: degree bookkeeping and neighbor iteration.

use keyed_graph::graph::{KeyedGraph, Traversable, TraversalMode};
use keyed_graph::types::args;
use keyed_graph::types::error::ErrorKind;
use keyed_graph::types::{Attributes, GraphOptions};

use rand::Rng;
use serde_json::json;

// ==================== Helper ====================

fn graph_with(nodes: &[&str]) -> KeyedGraph {
    let mut graph = KeyedGraph::with_options(GraphOptions::multi());
    graph.add_nodes_from(nodes.iter().copied()).unwrap();
    graph
}

fn directed(graph: &mut KeyedGraph, source: &str, target: &str) -> String {
    graph
        .add_directed_edge(source, target, Attributes::new())
        .unwrap()
}

fn undirected(graph: &mut KeyedGraph, source: &str, target: &str) -> String {
    graph
        .add_undirected_edge(source, target, Attributes::new())
        .unwrap()
}

/// Check the degree identities for every node.
fn assert_degree_identities(graph: &KeyedGraph) {
    let keys: Vec<String> = graph.nodes().map(|(key, _)| key.to_string()).collect();
    for key in &keys {
        for self_loops in [true, false] {
            let in_degree = graph.in_degree_with(key, self_loops).unwrap();
            let out_degree = graph.out_degree_with(key, self_loops).unwrap();
            let directed = graph.directed_degree_with(key, self_loops).unwrap();
            let undirected = graph.undirected_degree_with(key, self_loops).unwrap();
            let total = graph.degree_with(key, self_loops).unwrap();
            assert_eq!(directed, in_degree + out_degree, "directed degree of {}", key);
            assert_eq!(total, directed + undirected, "degree of {}", key);
        }
    }
}

// ==================== Degree ====================

#[test]
fn test_degree_of_missing_node() {
    let graph = KeyedGraph::new();
    for result in [
        graph.in_degree("Test"),
        graph.out_degree("Test"),
        graph.directed_degree("Test"),
        graph.undirected_degree("Test"),
        graph.degree("Test"),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }
}

#[test]
fn test_self_loop_flag_must_be_boolean() {
    assert!(args::self_loop_flag(None).unwrap());
    assert!(!args::self_loop_flag(Some(&json!(false))).unwrap());
    let err = args::self_loop_flag(Some(&json!("test"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_in_degree() {
    let mut graph = graph_with(&["Helen", "Sue", "William", "John"]);
    directed(&mut graph, "Helen", "Sue");
    directed(&mut graph, "William", "Sue");
    assert_eq!(graph.in_degree("Sue").unwrap(), 2);

    directed(&mut graph, "Sue", "Sue");
    assert_eq!(graph.in_degree("Sue").unwrap(), 3);
    assert_eq!(graph.in_degree_with("Sue", false).unwrap(), 2);
}

#[test]
fn test_out_degree() {
    let mut graph = graph_with(&["Helen", "Sue", "William", "John"]);
    directed(&mut graph, "Helen", "Sue");
    directed(&mut graph, "Helen", "William");
    assert_eq!(graph.out_degree("Helen").unwrap(), 2);

    directed(&mut graph, "Helen", "Helen");
    assert_eq!(graph.out_degree("Helen").unwrap(), 3);
    assert_eq!(graph.out_degree_with("Helen", false).unwrap(), 2);
}

#[test]
fn test_directed_degree() {
    let mut graph = graph_with(&["Helen", "Sue", "William", "John", "Martha"]);
    directed(&mut graph, "Helen", "Sue");
    directed(&mut graph, "Helen", "William");
    directed(&mut graph, "Martha", "Helen");
    undirected(&mut graph, "Helen", "John");

    assert_eq!(graph.directed_degree("Helen").unwrap(), 3);
    assert_eq!(
        graph.directed_degree("Helen").unwrap(),
        graph.in_degree("Helen").unwrap() + graph.out_degree("Helen").unwrap()
    );

    // A directed self-loop adds one in and one out.
    directed(&mut graph, "Helen", "Helen");
    assert_eq!(graph.directed_degree("Helen").unwrap(), 5);
    assert_eq!(graph.directed_degree_with("Helen", false).unwrap(), 3);
}

#[test]
fn test_undirected_degree() {
    let mut graph = graph_with(&["Helen", "Sue", "William", "John"]);
    directed(&mut graph, "Helen", "Sue");
    directed(&mut graph, "Helen", "William");
    undirected(&mut graph, "Helen", "John");
    assert_eq!(graph.undirected_degree("Helen").unwrap(), 1);
    assert_eq!(graph.undirected_degree("John").unwrap(), 1);

    // An undirected self-loop counts twice.
    undirected(&mut graph, "Helen", "Helen");
    assert_eq!(graph.undirected_degree("Helen").unwrap(), 3);
    assert_eq!(graph.undirected_degree_with("Helen", false).unwrap(), 1);
}

#[test]
fn test_degree() {
    let mut graph = graph_with(&["Helen", "Sue", "William", "John", "Martha"]);
    directed(&mut graph, "Helen", "Sue");
    directed(&mut graph, "Helen", "William");
    directed(&mut graph, "Martha", "Helen");
    undirected(&mut graph, "Helen", "John");

    assert_eq!(graph.degree("Helen").unwrap(), 4);
    assert_eq!(
        graph.degree("Helen").unwrap(),
        graph.directed_degree("Helen").unwrap() + graph.undirected_degree("Helen").unwrap()
    );

    undirected(&mut graph, "Helen", "Helen");
    assert_eq!(graph.degree("Helen").unwrap(), 6);
    assert_eq!(graph.degree_with("Helen", false).unwrap(), 4);
}

#[test]
fn test_degree_tracks_edge_removal() {
    let mut graph = graph_with(&["a", "b"]);
    let parallel = directed(&mut graph, "a", "b");
    directed(&mut graph, "a", "b");
    let self_loop = directed(&mut graph, "a", "a");
    let undirected_loop = undirected(&mut graph, "b", "b");

    assert_eq!(graph.out_degree("a").unwrap(), 3);
    assert_eq!(graph.in_degree("b").unwrap(), 2);
    assert_eq!(graph.undirected_degree("b").unwrap(), 2);

    graph.drop_edge(&parallel).unwrap();
    graph.drop_edge(&self_loop).unwrap();
    graph.drop_edge(&undirected_loop).unwrap();

    assert_eq!(graph.out_degree("a").unwrap(), 1);
    assert_eq!(graph.in_degree("a").unwrap(), 0);
    assert_eq!(graph.in_degree("b").unwrap(), 1);
    assert_eq!(graph.undirected_degree("b").unwrap(), 0);
    assert_eq!(graph.self_loop_count(), 0);
    assert!(graph.drop_edge(&parallel).unwrap_err().is_not_found());
}

#[test]
fn test_degree_identities_on_random_graph() {
    let mut rng = rand::thread_rng();
    let keys: Vec<String> = (0..30).map(|i| format!("n{}", i)).collect();
    let mut graph = KeyedGraph::with_options(GraphOptions::multi());
    graph.add_nodes_from(keys.iter().cloned()).unwrap();

    let mut edges = Vec::new();
    for _ in 0..200 {
        let source = &keys[rng.gen_range(0..keys.len())];
        let target = &keys[rng.gen_range(0..keys.len())];
        let edge = if rng.gen_bool(0.5) {
            directed(&mut graph, source, target)
        } else {
            undirected(&mut graph, source, target)
        };
        edges.push(edge);
    }
    assert_degree_identities(&graph);

    // Sum of degrees is twice the edge count.
    let total: usize = keys.iter().map(|k| graph.degree(k).unwrap()).sum();
    assert_eq!(total, 2 * graph.size());

    for edge in edges.iter().step_by(3) {
        graph.drop_edge(edge).unwrap();
    }
    graph.drop_node("n0").unwrap();
    assert_degree_identities(&graph);

    let total: usize = graph
        .nodes()
        .map(|(k, _)| graph.degree(k).unwrap())
        .sum();
    assert_eq!(total, 2 * graph.size());
}

// ==================== Neighbor iteration ====================

#[test]
fn test_neighbors_per_mode() {
    let mut graph = graph_with(&["a", "b", "c", "d"]);
    directed(&mut graph, "a", "b");
    directed(&mut graph, "c", "a");
    undirected(&mut graph, "a", "d");

    assert_eq!(graph.neighbors("a", TraversalMode::Outbound).unwrap(), vec!["b"]);
    assert_eq!(graph.neighbors("a", TraversalMode::Inbound).unwrap(), vec!["c"]);
    assert_eq!(
        graph.neighbors("a", TraversalMode::Directed).unwrap(),
        vec!["b", "c"]
    );
    assert_eq!(
        graph.neighbors("a", TraversalMode::Undirected).unwrap(),
        vec!["d"]
    );
    assert_eq!(
        graph.neighbors("a", TraversalMode::All).unwrap(),
        vec!["b", "c", "d"]
    );
    assert_eq!(
        graph.neighbors("d", TraversalMode::Undirected).unwrap(),
        vec!["a"]
    );
}

#[test]
fn test_neighbors_once_per_edge() {
    let mut graph = graph_with(&["a", "b", "c"]);
    directed(&mut graph, "a", "b");
    directed(&mut graph, "a", "c");
    directed(&mut graph, "a", "b");

    // Grouped by neighbor, neighbors in order of first connection.
    assert_eq!(
        graph.neighbors("a", TraversalMode::Outbound).unwrap(),
        vec!["b", "b", "c"]
    );
}

#[test]
fn test_self_loop_neighbors_follow_degree_rule() {
    let mut graph = graph_with(&["a", "b"]);
    directed(&mut graph, "a", "a");
    undirected(&mut graph, "b", "b");

    assert_eq!(graph.neighbors("a", TraversalMode::Outbound).unwrap(), vec!["a"]);
    assert_eq!(graph.neighbors("a", TraversalMode::Inbound).unwrap(), vec!["a"]);
    assert_eq!(
        graph.neighbors("a", TraversalMode::Directed).unwrap(),
        vec!["a", "a"]
    );
    assert_eq!(
        graph.neighbors("b", TraversalMode::Undirected).unwrap(),
        vec!["b", "b"]
    );

    for key in ["a", "b"] {
        assert_eq!(
            graph.neighbors(key, TraversalMode::All).unwrap().len(),
            graph.degree(key).unwrap()
        );
    }
}

#[test]
fn test_neighbor_callback_receives_attributes() {
    let mut graph = KeyedGraph::new();
    graph.add_node("a", Attributes::new()).unwrap();
    let mut attributes = Attributes::new();
    attributes.insert("label".to_string(), json!("B"));
    graph.add_node("b", attributes).unwrap();
    directed(&mut graph, "a", "b");

    let mut labels = Vec::new();
    graph
        .for_each_out_neighbor("a", |_, attributes| labels.push(attributes["label"].clone()))
        .unwrap();
    assert_eq!(labels, vec![json!("B")]);
}

#[test]
fn test_neighbors_of_missing_node() {
    let graph = KeyedGraph::new();
    for mode in [
        TraversalMode::Outbound,
        TraversalMode::Inbound,
        TraversalMode::Directed,
        TraversalMode::Undirected,
        TraversalMode::All,
    ] {
        let err = graph.for_each_neighbor_in(mode, "x", |_, _| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let mut graph = graph_with(&["a", "b", "c"]);
    directed(&mut graph, "a", "b");
    undirected(&mut graph, "b", "c");
    let graph = std::sync::Arc::new(graph);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = std::sync::Arc::clone(&graph);
            std::thread::spawn(move || graph.degree("b").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
