//! keyed-graph — an in-memory graph of string-keyed nodes and edges.
//!
//! Directed and undirected edges live side by side, optionally with
//! parallel edges and self-loops. The graph answers existence, lookup, and
//! degree queries in constant time, and [`graph::traversal`] walks it depth
//! first without recursion.
//!
//! ```
//! use keyed_graph::{dfs, Attributes, DfsOptions, KeyedGraph};
//!
//! let mut graph = KeyedGraph::new();
//! graph.add_nodes_from(["a", "b", "c"]).unwrap();
//! graph.add_directed_edge("a", "b", Attributes::new()).unwrap();
//! graph.add_directed_edge("b", "c", Attributes::new()).unwrap();
//!
//! let mut visited = Vec::new();
//! dfs(&graph, |node, _, depth| visited.push((node, depth)), &DfsOptions::default()).unwrap();
//! assert_eq!(visited, vec![("a", 0), ("b", 1), ("c", 2)]);
//! ```

pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    dfs, dfs_from_node, traverse, try_dfs, try_dfs_from_node, try_traverse, DfsOptions,
    GraphBuilder, KeyedGraph, Traversable, TraversalMode, TraversalRecord, Walk,
};
pub use index::DfsStack;
pub use types::{
    Attributes, EdgeData, EdgeRef, ErrorKind, GraphError, GraphOptions, GraphResult, GraphType,
    NodeData,
};
