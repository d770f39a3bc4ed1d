//! In-memory graph operations: the core data structure and its traversal.

pub mod builder;
pub mod keyed_graph;
pub mod neighbors;
mod read;
pub mod traversal;

pub use builder::GraphBuilder;
pub use keyed_graph::KeyedGraph;
pub use neighbors::{Traversable, TraversalMode};
pub use traversal::{
    dfs, dfs_from_node, traverse, try_dfs, try_dfs_from_node, try_traverse, DfsOptions,
    TraversalRecord, Walk,
};
