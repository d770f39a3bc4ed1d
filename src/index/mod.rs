//! Auxiliary index structures used by the traversal algorithms.

pub mod dfs_stack;

pub use dfs_stack::DfsStack;
