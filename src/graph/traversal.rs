//! Depth-first traversal.
//!
//! The walk is iterative: an explicit [`DfsStack`] replaces the call stack,
//! so graph depth is not limited by thread stack size. A node's neighbors
//! are pushed in iteration order and popped in reverse, which means the
//! most recently discovered branch is explored first. This is not the
//! left-to-right preorder of a recursive DFS: for `a -> b`, `a -> c`,
//! `b -> d` the visit order is `a, c, b, d`.
//!
//! Every node is visited at most once per call, across all trees of the
//! forest, because stack membership outlives popping.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::index::DfsStack;
use crate::types::{Attributes, GraphError, GraphResult};

pub use super::neighbors::{Traversable, TraversalMode};

/// What the visitor asks the traversal to do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Walk {
    /// Descend into the node's neighbors.
    #[default]
    Continue,
    /// Treat the node as a leaf; its neighbors are not enumerated.
    Prune,
}

/// `true` prunes, `false` continues.
impl From<bool> for Walk {
    fn from(prune: bool) -> Self {
        if prune {
            Self::Prune
        } else {
            Self::Continue
        }
    }
}

impl From<()> for Walk {
    fn from(_: ()) -> Self {
        Self::Continue
    }
}

/// Traversal options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DfsOptions {
    /// Which neighbors to follow. Defaults to outbound.
    pub mode: TraversalMode,
}

impl DfsOptions {
    /// Options with the given mode.
    pub fn with_mode(mode: TraversalMode) -> Self {
        Self { mode }
    }
}

/// A pending visit on the traversal stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalRecord<'g> {
    /// Node key.
    pub node: &'g str,
    /// Node attributes.
    pub attributes: &'g Attributes,
    /// Distance from the root of the current tree.
    pub depth: usize,
}

impl<'g> TraversalRecord<'g> {
    /// Create a record.
    pub fn new(node: &'g str, attributes: &'g Attributes, depth: usize) -> Self {
        Self {
            node,
            attributes,
            depth,
        }
    }
}

/// Visit every node of the graph, starting a new tree at each node not yet
/// reached, in the graph's node enumeration order.
///
/// The visitor receives `(node, attributes, depth)` and returns `()`, a
/// `bool` (`true` prunes), or a [`Walk`].
pub fn dfs<'g, G, F, R>(graph: &'g G, visit: F, options: &DfsOptions) -> GraphResult<()>
where
    G: Traversable + ?Sized,
    F: FnMut(&'g str, &'g Attributes, usize) -> R,
    R: Into<Walk>,
{
    traverse(graph, None, visit, options)
}

/// Visit the nodes reachable from `start`. The start node is identified by
/// its string form, so any `Display` key works.
///
/// Fails with `NodeNotFound` before any visit if `start` is not in the graph.
pub fn dfs_from_node<'g, G, N, F, R>(
    graph: &'g G,
    start: N,
    visit: F,
    options: &DfsOptions,
) -> GraphResult<()>
where
    G: Traversable + ?Sized,
    N: fmt::Display,
    F: FnMut(&'g str, &'g Attributes, usize) -> R,
    R: Into<Walk>,
{
    let start = start.to_string();
    traverse(graph, Some(&start), visit, options)
}

/// Whole-graph traversal when `start` is `None`, single-tree otherwise.
pub fn traverse<'g, G, F, R>(
    graph: &'g G,
    start: Option<&str>,
    mut visit: F,
    options: &DfsOptions,
) -> GraphResult<()>
where
    G: Traversable + ?Sized,
    F: FnMut(&'g str, &'g Attributes, usize) -> R,
    R: Into<Walk>,
{
    try_traverse(
        graph,
        start,
        |node, attributes, depth| Ok::<R, GraphError>(visit(node, attributes, depth)),
        options,
    )
}

/// [`dfs`] with a fallible visitor. The first visitor error aborts the
/// traversal and is returned as-is.
pub fn try_dfs<'g, G, F, R, E>(graph: &'g G, visit: F, options: &DfsOptions) -> Result<(), E>
where
    G: Traversable + ?Sized,
    F: FnMut(&'g str, &'g Attributes, usize) -> Result<R, E>,
    R: Into<Walk>,
    E: From<GraphError>,
{
    try_traverse(graph, None, visit, options)
}

/// [`dfs_from_node`] with a fallible visitor.
pub fn try_dfs_from_node<'g, G, N, F, R, E>(
    graph: &'g G,
    start: N,
    visit: F,
    options: &DfsOptions,
) -> Result<(), E>
where
    G: Traversable + ?Sized,
    N: fmt::Display,
    F: FnMut(&'g str, &'g Attributes, usize) -> Result<R, E>,
    R: Into<Walk>,
    E: From<GraphError>,
{
    let start = start.to_string();
    try_traverse(graph, Some(&start), visit, options)
}

/// [`traverse`] with a fallible visitor.
pub fn try_traverse<'g, G, F, R, E>(
    graph: &'g G,
    start: Option<&str>,
    mut visit: F,
    options: &DfsOptions,
) -> Result<(), E>
where
    G: Traversable + ?Sized,
    F: FnMut(&'g str, &'g Attributes, usize) -> Result<R, E>,
    R: Into<Walk>,
    E: From<GraphError>,
{
    let order = graph.order();
    if order == 0 {
        return Ok(());
    }

    let mode = options.mode;
    let mut stack: DfsStack<&'g str, TraversalRecord<'g>> = DfsStack::with_capacity(order);
    debug!("dfs over {} nodes, mode {}, start {:?}", order, mode, start);

    match start {
        None => graph.try_for_each_node(|node, attributes| {
            walk_tree(graph, mode, &mut stack, node, attributes, &mut visit)
        })?,
        Some(start) => {
            let (node, attributes) = graph.node_entry(start)?;
            walk_tree(graph, mode, &mut stack, node, attributes, &mut visit)?;
        }
    }

    debug!("dfs done, {} nodes visited", stack.seen_count());
    Ok(())
}

/// Drain one tree rooted at `root`. A root already seen by an earlier tree
/// is skipped.
fn walk_tree<'g, G, F, R, E>(
    graph: &'g G,
    mode: TraversalMode,
    stack: &mut DfsStack<&'g str, TraversalRecord<'g>>,
    root: &'g str,
    attributes: &'g Attributes,
    visit: &mut F,
) -> Result<(), E>
where
    G: Traversable + ?Sized,
    F: FnMut(&'g str, &'g Attributes, usize) -> Result<R, E>,
    R: Into<Walk>,
    E: From<GraphError>,
{
    if !stack.push_with(root, TraversalRecord::new(root, attributes, 0)) {
        return Ok(());
    }

    while let Some(record) = stack.pop() {
        trace!("visit {} at depth {}", record.node, record.depth);
        let walk: Walk = visit(record.node, record.attributes, record.depth)?.into();
        if walk == Walk::Prune {
            continue;
        }

        let depth = record.depth + 1;
        graph.for_each_neighbor_in(mode, record.node, |neighbor, attributes| {
            stack.push_with(neighbor, TraversalRecord::new(neighbor, attributes, depth));
        })?;
    }

    Ok(())
}
