//! Neighbor iteration and the `Traversable` capability set.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Adjacency, Attributes, GraphError, GraphResult};

use super::KeyedGraph;

/// Which incidence relation defines "neighbor".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Targets of directed edges leaving the node.
    #[default]
    Outbound,
    /// Sources of directed edges pointing at the node.
    Inbound,
    /// Outbound then inbound.
    Directed,
    /// Other extremities of undirected edges.
    Undirected,
    /// Directed then undirected.
    All,
}

impl TraversalMode {
    /// Return the mode's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outbound => "outbound",
            Self::Inbound => "inbound",
            Self::Directed => "directed",
            Self::Undirected => "undirected",
            Self::All => "all",
        }
    }

    /// Parse a mode from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "outbound" | "out" => Some(Self::Outbound),
            "inbound" | "in" => Some(Self::Inbound),
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl FromStr for TraversalMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| GraphError::InvalidArgument(format!("unknown traversal mode \"{s}\"")))
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a traversal needs from a graph: its order, node enumeration, and
/// one neighbor-iteration entry point per [`TraversalMode`].
///
/// Neighbor callbacks fire once per incident edge, so parallel edges report
/// the same neighbor several times. Self-loops follow the degree rule: a
/// directed self-loop is reported once by `outbound` and `inbound` and twice
/// by `directed`, an undirected self-loop twice by `undirected`.
pub trait Traversable {
    /// Number of nodes.
    fn order(&self) -> usize;

    /// The stored key and attributes of a node.
    fn node_entry(&self, node: &str) -> GraphResult<(&str, &Attributes)>;

    /// Call `f` for every node in enumeration order, stopping at the first error.
    fn try_for_each_node<'g, E, F>(&'g self, f: F) -> Result<(), E>
    where
        F: FnMut(&'g str, &'g Attributes) -> Result<(), E>;

    /// Outbound neighbors.
    fn for_each_out_neighbor<'g, F>(&'g self, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes);

    /// Inbound neighbors.
    fn for_each_in_neighbor<'g, F>(&'g self, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes);

    /// Outbound then inbound neighbors.
    fn for_each_directed_neighbor<'g, F>(&'g self, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes);

    /// Undirected neighbors.
    fn for_each_undirected_neighbor<'g, F>(&'g self, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes);

    /// Directed then undirected neighbors.
    fn for_each_neighbor<'g, F>(&'g self, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes);

    /// Call `f` for every node in enumeration order.
    fn for_each_node<'g, F>(&'g self, mut f: F)
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let _ = self.try_for_each_node(|node, attributes| {
            f(node, attributes);
            Ok::<(), Infallible>(())
        });
    }

    /// Neighbor iteration for a mode chosen at runtime.
    fn for_each_neighbor_in<'g, F>(&'g self, mode: TraversalMode, node: &str, f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        match mode {
            TraversalMode::Outbound => self.for_each_out_neighbor(node, f),
            TraversalMode::Inbound => self.for_each_in_neighbor(node, f),
            TraversalMode::Directed => self.for_each_directed_neighbor(node, f),
            TraversalMode::Undirected => self.for_each_undirected_neighbor(node, f),
            TraversalMode::All => self.for_each_neighbor(node, f),
        }
    }
}

impl KeyedGraph {
    /// Report every neighbor in `adjacency` once per edge. With
    /// `double_loops`, edges back to `node` are reported twice.
    fn report_neighbors<'g, F>(&'g self, node: &str, adjacency: &'g Adjacency, double_loops: bool, f: &mut F)
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        for (neighbor, edges) in adjacency {
            let Some(data) = self.nodes.get(neighbor) else {
                continue;
            };
            let times = if double_loops && neighbor.as_str() == node { 2 } else { 1 };
            for _ in 0..edges.len() * times {
                f(neighbor.as_str(), &data.attributes);
            }
        }
    }

    /// Collect the neighbor keys of `node` in the given mode, one entry per
    /// reported neighbor.
    pub fn neighbors(&self, node: &str, mode: TraversalMode) -> GraphResult<Vec<&str>> {
        let mut out = Vec::new();
        self.for_each_neighbor_in(mode, node, |neighbor, _| out.push(neighbor))?;
        Ok(out)
    }
}

impl Traversable for KeyedGraph {
    fn order(&self) -> usize {
        self.nodes.len()
    }

    fn node_entry(&self, node: &str) -> GraphResult<(&str, &Attributes)> {
        self.nodes
            .get_key_value(node)
            .map(|(key, data)| (key.as_str(), &data.attributes))
            .ok_or_else(|| GraphError::NodeNotFound(node.to_string()))
    }

    fn try_for_each_node<'g, E, F>(&'g self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&'g str, &'g Attributes) -> Result<(), E>,
    {
        for (key, data) in &self.nodes {
            f(key.as_str(), &data.attributes)?;
        }
        Ok(())
    }

    fn for_each_out_neighbor<'g, F>(&'g self, node: &str, mut f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let data = self.node(node)?;
        self.report_neighbors(node, &data.outbound, false, &mut f);
        Ok(())
    }

    fn for_each_in_neighbor<'g, F>(&'g self, node: &str, mut f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let data = self.node(node)?;
        self.report_neighbors(node, &data.inbound, false, &mut f);
        Ok(())
    }

    fn for_each_directed_neighbor<'g, F>(&'g self, node: &str, mut f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let data = self.node(node)?;
        self.report_neighbors(node, &data.outbound, false, &mut f);
        self.report_neighbors(node, &data.inbound, false, &mut f);
        Ok(())
    }

    fn for_each_undirected_neighbor<'g, F>(&'g self, node: &str, mut f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let data = self.node(node)?;
        self.report_neighbors(node, &data.undirected, true, &mut f);
        Ok(())
    }

    fn for_each_neighbor<'g, F>(&'g self, node: &str, mut f: F) -> GraphResult<()>
    where
        F: FnMut(&'g str, &'g Attributes),
    {
        let data = self.node(node)?;
        self.report_neighbors(node, &data.outbound, false, &mut f);
        self.report_neighbors(node, &data.inbound, false, &mut f);
        self.report_neighbors(node, &data.undirected, true, &mut f);
        Ok(())
    }
}
