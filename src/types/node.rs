//! Node records: attributes, adjacency, and degree counters.

use indexmap::IndexMap;

use super::Attributes;

/// Neighbor key -> keys of the edges leading to it, in insertion order.
///
/// Neighbors are ordered by first connection; removing the last edge to a
/// neighbor preserves the order of the others.
pub type Adjacency = IndexMap<String, Vec<String>>;

/// A stored node.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    /// Node attributes.
    pub attributes: Attributes,
    pub(crate) outbound: Adjacency,
    pub(crate) inbound: Adjacency,
    pub(crate) undirected: Adjacency,
    in_degree: usize,
    out_degree: usize,
    undirected_degree: usize,
    directed_self_loops: usize,
    undirected_self_loops: usize,
}

impl NodeData {
    /// Create a node with the given attributes and no edges.
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Directed edges pointing at this node.
    pub fn in_degree(&self, self_loops: bool) -> usize {
        if self_loops {
            self.in_degree
        } else {
            self.in_degree - self.directed_self_loops
        }
    }

    /// Directed edges leaving this node.
    pub fn out_degree(&self, self_loops: bool) -> usize {
        if self_loops {
            self.out_degree
        } else {
            self.out_degree - self.directed_self_loops
        }
    }

    /// Undirected edges incident on this node; a self-loop counts twice.
    pub fn undirected_degree(&self, self_loops: bool) -> usize {
        if self_loops {
            self.undirected_degree
        } else {
            self.undirected_degree - 2 * self.undirected_self_loops
        }
    }

    /// Number of self-loops (directed and undirected) on this node.
    pub fn self_loops(&self) -> usize {
        self.directed_self_loops + self.undirected_self_loops
    }

    pub(crate) fn add_out(&mut self, target: &str, edge: &str) {
        link(&mut self.outbound, target, edge);
        self.out_degree += 1;
    }

    pub(crate) fn add_in(&mut self, source: &str, edge: &str) {
        link(&mut self.inbound, source, edge);
        self.in_degree += 1;
    }

    /// Record an undirected edge to `neighbor`. A self-loop is stored once
    /// but counted twice.
    pub(crate) fn add_undirected(&mut self, neighbor: &str, edge: &str, self_loop: bool) {
        link(&mut self.undirected, neighbor, edge);
        if self_loop {
            self.undirected_degree += 2;
            self.undirected_self_loops += 1;
        } else {
            self.undirected_degree += 1;
        }
    }

    pub(crate) fn add_directed_self_loop(&mut self) {
        self.directed_self_loops += 1;
    }

    pub(crate) fn remove_out(&mut self, target: &str, edge: &str) {
        if unlink(&mut self.outbound, target, edge) {
            self.out_degree -= 1;
        }
    }

    pub(crate) fn remove_in(&mut self, source: &str, edge: &str) {
        if unlink(&mut self.inbound, source, edge) {
            self.in_degree -= 1;
        }
    }

    pub(crate) fn remove_undirected(&mut self, neighbor: &str, edge: &str, self_loop: bool) {
        if unlink(&mut self.undirected, neighbor, edge) {
            if self_loop {
                self.undirected_degree -= 2;
                self.undirected_self_loops -= 1;
            } else {
                self.undirected_degree -= 1;
            }
        }
    }

    pub(crate) fn remove_directed_self_loop(&mut self) {
        self.directed_self_loops -= 1;
    }

    /// Keys of every edge incident on the node stored under `key`, each
    /// listed once.
    pub(crate) fn incident_edges(&self, key: &str) -> Vec<String> {
        let inbound = self
            .inbound
            .iter()
            .filter(|(source, _)| source.as_str() != key);
        self.outbound
            .iter()
            .chain(self.undirected.iter())
            .chain(inbound)
            .flat_map(|(_, keys)| keys.iter().cloned())
            .collect()
    }
}

fn link(adjacency: &mut Adjacency, neighbor: &str, edge: &str) {
    adjacency
        .entry(neighbor.to_string())
        .or_default()
        .push(edge.to_string());
}

fn unlink(adjacency: &mut Adjacency, neighbor: &str, edge: &str) -> bool {
    let Some(keys) = adjacency.get_mut(neighbor) else {
        return false;
    };
    let Some(pos) = keys.iter().position(|k| k == edge) else {
        return false;
    };
    keys.remove(pos);
    if keys.is_empty() {
        adjacency.shift_remove(neighbor);
    }
    true
}
