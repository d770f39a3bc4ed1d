//! Read-side queries: existence, lookup, extremities, degrees.
//!
//! Every method here takes `&self` and never mutates, so a `KeyedGraph`
//! shared behind `&` (or an `Arc`) may be queried from several threads.

use crate::types::{Attributes, EdgeData, EdgeRef, GraphError, GraphResult, NodeData};

use super::KeyedGraph;

impl KeyedGraph {
    /// Whether a node with this key exists.
    pub fn has_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Get a node record.
    pub fn node(&self, key: &str) -> GraphResult<&NodeData> {
        self.nodes
            .get(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))
    }

    /// Get an edge record.
    pub fn edge(&self, key: &str) -> GraphResult<&EdgeData> {
        self.edges
            .get(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))
    }

    /// Attributes of a node.
    pub fn node_attributes(&self, key: &str) -> GraphResult<&Attributes> {
        Ok(&self.node(key)?.attributes)
    }

    /// Attributes of an edge.
    pub fn edge_attributes(&self, key: &str) -> GraphResult<&Attributes> {
        Ok(&self.edge(key)?.attributes)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Attributes)> + '_ {
        self.nodes
            .iter()
            .map(|(key, node)| (key.as_str(), &node.attributes))
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &EdgeData)> + '_ {
        self.edges.iter().map(|(key, edge)| (key.as_str(), edge))
    }

    /// First directed edge from `source` to `target`, by insertion order.
    pub fn get_directed_edge(&self, source: &str, target: &str) -> Option<&str> {
        self.nodes
            .get(source)?
            .outbound
            .get(target)?
            .first()
            .map(String::as_str)
    }

    /// First undirected edge between `u` and `v`, by insertion order.
    /// Symmetric in its arguments.
    pub fn get_undirected_edge(&self, u: &str, v: &str) -> Option<&str> {
        self.nodes
            .get(u)?
            .undirected
            .get(v)?
            .first()
            .map(String::as_str)
    }

    /// First edge from `u` to `v`, preferring a directed edge over an
    /// undirected one.
    pub fn get_edge(&self, u: &str, v: &str) -> Option<&str> {
        self.get_directed_edge(u, v)
            .or_else(|| self.get_undirected_edge(u, v))
    }

    /// Whether the key names a directed edge, or a directed edge joins the pair.
    pub fn has_directed_edge<'a>(&self, edge: impl Into<EdgeRef<'a>>) -> bool {
        match edge.into() {
            EdgeRef::Key(key) => self.edges.get(key).is_some_and(|e| e.directed),
            EdgeRef::Between(source, target) => self.get_directed_edge(source, target).is_some(),
        }
    }

    /// Whether the key names an undirected edge, or an undirected edge joins the pair.
    pub fn has_undirected_edge<'a>(&self, edge: impl Into<EdgeRef<'a>>) -> bool {
        match edge.into() {
            EdgeRef::Key(key) => self.edges.get(key).is_some_and(|e| !e.directed),
            EdgeRef::Between(u, v) => self.get_undirected_edge(u, v).is_some(),
        }
    }

    /// Whether the key names an edge, or any edge joins the pair.
    pub fn has_edge<'a>(&self, edge: impl Into<EdgeRef<'a>>) -> bool {
        match edge.into() {
            EdgeRef::Key(key) => self.edges.contains_key(key),
            EdgeRef::Between(u, v) => self.get_edge(u, v).is_some(),
        }
    }

    /// Source of an edge.
    pub fn source(&self, edge: &str) -> GraphResult<&str> {
        Ok(self.edge(edge)?.source.as_str())
    }

    /// Target of an edge.
    pub fn target(&self, edge: &str) -> GraphResult<&str> {
        Ok(self.edge(edge)?.target.as_str())
    }

    /// `(source, target)` as given at creation, also for undirected edges.
    pub fn extremities(&self, edge: &str) -> GraphResult<(&str, &str)> {
        let data = self.edge(edge)?;
        Ok((data.source.as_str(), data.target.as_str()))
    }

    /// The extremity of `edge` that is not `node`; `node` itself for a self-loop.
    pub fn related_node(&self, node: &str, edge: &str) -> GraphResult<&str> {
        self.node(node)?;
        self.edge(edge)?
            .opposite(node)
            .ok_or_else(|| GraphError::NodeNotAttached {
                node: node.to_string(),
                edge: edge.to_string(),
            })
    }

    /// Whether the edge is directed.
    pub fn is_directed(&self, edge: &str) -> GraphResult<bool> {
        Ok(self.edge(edge)?.directed)
    }

    /// Whether the edge is undirected.
    pub fn is_undirected(&self, edge: &str) -> GraphResult<bool> {
        Ok(!self.edge(edge)?.directed)
    }

    /// Whether the edge is a self-loop.
    pub fn is_self_loop(&self, edge: &str) -> GraphResult<bool> {
        Ok(self.edge(edge)?.is_self_loop())
    }

    // ==================== Degrees ====================
    //
    // Self-loops are counted unless the `_with` variant is called with
    // `false`. A directed self-loop adds one to both in- and out-degree, an
    // undirected one adds two to the undirected degree.

    /// Number of directed edges pointing at `node`.
    pub fn in_degree(&self, node: &str) -> GraphResult<usize> {
        self.in_degree_with(node, true)
    }

    /// [`in_degree`](Self::in_degree) with explicit self-loop counting.
    pub fn in_degree_with(&self, node: &str, self_loops: bool) -> GraphResult<usize> {
        Ok(self.node(node)?.in_degree(self_loops))
    }

    /// Number of directed edges leaving `node`.
    pub fn out_degree(&self, node: &str) -> GraphResult<usize> {
        self.out_degree_with(node, true)
    }

    /// [`out_degree`](Self::out_degree) with explicit self-loop counting.
    pub fn out_degree_with(&self, node: &str, self_loops: bool) -> GraphResult<usize> {
        Ok(self.node(node)?.out_degree(self_loops))
    }

    /// In-degree plus out-degree.
    pub fn directed_degree(&self, node: &str) -> GraphResult<usize> {
        self.directed_degree_with(node, true)
    }

    /// [`directed_degree`](Self::directed_degree) with explicit self-loop counting.
    pub fn directed_degree_with(&self, node: &str, self_loops: bool) -> GraphResult<usize> {
        let data = self.node(node)?;
        Ok(data.in_degree(self_loops) + data.out_degree(self_loops))
    }

    /// Number of undirected edges incident on `node`.
    pub fn undirected_degree(&self, node: &str) -> GraphResult<usize> {
        self.undirected_degree_with(node, true)
    }

    /// [`undirected_degree`](Self::undirected_degree) with explicit self-loop counting.
    pub fn undirected_degree_with(&self, node: &str, self_loops: bool) -> GraphResult<usize> {
        Ok(self.node(node)?.undirected_degree(self_loops))
    }

    /// Directed degree plus undirected degree.
    pub fn degree(&self, node: &str) -> GraphResult<usize> {
        self.degree_with(node, true)
    }

    /// [`degree`](Self::degree) with explicit self-loop counting.
    pub fn degree_with(&self, node: &str, self_loops: bool) -> GraphResult<usize> {
        let data = self.node(node)?;
        Ok(data.in_degree(self_loops)
            + data.out_degree(self_loops)
            + data.undirected_degree(self_loops))
    }
}
