//! Fluent API for building KeyedGraph instances.

use crate::types::{Attributes, EdgeData, GraphOptions, GraphResult, GraphType};

use super::KeyedGraph;

/// Fluent builder for constructing a KeyedGraph.
///
/// Nodes and edges are recorded as given and validated all at once by
/// [`build`](Self::build), in the order they were added.
pub struct GraphBuilder {
    options: GraphOptions,
    nodes: Vec<(String, Attributes)>,
    edges: Vec<(Option<String>, EdgeData)>,
}

impl GraphBuilder {
    /// Create a new builder for a mixed, simple graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create a new builder with specific options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add an attribute-less node.
    pub fn node(&mut self, key: impl Into<String>) -> &mut Self {
        self.node_with(key, Attributes::new())
    }

    /// Add a node with attributes.
    pub fn node_with(&mut self, key: impl Into<String>, attributes: Attributes) -> &mut Self {
        self.nodes.push((key.into(), attributes));
        self
    }

    /// Add several attribute-less nodes.
    pub fn nodes<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.node(key);
        }
        self
    }

    /// Add an edge of the graph's default kind.
    pub fn edge(&mut self, source: &str, target: &str) -> &mut Self {
        let directed = self.options.graph_type != GraphType::Undirected;
        self.push_edge(None, source, target, directed)
    }

    /// Add a directed edge.
    pub fn directed(&mut self, source: &str, target: &str) -> &mut Self {
        self.push_edge(None, source, target, true)
    }

    /// Add a keyed directed edge.
    pub fn directed_with_key(&mut self, key: &str, source: &str, target: &str) -> &mut Self {
        self.push_edge(Some(key.to_string()), source, target, true)
    }

    /// Add an undirected edge.
    pub fn undirected(&mut self, source: &str, target: &str) -> &mut Self {
        self.push_edge(None, source, target, false)
    }

    /// Add a keyed undirected edge.
    pub fn undirected_with_key(&mut self, key: &str, source: &str, target: &str) -> &mut Self {
        self.push_edge(Some(key.to_string()), source, target, false)
    }

    fn push_edge(
        &mut self,
        key: Option<String>,
        source: &str,
        target: &str,
        directed: bool,
    ) -> &mut Self {
        self.edges
            .push((key, EdgeData::new(source, target, directed, Attributes::new())));
        self
    }

    /// Build the final KeyedGraph.
    pub fn build(&mut self) -> GraphResult<KeyedGraph> {
        KeyedGraph::from_parts(
            self.options,
            std::mem::take(&mut self.nodes),
            std::mem::take(&mut self.edges),
        )
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
