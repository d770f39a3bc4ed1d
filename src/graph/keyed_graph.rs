//! Core graph structure: keyed nodes and edges with adjacency indexes.

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::types::{
    Attributes, EdgeData, GraphError, GraphOptions, GraphResult, GraphType, NodeData,
    GENERATED_EDGE_PREFIX,
};

/// An in-memory graph of string-keyed nodes and edges.
///
/// Nodes and edges are kept in insertion order; removal preserves the
/// relative order of what remains. Degree counters live on each node and
/// are updated on every edge insertion and removal.
#[derive(Debug, Clone, Default)]
pub struct KeyedGraph {
    options: GraphOptions,
    /// All nodes, by key.
    pub(crate) nodes: IndexMap<String, NodeData>,
    /// All edges, by key.
    pub(crate) edges: IndexMap<String, EdgeData>,
    directed_size: usize,
    undirected_size: usize,
    self_loops: usize,
    next_edge_id: u64,
}

impl KeyedGraph {
    /// Create a new empty mixed, simple graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create a new empty graph with the given options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            directed_size: 0,
            undirected_size: 0,
            self_loops: 0,
            next_edge_id: 0,
        }
    }

    /// Create from pre-existing data (used by the builder).
    ///
    /// Edges are `(key, record)` pairs; a `None` key gets a generated one.
    pub fn from_parts(
        options: GraphOptions,
        nodes: Vec<(String, Attributes)>,
        edges: Vec<(Option<String>, EdgeData)>,
    ) -> GraphResult<Self> {
        let mut graph = Self::with_options(options);
        graph.nodes.reserve(nodes.len());
        graph.edges.reserve(edges.len());
        for (key, attributes) in nodes {
            graph.add_node(key, attributes)?;
        }
        for (key, edge) in edges {
            graph.insert_edge(key, edge)?;
        }
        Ok(graph)
    }

    /// The options this graph was created with.
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Whether parallel edges are allowed.
    pub fn is_multi(&self) -> bool {
        self.options.multi
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges.
    pub fn directed_size(&self) -> usize {
        self.directed_size
    }

    /// Number of undirected edges.
    pub fn undirected_size(&self) -> usize {
        self.undirected_size
    }

    /// Number of self-loops, directed and undirected.
    pub fn self_loop_count(&self) -> usize {
        self.self_loops
    }

    /// Add a node. Fails if the key is taken.
    pub fn add_node(&mut self, key: impl Into<String>, attributes: Attributes) -> GraphResult<()> {
        let key = key.into();
        if self.nodes.contains_key(&key) {
            return Err(GraphError::NodeAlreadyExists(key));
        }
        self.nodes.insert(key, NodeData::new(attributes));
        Ok(())
    }

    /// Add several attribute-less nodes.
    pub fn add_nodes_from<I, S>(&mut self, keys: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.add_node(key, Attributes::new())?;
        }
        Ok(())
    }

    /// Merge attributes into an existing node, overwriting same-named entries.
    pub fn merge_node_attributes(&mut self, key: &str, attributes: Attributes) -> GraphResult<()> {
        let node = self.node_mut(key)?;
        node.attributes.extend(attributes);
        Ok(())
    }

    /// Set one node attribute, returning the previous value.
    pub fn set_node_attribute(
        &mut self,
        key: &str,
        name: impl Into<String>,
        value: Value,
    ) -> GraphResult<Option<Value>> {
        Ok(self.node_mut(key)?.attributes.insert(name.into(), value))
    }

    /// Set one edge attribute, returning the previous value.
    pub fn set_edge_attribute(
        &mut self,
        key: &str,
        name: impl Into<String>,
        value: Value,
    ) -> GraphResult<Option<Value>> {
        let edge = self
            .edges
            .get_mut(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))?;
        Ok(edge.attributes.insert(name.into(), value))
    }

    /// Add an edge of the graph's default kind: undirected in an undirected
    /// graph, directed otherwise. Returns the generated key.
    pub fn add_edge(&mut self, source: &str, target: &str, attributes: Attributes) -> GraphResult<String> {
        let directed = self.options.graph_type != GraphType::Undirected;
        self.insert_edge(None, EdgeData::new(source, target, directed, attributes))
    }

    /// Add an edge of the graph's default kind under a caller-supplied key.
    pub fn add_edge_with_key(
        &mut self,
        key: impl Into<String>,
        source: &str,
        target: &str,
        attributes: Attributes,
    ) -> GraphResult<String> {
        let directed = self.options.graph_type != GraphType::Undirected;
        self.insert_edge(Some(key.into()), EdgeData::new(source, target, directed, attributes))
    }

    /// Add a directed edge. Returns the generated key.
    pub fn add_directed_edge(
        &mut self,
        source: &str,
        target: &str,
        attributes: Attributes,
    ) -> GraphResult<String> {
        self.insert_edge(None, EdgeData::new(source, target, true, attributes))
    }

    /// Add a directed edge under a caller-supplied key.
    pub fn add_directed_edge_with_key(
        &mut self,
        key: impl Into<String>,
        source: &str,
        target: &str,
        attributes: Attributes,
    ) -> GraphResult<String> {
        self.insert_edge(Some(key.into()), EdgeData::new(source, target, true, attributes))
    }

    /// Add an undirected edge. Returns the generated key.
    pub fn add_undirected_edge(
        &mut self,
        source: &str,
        target: &str,
        attributes: Attributes,
    ) -> GraphResult<String> {
        self.insert_edge(None, EdgeData::new(source, target, false, attributes))
    }

    /// Add an undirected edge under a caller-supplied key.
    pub fn add_undirected_edge_with_key(
        &mut self,
        key: impl Into<String>,
        source: &str,
        target: &str,
        attributes: Attributes,
    ) -> GraphResult<String> {
        self.insert_edge(Some(key.into()), EdgeData::new(source, target, false, attributes))
    }

    /// Validate and store an edge, then update both extremities.
    pub(crate) fn insert_edge(&mut self, key: Option<String>, edge: EdgeData) -> GraphResult<String> {
        if !self.options.graph_type.accepts(edge.directed) {
            return Err(GraphError::WrongGraphType {
                edge_kind: edge.kind_name(),
                graph_type: self.options.graph_type.name(),
            });
        }
        if let Some(key) = &key {
            if self.edges.contains_key(key) {
                return Err(GraphError::EdgeAlreadyExists(key.clone()));
            }
        }
        let source = self.node(&edge.source)?;
        if !self.nodes.contains_key(&edge.target) {
            return Err(GraphError::NodeNotFound(edge.target.clone()));
        }
        let self_loop = edge.is_self_loop();
        if self_loop && !self.options.allow_self_loops {
            return Err(GraphError::SelfLoopNotAllowed(edge.source.clone()));
        }
        if !self.options.multi {
            let adjacency = if edge.directed {
                &source.outbound
            } else {
                &source.undirected
            };
            if adjacency.contains_key(&edge.target) {
                return Err(GraphError::DuplicateEdge {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
        }

        let key = match key {
            Some(key) => key,
            None => self.generate_edge_key(),
        };

        if edge.directed {
            self.node_mut(&edge.source)?.add_out(&edge.target, &key);
            let target = self.node_mut(&edge.target)?;
            target.add_in(&edge.source, &key);
            if self_loop {
                target.add_directed_self_loop();
            }
            self.directed_size += 1;
        } else {
            self.node_mut(&edge.source)?
                .add_undirected(&edge.target, &key, self_loop);
            if !self_loop {
                self.node_mut(&edge.target)?
                    .add_undirected(&edge.source, &key, false);
            }
            self.undirected_size += 1;
        }
        if self_loop {
            self.self_loops += 1;
        }

        debug!(
            "added {} edge {} ({} -> {})",
            edge.kind_name(),
            key,
            edge.source,
            edge.target
        );
        self.edges.insert(key.clone(), edge);
        Ok(key)
    }

    /// Remove an edge and return its record.
    pub fn drop_edge(&mut self, key: &str) -> GraphResult<EdgeData> {
        let edge = self
            .edges
            .shift_remove(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.to_string()))?;
        let self_loop = edge.is_self_loop();

        if edge.directed {
            if let Some(source) = self.nodes.get_mut(&edge.source) {
                source.remove_out(&edge.target, key);
            }
            if let Some(target) = self.nodes.get_mut(&edge.target) {
                target.remove_in(&edge.source, key);
                if self_loop {
                    target.remove_directed_self_loop();
                }
            }
            self.directed_size -= 1;
        } else {
            if let Some(source) = self.nodes.get_mut(&edge.source) {
                source.remove_undirected(&edge.target, key, self_loop);
            }
            if !self_loop {
                if let Some(target) = self.nodes.get_mut(&edge.target) {
                    target.remove_undirected(&edge.source, key, false);
                }
            }
            self.undirected_size -= 1;
        }
        if self_loop {
            self.self_loops -= 1;
        }

        debug!("dropped edge {}", key);
        Ok(edge)
    }

    /// Remove a node and every edge attached to it.
    pub fn drop_node(&mut self, key: &str) -> GraphResult<NodeData> {
        let incident = self.node(key)?.incident_edges(key);
        let cascaded = incident.len();
        for edge in incident {
            self.drop_edge(&edge)?;
        }
        let node = self
            .nodes
            .shift_remove(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))?;
        debug!("dropped node {} and {} incident edges", key, cascaded);
        Ok(node)
    }

    /// Remove every edge, keeping the nodes.
    pub fn clear_edges(&mut self) {
        let keys: Vec<String> = self.edges.keys().cloned().collect();
        for key in keys {
            // Keys come from the map itself.
            let _ = self.drop_edge(&key);
        }
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.directed_size = 0;
        self.undirected_size = 0;
        self.self_loops = 0;
    }

    fn generate_edge_key(&mut self) -> String {
        loop {
            let key = format!("{}{}", GENERATED_EDGE_PREFIX, self.next_edge_id);
            self.next_edge_id += 1;
            if !self.edges.contains_key(&key) {
                return key;
            }
        }
    }

    fn node_mut(&mut self, key: &str) -> GraphResult<&mut NodeData> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))
    }
}
