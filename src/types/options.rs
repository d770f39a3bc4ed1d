//! Graph configuration.

use serde::{Deserialize, Serialize};

/// Which edge kinds a graph accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    /// Directed and undirected edges side by side.
    #[default]
    Mixed,
    /// Directed edges only.
    Directed,
    /// Undirected edges only.
    Undirected,
}

impl GraphType {
    /// Return a human-readable name for this graph type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a graph type from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mixed" => Some(Self::Mixed),
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }

    /// Whether edges of the given directedness may be added.
    pub fn accepts(&self, directed: bool) -> bool {
        match self {
            Self::Mixed => true,
            Self::Directed => directed,
            Self::Undirected => !directed,
        }
    }
}

impl std::fmt::Display for GraphType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options fixed at graph construction.
///
/// Deserializes from e.g. `{"type": "directed", "multi": true}`; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Accepted edge kinds.
    #[serde(rename = "type")]
    pub graph_type: GraphType,
    /// Allow parallel edges between the same pair of nodes.
    pub multi: bool,
    /// Allow edges whose source and target are the same node.
    pub allow_self_loops: bool,
}

impl GraphOptions {
    /// Options for a mixed multigraph.
    pub fn multi() -> Self {
        Self {
            multi: true,
            ..Self::default()
        }
    }

    /// Set the graph type.
    pub fn graph_type(mut self, graph_type: GraphType) -> Self {
        self.graph_type = graph_type;
        self
    }

    /// Set whether self-loops are allowed.
    pub fn allow_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            graph_type: GraphType::Mixed,
            multi: false,
            allow_self_loops: true,
        }
    }
}
