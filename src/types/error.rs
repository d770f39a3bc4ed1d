//! Error types for the keyed-graph library.

use thiserror::Error;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument shape or type given to a query.
    InvalidArgument,
    /// Reference to a node or edge that is not in the graph.
    NotFound,
    /// The operation is not allowed by the graph's configuration or state.
    Usage,
}

/// All errors that can occur in the keyed-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Wrong argument count or type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Node not found by key.
    #[error("Node \"{0}\" not found")]
    NodeNotFound(String),

    /// Edge not found by key.
    #[error("Edge \"{0}\" not found")]
    EdgeNotFound(String),

    /// The node exists but is not an extremity of the edge.
    #[error("Node \"{node}\" is not attached to edge \"{edge}\"")]
    NodeNotAttached { node: String, edge: String },

    /// A node with this key already exists.
    #[error("Node \"{0}\" already exists")]
    NodeAlreadyExists(String),

    /// An edge with this key already exists.
    #[error("Edge \"{0}\" already exists")]
    EdgeAlreadyExists(String),

    /// Simple graph already holds an edge of this kind between the pair.
    #[error("Edge between \"{from}\" and \"{to}\" already exists (graph is not multi)")]
    DuplicateEdge { from: String, to: String },

    /// Self-loops disabled by the graph options.
    #[error("Self-loops are not allowed (node \"{0}\")")]
    SelfLoopNotAllowed(String),

    /// Edge kind does not match the graph type.
    #[error("Cannot add {edge_kind} edge to {graph_type} graph")]
    WrongGraphType {
        edge_kind: &'static str,
        graph_type: &'static str,
    },
}

impl GraphError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NodeNotFound(_) | Self::EdgeNotFound(_) | Self::NodeNotAttached { .. } => {
                ErrorKind::NotFound
            }
            Self::NodeAlreadyExists(_)
            | Self::EdgeAlreadyExists(_)
            | Self::DuplicateEdge { .. }
            | Self::SelfLoopNotAllowed(_)
            | Self::WrongGraphType { .. } => ErrorKind::Usage,
        }
    }

    /// Whether this is a NotFound-kind error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
