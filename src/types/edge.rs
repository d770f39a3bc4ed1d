//! Edge records and edge references.

use serde::Serialize;
use serde_json::Value;

use super::{args, Attributes};
use crate::types::error::{GraphError, GraphResult};

/// A stored edge. Extremities are kept in creation order, even for undirected edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeData {
    /// Source node key.
    pub source: String,
    /// Target node key.
    pub target: String,
    /// Whether the edge is directed.
    pub directed: bool,
    /// Edge attributes.
    pub attributes: Attributes,
}

impl EdgeData {
    /// Create a new edge record.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        directed: bool,
        attributes: Attributes,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            directed,
            attributes,
        }
    }

    /// Whether source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The extremity opposite to `node`, or `None` if `node` is not attached.
    pub fn opposite(&self, node: &str) -> Option<&str> {
        if self.source == node {
            Some(self.target.as_str())
        } else if self.target == node {
            Some(self.source.as_str())
        } else {
            None
        }
    }

    /// Human-readable kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        if self.directed {
            "directed"
        } else {
            "undirected"
        }
    }
}

/// How an edge is referred to in an existence query: by its own key, or by
/// the pair of nodes it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRef<'a> {
    /// An edge key.
    Key(&'a str),
    /// A source/target node pair.
    Between(&'a str, &'a str),
}

impl<'a> EdgeRef<'a> {
    /// Decode an untyped argument list.
    ///
    /// One string argument is an edge key, two are a node pair. Any other
    /// count, or a non-string argument, is an `InvalidArgument` error.
    pub fn from_args(values: &'a [Value]) -> GraphResult<Self> {
        match values {
            [key] => Ok(Self::Key(args::key(key)?)),
            [source, target] => Ok(Self::Between(args::key(source)?, args::key(target)?)),
            _ => Err(GraphError::InvalidArgument(format!(
                "expected an edge key or a source and a target, got {} arguments",
                values.len()
            ))),
        }
    }
}

impl<'a> From<&'a str> for EdgeRef<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a String> for EdgeRef<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(key.as_str())
    }
}

impl<'a> From<(&'a str, &'a str)> for EdgeRef<'a> {
    fn from((source, target): (&'a str, &'a str)) -> Self {
        Self::Between(source, target)
    }
}
