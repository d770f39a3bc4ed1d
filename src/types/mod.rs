//! All data types for the keyed-graph library.

pub mod args;
pub mod edge;
pub mod error;
pub mod node;
pub mod options;

pub use edge::{EdgeData, EdgeRef};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use node::{Adjacency, NodeData};
pub use options::{GraphOptions, GraphType};

/// Attribute mapping carried by nodes and edges.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Prefix of engine-generated edge keys.
pub const GENERATED_EDGE_PREFIX: &str = "_e";
