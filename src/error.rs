//! Error types for ordgraph
//!
//! The ADT surface is deliberately total: deleting a missing node or adding
//! an edge toward a non-member destination are documented no-ops, not errors.
//! Errors are reserved for precondition violations that cannot be expressed
//! as a sensible no-op, such as running a single-source algorithm from a
//! start node that is not a member of the graph.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node not found: {name}")]
    NodeNotFound { name: String },
}

impl GraphError {
    /// Create an error for a node that is not a member of the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        GraphError::NodeNotFound { name: name.into() }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_message() {
        let err = GraphError::node_not_found("q");
        assert_eq!(err.to_string(), "node not found: q");
    }
}
