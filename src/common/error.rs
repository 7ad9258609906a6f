use thiserror::Error;

use crate::graph::store::{GraphKind, VertexId};

/// Main graphkit error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("edge {from} -> {to} not found in graph")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("operation requires a {expected} graph, got {actual}")]
    KindMismatch {
        expected: GraphKind,
        actual: GraphKind,
    },

    #[error("cycle detected")]
    CycleDetected,
}

impl GraphError {
    pub fn vertex_not_found(vertex: VertexId) -> Self {
        GraphError::VertexNotFound(vertex)
    }

    pub fn edge_not_found(from: VertexId, to: VertexId) -> Self {
        GraphError::EdgeNotFound { from, to }
    }

    pub fn negative_weight(from: VertexId, to: VertexId, weight: f64) -> Self {
        GraphError::NegativeWeight { from, to, weight }
    }

    pub fn kind_mismatch(expected: GraphKind, actual: GraphKind) -> Self {
        GraphError::KindMismatch { expected, actual }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. }
        )
    }

    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GraphError::NegativeWeight { .. } | GraphError::KindMismatch { .. }
        )
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = GraphError::vertex_not_found(VertexId(7));
        assert!(err.is_not_found());
        assert!(!err.is_precondition());

        let err = GraphError::kind_mismatch(GraphKind::Directed, GraphKind::Undirected);
        assert!(err.is_precondition());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = GraphError::edge_not_found(VertexId(1), VertexId(2));
        assert_eq!(err.to_string(), "edge 1 -> 2 not found in graph");

        let err = GraphError::kind_mismatch(GraphKind::Directed, GraphKind::Undirected);
        assert_eq!(
            err.to_string(),
            "operation requires a directed graph, got undirected"
        );
    }
}
