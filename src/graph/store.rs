// GraphStore - capability interface over interchangeable graph representations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::Result;

/// Edge weight used when a caller does not specify one (unweighted semantics)
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Opaque vertex identifier, unique within a graph
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        VertexId(raw)
    }
}

/// Graph kind, fixed at store construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// Edges are stored once, from source to target
    Directed,
    /// Edges are stored as two mirrored adjacency entries of equal weight
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// A weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

/// A path through the graph from source to target inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Vertices in order, source first, target last
    pub vertices: Vec<VertexId>,
    /// Total distance: edge count for unweighted paths, weight sum otherwise
    pub distance: f64,
}

impl Path {
    /// Zero-length path consisting of a single vertex
    pub fn single(vertex: VertexId) -> Self {
        Path {
            vertices: vec![vertex],
            distance: 0.0,
        }
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// Capability interface shared by all graph representations.
///
/// Algorithms accept `&dyn GraphStore` and never inspect the concrete
/// representation; callers pick adjacency list or adjacency matrix based on
/// density and space tradeoffs.
///
/// Adjacency order is edge-insertion order and vertex iteration order is
/// first-registration order, so results of the algorithms layered on top are
/// exactly reproducible for a fixed insertion sequence.
pub trait GraphStore {
    /// The store's graph kind
    fn kind(&self) -> GraphKind;

    /// Register a vertex; a no-op if already present. Read-only queries
    /// never register vertices implicitly.
    fn add_vertex(&mut self, vertex: VertexId);

    /// Whether the vertex has been registered
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Insert an edge, registering both endpoints as needed. Undirected
    /// stores insert the mirrored entry with the same weight.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64);

    /// Insert an edge with [`DEFAULT_EDGE_WEIGHT`]
    fn add_unweighted_edge(&mut self, from: VertexId, to: VertexId) {
        self.add_edge(from, to, DEFAULT_EDGE_WEIGHT);
    }

    /// Remove an edge (both directions for undirected stores). Fails with
    /// `EdgeNotFound` when no matching edge exists.
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()>;

    /// Whether an edge from `from` to `to` exists
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Weight of the edge from `from` to `to`, if present
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64>;

    /// Neighbors of `vertex` with edge weights, in insertion order. Fails
    /// with `VertexNotFound` for an unregistered vertex.
    fn neighbors(&self, vertex: VertexId) -> Result<Vec<(VertexId, f64)>>;

    /// All registered vertices in registration order
    fn vertices(&self) -> Vec<VertexId>;

    /// All edges; each undirected edge is reported once
    fn edges(&self) -> Vec<Edge>;

    /// Number of registered vertices
    fn vertex_count(&self) -> usize;

    /// Number of edges, counting each undirected edge once
    fn edge_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessors() {
        let path = Path {
            vertices: vec![VertexId(0), VertexId(3), VertexId(4)],
            distance: 2.0,
        };
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.source(), Some(VertexId(0)));
        assert_eq!(path.target(), Some(VertexId(4)));

        let single = Path::single(VertexId(9));
        assert_eq!(single.len(), 0);
        assert!(single.is_empty());
        assert_eq!(single.distance, 0.0);
    }

    #[test]
    fn test_vertex_display() {
        assert_eq!(VertexId(42).to_string(), "42");
        assert_eq!(GraphKind::Undirected.to_string(), "undirected");
    }

    #[test]
    fn test_path_serialization() {
        let path = Path {
            vertices: vec![VertexId(1), VertexId(2)],
            distance: 1.0,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let edge = Edge::new(VertexId(1), VertexId(2), 1.5);
        let json = serde_json::to_string(&edge).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
}
