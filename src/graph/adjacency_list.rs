// AdjacencyListGraph - sparse graph representation
// O(degree) edge mutation and query, O(V + E) space

use std::collections::HashMap;

use crate::common::error::{GraphError, Result};
use super::store::{Edge, GraphKind, GraphStore, VertexId};

/// Graph backed by per-vertex adjacency vectors.
///
/// The default choice for sparse graphs. Adjacency vectors preserve edge
/// insertion order, which fixes the tie-break order of every algorithm
/// running on top.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    kind: GraphKind,
    /// Vertices in registration order
    order: Vec<VertexId>,
    adjacency: HashMap<VertexId, Vec<(VertexId, f64)>>,
}

impl AdjacencyListGraph {
    pub fn new(kind: GraphKind) -> Self {
        AdjacencyListGraph {
            kind,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    fn register(&mut self, vertex: VertexId) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex, Vec::new());
            self.order.push(vertex);
        }
    }
}

impl GraphStore for AdjacencyListGraph {
    fn kind(&self) -> GraphKind {
        self.kind
    }

    fn add_vertex(&mut self, vertex: VertexId) {
        self.register(vertex);
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.register(from);
        self.register(to);

        self.adjacency
            .get_mut(&from)
            .expect("registered above")
            .push((to, weight));

        // Undirected self-loops keep a single adjacency entry
        if self.kind == GraphKind::Undirected && from != to {
            self.adjacency
                .get_mut(&to)
                .expect("registered above")
                .push((from, weight));
        }
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let removed = match self.adjacency.get_mut(&from) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|(neighbor, _)| *neighbor != to);
                before != entries.len()
            }
            None => false,
        };

        if !removed {
            return Err(GraphError::edge_not_found(from, to));
        }

        if self.kind == GraphKind::Undirected && from != to {
            if let Some(entries) = self.adjacency.get_mut(&to) {
                entries.retain(|(neighbor, _)| *neighbor != from);
            }
        }

        Ok(())
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|entries| entries.iter().any(|(neighbor, _)| *neighbor == to))
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.adjacency.get(&from)?.iter().find_map(|(neighbor, weight)| {
            (*neighbor == to).then_some(*weight)
        })
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<(VertexId, f64)>> {
        self.adjacency
            .get(&vertex)
            .cloned()
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.order.clone()
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for &from in &self.order {
            for &(to, weight) in &self.adjacency[&from] {
                // Report each undirected pair once
                if self.kind == GraphKind::Directed || from <= to {
                    edges.push(Edge::new(from, to, weight));
                }
            }
        }
        edges
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
