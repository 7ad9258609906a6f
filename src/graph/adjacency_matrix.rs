// AdjacencyMatrixGraph - dense graph representation
// O(1) edge mutation and query, O(V^2) space

use std::collections::HashMap;

use crate::common::error::{GraphError, Result};
use super::store::{Edge, GraphKind, GraphStore, VertexId};

/// Graph backed by a weight matrix over registered vertices.
///
/// The matrix grows by one row and column per registered vertex. Absent
/// edges are `None`, so a zero-weight edge is representable. Unlike the
/// adjacency list, re-adding an existing edge overwrites its weight and
/// neighbor order follows vertex registration order rather than edge
/// insertion order; both orders are still fixed for a fixed insertion
/// sequence.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    kind: GraphKind,
    index: HashMap<VertexId, usize>,
    /// Vertices in registration order; position is the matrix index
    order: Vec<VertexId>,
    matrix: Vec<Vec<Option<f64>>>,
}

impl AdjacencyMatrixGraph {
    pub fn new(kind: GraphKind) -> Self {
        AdjacencyMatrixGraph {
            kind,
            index: HashMap::new(),
            order: Vec::new(),
            matrix: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    fn register(&mut self, vertex: VertexId) -> usize {
        if let Some(&position) = self.index.get(&vertex) {
            return position;
        }
        let position = self.order.len();
        self.index.insert(vertex, position);
        self.order.push(vertex);
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; position + 1]);
        position
    }

    fn cell(&self, from: VertexId, to: VertexId) -> Option<f64> {
        let row = *self.index.get(&from)?;
        let col = *self.index.get(&to)?;
        self.matrix[row][col]
    }
}

impl GraphStore for AdjacencyMatrixGraph {
    fn kind(&self) -> GraphKind {
        self.kind
    }

    fn add_vertex(&mut self, vertex: VertexId) {
        self.register(vertex);
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
        let row = self.register(from);
        let col = self.register(to);
        self.matrix[row][col] = Some(weight);
        if self.kind == GraphKind::Undirected {
            self.matrix[col][row] = Some(weight);
        }
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let (row, col) = match (self.index.get(&from), self.index.get(&to)) {
            (Some(&row), Some(&col)) if self.matrix[row][col].is_some() => (row, col),
            _ => return Err(GraphError::edge_not_found(from, to)),
        };
        self.matrix[row][col] = None;
        if self.kind == GraphKind::Undirected {
            self.matrix[col][row] = None;
        }
        Ok(())
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.cell(from, to).is_some()
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.cell(from, to)
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<(VertexId, f64)>> {
        let row = *self
            .index
            .get(&vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
        Ok(self.matrix[row]
            .iter()
            .enumerate()
            .filter_map(|(col, weight)| weight.map(|w| (self.order[col], w)))
            .collect())
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.order.clone()
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (row, weights) in self.matrix.iter().enumerate() {
            for (col, weight) in weights.iter().enumerate() {
                let Some(weight) = *weight else { continue };
                // Report each undirected cell pair once
                if self.kind == GraphKind::Directed || row <= col {
                    edges.push(Edge::new(self.order[row], self.order[col], weight));
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
