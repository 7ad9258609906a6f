// CycleDetector - directed and undirected cycle predicates

use std::collections::{HashMap, HashSet};

use crate::common::error::{GraphError, Result};
use crate::graph::store::{GraphKind, GraphStore, VertexId};

/// Vertex state for the directed-cycle walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet reached
    White,
    /// On the active exploration path
    Gray,
    /// Fully explored
    Black,
}

/// Cycle predicates over a [`GraphStore`].
///
/// Both detectors cover every component by restarting from each unvisited
/// vertex, and both return a boolean only; reporting the cycle's vertex
/// sequence is left as an extension point.
pub struct CycleDetector;

impl CycleDetector {
    /// Whether an undirected graph contains a cycle.
    ///
    /// Depth-first walk with parent tracking: a visited neighbor other than
    /// the immediate parent is a back edge. Requires an undirected store.
    pub fn has_cycle_undirected(graph: &dyn GraphStore) -> Result<bool> {
        if graph.kind() != GraphKind::Undirected {
            return Err(GraphError::kind_mismatch(GraphKind::Undirected, graph.kind()));
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut stack: Vec<(VertexId, Option<VertexId>)> = Vec::new();

        for root in graph.vertices() {
            if visited.contains(&root) {
                continue;
            }
            stack.push((root, None));

            while let Some((vertex, parent)) = stack.pop() {
                if !visited.insert(vertex) {
                    continue;
                }
                for (neighbor, _) in graph.neighbors(vertex)? {
                    if !visited.contains(&neighbor) {
                        stack.push((neighbor, Some(vertex)));
                    } else if Some(neighbor) != parent {
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }

    /// Whether a directed graph contains a cycle.
    ///
    /// Three-state coloring over an explicit frame stack: reaching a vertex
    /// that is still on the active path is a back edge. A vertex turns
    /// [`Color::Black`] only after all its neighbors are explored. Requires
    /// a directed store.
    pub fn has_cycle_directed(graph: &dyn GraphStore) -> Result<bool> {
        if graph.kind() != GraphKind::Directed {
            return Err(GraphError::kind_mismatch(GraphKind::Directed, graph.kind()));
        }

        let mut colors: HashMap<VertexId, Color> = HashMap::new();
        let mut frames: Vec<(VertexId, std::vec::IntoIter<(VertexId, f64)>)> = Vec::new();

        for root in graph.vertices() {
            if colors.get(&root).copied().unwrap_or(Color::White) != Color::White {
                continue;
            }
            colors.insert(root, Color::Gray);
            frames.push((root, graph.neighbors(root)?.into_iter()));

            while let Some((vertex, neighbors)) = frames.last_mut() {
                match neighbors.next() {
                    Some((neighbor, _)) => {
                        match colors.get(&neighbor).copied().unwrap_or(Color::White) {
                            Color::White => {
                                colors.insert(neighbor, Color::Gray);
                                frames.push((neighbor, graph.neighbors(neighbor)?.into_iter()));
                            }
                            Color::Gray => return Ok(true),
                            Color::Black => {}
                        }
                    }
                    None => {
                        colors.insert(*vertex, Color::Black);
                        frames.pop();
                    }
                }
            }
        }

        Ok(false)
    }
}
