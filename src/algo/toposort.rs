// TopologicalSorter - Kahn's algorithm and DFS post-order for DAGs

use std::collections::{HashMap, HashSet, VecDeque};

use crate::common::error::{GraphError, Result};
use crate::graph::store::{GraphKind, GraphStore, VertexId};

/// Topological orderings of a directed graph.
///
/// Both variants require a directed store and order vertices so that every
/// edge `u -> v` places `u` before `v`.
pub struct TopologicalSorter;

impl TopologicalSorter {
    /// Kahn's algorithm: repeatedly emit a zero-in-degree vertex and
    /// decrement its neighbors.
    ///
    /// A cyclic graph leaves vertices with non-zero in-degree and yields
    /// `Err(CycleDetected)`; an empty graph yields a valid empty order.
    pub fn kahn(graph: &dyn GraphStore) -> Result<Vec<VertexId>> {
        Self::require_directed(graph)?;

        let vertices = graph.vertices();
        let mut in_degree: HashMap<VertexId, usize> =
            vertices.iter().map(|&vertex| (vertex, 0)).collect();
        for edge in graph.edges() {
            *in_degree.get_mut(&edge.to).expect("endpoints are registered") += 1;
        }

        let mut queue: VecDeque<VertexId> = vertices
            .iter()
            .copied()
            .filter(|vertex| in_degree[vertex] == 0)
            .collect();
        let mut order = Vec::with_capacity(vertices.len());

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for (neighbor, _) in graph.neighbors(vertex)? {
                let degree = in_degree.get_mut(&neighbor).expect("endpoints are registered");
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(neighbor);
                }
            }
        }

        if order.len() != vertices.len() {
            tracing::debug!(
                "kahn ordering incomplete: {} of {} vertices processed",
                order.len(),
                vertices.len()
            );
            return Err(GraphError::CycleDetected);
        }

        Ok(order)
    }

    /// DFS post-order pushed onto a stack, then reversed.
    ///
    /// Assumes the input is acyclic: given a cycle this silently produces an
    /// invalid order, so callers must check with
    /// [`CycleDetector::has_cycle_directed`](crate::algo::cycle::CycleDetector)
    /// first.
    pub fn dfs(graph: &dyn GraphStore) -> Result<Vec<VertexId>> {
        Self::require_directed(graph)?;

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut post_order = Vec::new();
        let mut frames: Vec<(VertexId, std::vec::IntoIter<(VertexId, f64)>)> = Vec::new();

        for root in graph.vertices() {
            if visited.contains(&root) {
                continue;
            }
            visited.insert(root);
            frames.push((root, graph.neighbors(root)?.into_iter()));

            while let Some((vertex, neighbors)) = frames.last_mut() {
                match neighbors.next() {
                    Some((neighbor, _)) => {
                        if visited.insert(neighbor) {
                            frames.push((neighbor, graph.neighbors(neighbor)?.into_iter()));
                        }
                    }
                    None => {
                        post_order.push(*vertex);
                        frames.pop();
                    }
                }
            }
        }

        post_order.reverse();
        Ok(post_order)
    }

    fn require_directed(graph: &dyn GraphStore) -> Result<()> {
        if graph.kind() != GraphKind::Directed {
            return Err(GraphError::kind_mismatch(GraphKind::Directed, graph.kind()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency_list::AdjacencyListGraph;
    use crate::graph::adjacency_matrix::AdjacencyMatrixGraph;
    use crate::graph::store::Edge;

    fn v(raw: u64) -> VertexId {
        VertexId(raw)
    }

    /// Directed diamond with a tail: 0->1, 0->2, 1->3, 2->3, 3->4
    fn dag() -> AdjacencyListGraph {
        let mut graph = AdjacencyListGraph::directed();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_unweighted_edge(v(from), v(to));
        }
        graph
    }

    fn assert_respects_edges(order: &[VertexId], edges: &[Edge]) {
        let position: HashMap<VertexId, usize> = order
            .iter()
            .enumerate()
            .map(|(index, &vertex)| (vertex, index))
            .collect();
        for edge in edges {
            assert!(
                position[&edge.from] < position[&edge.to],
                "{} must precede {}",
                edge.from,
                edge.to
            );
        }
    }

    #[test]
    fn test_kahn_on_dag() {
        let graph = dag();
        let order = TopologicalSorter::kahn(&graph).unwrap();

        assert_eq!(order.len(), graph.vertex_count());
        assert_respects_edges(&order, &graph.edges());
    }

    #[test]
    fn test_kahn_detects_cycle() {
        let mut graph = dag();
        graph.add_unweighted_edge(v(4), v(0));

        assert_eq!(TopologicalSorter::kahn(&graph).unwrap_err(), GraphError::CycleDetected);
    }

    #[test]
    fn test_kahn_detects_cycle_under_relabeling() {
        for offset in [0, 10, 100] {
            let mut graph = AdjacencyListGraph::directed();
            for (from, to) in [(2, 1), (1, 0), (0, 2)] {
                graph.add_unweighted_edge(v(from + offset), v(to + offset));
            }
            assert_eq!(
                TopologicalSorter::kahn(&graph).unwrap_err(),
                GraphError::CycleDetected
            );
        }
    }

    #[test]
    fn test_empty_graph_has_empty_order() {
        let graph = AdjacencyListGraph::directed();
        assert_eq!(TopologicalSorter::kahn(&graph).unwrap(), Vec::<VertexId>::new());
        assert_eq!(TopologicalSorter::dfs(&graph).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn test_dfs_order_respects_edges() {
        let graph = dag();
        let order = TopologicalSorter::dfs(&graph).unwrap();

        assert_eq!(order.len(), graph.vertex_count());
        assert_respects_edges(&order, &graph.edges());
    }

    #[test]
    fn test_dfs_covers_disconnected_vertices() {
        let mut graph = dag();
        graph.add_unweighted_edge(v(7), v(8));

        let order = TopologicalSorter::dfs(&graph).unwrap();
        assert_eq!(order.len(), 7);
        assert_respects_edges(&order, &graph.edges());
    }

    #[test]
    fn test_undirected_store_is_rejected() {
        let graph = AdjacencyListGraph::undirected();
        for result in [TopologicalSorter::kahn(&graph), TopologicalSorter::dfs(&graph)] {
            assert_eq!(
                result.unwrap_err(),
                GraphError::kind_mismatch(GraphKind::Directed, GraphKind::Undirected)
            );
        }
    }

    #[test]
    fn test_kahn_on_matrix_representation() {
        let mut graph = AdjacencyMatrixGraph::directed();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_unweighted_edge(v(from), v(to));
        }

        let order = TopologicalSorter::kahn(&graph).unwrap();
        assert_respects_edges(&order, &graph.edges());
    }
}
