// ComponentFinder - connected components under undirected adjacency

use std::collections::{HashMap, HashSet};

use crate::graph::store::{GraphStore, VertexId};

/// Partitions the vertex set into connected components.
///
/// Connectivity is always taken over undirected adjacency: edges are
/// symmetrized before the walk. Applied to a directed store this computes
/// *weakly*-connected components, not strongly-connected ones.
pub struct ComponentFinder;

impl ComponentFinder {
    /// All components, each a vector of mutually reachable vertices.
    ///
    /// Components are emitted in vertex-registration order, as are the
    /// vertices within each component's walk, so the output is reproducible
    /// for a fixed insertion sequence.
    pub fn components(graph: &dyn GraphStore) -> Vec<Vec<VertexId>> {
        let mut adjacency: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for edge in graph.edges() {
            adjacency.entry(edge.from).or_default().push(edge.to);
            if edge.from != edge.to {
                adjacency.entry(edge.to).or_default().push(edge.from);
            }
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut components = Vec::new();

        for root in graph.vertices() {
            if visited.contains(&root) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![root];
            visited.insert(root);

            while let Some(vertex) = stack.pop() {
                component.push(vertex);
                if let Some(neighbors) = adjacency.get(&vertex) {
                    for &neighbor in neighbors {
                        if visited.insert(neighbor) {
                            stack.push(neighbor);
                        }
                    }
                }
            }

            components.push(component);
        }

        components
    }

    /// Number of connected components
    pub fn count(graph: &dyn GraphStore) -> usize {
        Self::components(graph).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency_list::AdjacencyListGraph;
    use crate::graph::store::GraphStore;

    fn v(raw: u64) -> VertexId {
        VertexId(raw)
    }

    #[test]
    fn test_single_component() {
        let mut graph = AdjacencyListGraph::undirected();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_unweighted_edge(v(from), v(to));
        }
        assert_eq!(ComponentFinder::count(&graph), 1);
    }

    #[test]
    fn test_components_form_a_partition() {
        let mut graph = AdjacencyListGraph::undirected();
        graph.add_unweighted_edge(v(0), v(1));
        graph.add_unweighted_edge(v(1), v(2));
        graph.add_unweighted_edge(v(5), v(6));
        graph.add_vertex(v(9));

        let components = ComponentFinder::components(&graph);
        assert_eq!(components.len(), 3);

        // Union covers the vertex set, components are pairwise disjoint
        let mut seen = HashSet::new();
        for component in &components {
            for vertex in component {
                assert!(seen.insert(*vertex), "vertex {vertex} in two components");
            }
        }
        let all: HashSet<VertexId> = graph.vertices().into_iter().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_members_are_mutually_reachable() {
        let mut graph = AdjacencyListGraph::undirected();
        graph.add_unweighted_edge(v(0), v(1));
        graph.add_unweighted_edge(v(1), v(2));
        graph.add_unweighted_edge(v(5), v(6));

        for component in ComponentFinder::components(&graph) {
            let members: HashSet<VertexId> = component.iter().copied().collect();
            for &vertex in &component {
                let reached: HashSet<VertexId> = crate::algo::traversal::Traversal::bfs(
                    &graph, vertex,
                )
                .unwrap()
                .into_iter()
                .collect();
                assert_eq!(reached, members);
            }
        }
    }

    #[test]
    fn test_isolated_vertices_are_singletons() {
        let mut graph = AdjacencyListGraph::undirected();
        graph.add_vertex(v(1));
        graph.add_vertex(v(2));

        let components = ComponentFinder::components(&graph);
        assert_eq!(components, vec![vec![v(1)], vec![v(2)]]);
    }

    #[test]
    fn test_directed_store_yields_weak_components() {
        // 0 -> 1 <- 2: no directed path between 0 and 2, one weak component
        let mut graph = AdjacencyListGraph::directed();
        graph.add_unweighted_edge(v(0), v(1));
        graph.add_unweighted_edge(v(2), v(1));

        assert_eq!(ComponentFinder::count(&graph), 1);
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph = AdjacencyListGraph::undirected();
        assert!(ComponentFinder::components(&graph).is_empty());
        assert_eq!(ComponentFinder::count(&graph), 0);
    }
}
