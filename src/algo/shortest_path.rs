// ShortestPathFinder - BFS unweighted shortest path and Dijkstra

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use ordered_float::OrderedFloat;

use crate::common::error::{GraphError, Result};
use crate::graph::store::{GraphStore, Path, VertexId};

/// Priority queue entry for Dijkstra, ordered by tentative distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    cost: OrderedFloat<f64>,
    vertex: VertexId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest-path state: best-known distance and predecessor
/// per reached vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: HashMap<VertexId, f64>,
    previous: HashMap<VertexId, VertexId>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, or `None` when unreachable
    pub fn distance_to(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    /// Walk the predecessor map backward from `target`; `None` when the
    /// target was never reached.
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        let distance = self.distance_to(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.previous.get(&current)?;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Shortest-path queries over a [`GraphStore`].
pub struct ShortestPathFinder;

impl ShortestPathFinder {
    /// Minimum-edge-count path via breadth-first search.
    ///
    /// BFS discovers each vertex at its first, and therefore minimum,
    /// distance layer. Returns `Ok(None)` when `target` is unreachable; a
    /// query with `source == target` yields a zero-length path.
    pub fn bfs_shortest_path(
        graph: &dyn GraphStore,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Path>> {
        for endpoint in [source, target] {
            if !graph.contains_vertex(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }

        if source == target {
            return Ok(Some(Path::single(source)));
        }

        let mut visited = HashSet::new();
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);

        'search: while let Some(vertex) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(vertex)? {
                if visited.insert(neighbor) {
                    previous.insert(neighbor, vertex);
                    if neighbor == target {
                        break 'search;
                    }
                    queue.push_back(neighbor);
                }
            }
        }

        if !previous.contains_key(&target) {
            return Ok(None);
        }

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            current = previous[&current];
            vertices.push(current);
        }
        vertices.reverse();

        let distance = (vertices.len() - 1) as f64;
        Ok(Some(Path { vertices, distance }))
    }

    /// Dijkstra's algorithm from `source` to every reachable vertex.
    ///
    /// Requires every edge weight to be non-negative; the whole edge set is
    /// validated before the search starts, never mid-run.
    pub fn dijkstra(graph: &dyn GraphStore, source: VertexId) -> Result<ShortestPathTree> {
        if !graph.contains_vertex(source) {
            return Err(GraphError::vertex_not_found(source));
        }
        Self::validate_weights(graph)?;
        Self::run(graph, source, None)
    }

    /// Dijkstra with early termination: the search stops once `target` is
    /// finalized. Returns `Ok(None)` when `target` is unreachable.
    pub fn dijkstra_to(
        graph: &dyn GraphStore,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Path>> {
        for endpoint in [source, target] {
            if !graph.contains_vertex(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }
        Self::validate_weights(graph)?;

        let tree = Self::run(graph, source, Some(target))?;
        Ok(tree.path_to(target))
    }

    fn validate_weights(graph: &dyn GraphStore) -> Result<()> {
        for edge in graph.edges() {
            if edge.weight < 0.0 {
                return Err(GraphError::negative_weight(edge.from, edge.to, edge.weight));
            }
        }
        Ok(())
    }

    fn run(
        graph: &dyn GraphStore,
        source: VertexId,
        target: Option<VertexId>,
    ) -> Result<ShortestPathTree> {
        let mut distances: HashMap<VertexId, f64> = HashMap::new();
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut finalized: HashSet<VertexId> = HashSet::new();
        let mut heap = BinaryHeap::new();

        distances.insert(source, 0.0);
        heap.push(HeapEntry {
            cost: OrderedFloat(0.0),
            vertex: source,
        });

        while let Some(HeapEntry { cost, vertex }) = heap.pop() {
            // Lazy deletion: stale entries for finalized vertices are
            // discarded instead of being removed from the heap
            if !finalized.insert(vertex) {
                continue;
            }

            if target == Some(vertex) {
                break;
            }

            for (neighbor, weight) in graph.neighbors(vertex)? {
                if finalized.contains(&neighbor) {
                    continue;
                }

                let candidate = cost.into_inner() + weight;
                let best = distances.get(&neighbor).copied();
                if best.is_none_or(|current| candidate < current) {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, vertex);
                    heap.push(HeapEntry {
                        cost: OrderedFloat(candidate),
                        vertex: neighbor,
                    });
                }
            }
        }

        tracing::debug!(
            "dijkstra from {} finalized {} of {} vertices",
            source,
            finalized.len(),
            graph.vertex_count()
        );

        Ok(ShortestPathTree {
            source,
            distances,
            previous,
        })
    }
}
