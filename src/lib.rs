// Graphkit Library
// Graph representations and the classic algorithms that run over them

// Common modules
pub mod common {
    pub mod error;
}

// Graph storage modules
pub mod graph {
    pub mod store;
    pub mod adjacency_list;
    pub mod adjacency_matrix;
}

// Algorithm modules
pub mod algo {
    pub mod traversal;
    pub mod cycle;
    pub mod shortest_path;
    pub mod components;
    pub mod toposort;
}

// Re-export commonly used types for convenience
pub use common::error::{GraphError, Result};
pub use graph::store::{
    DEFAULT_EDGE_WEIGHT,
    Edge,
    GraphKind,
    GraphStore,
    Path,
    VertexId,
};
pub use graph::adjacency_list::AdjacencyListGraph;
pub use graph::adjacency_matrix::AdjacencyMatrixGraph;
pub use algo::traversal::Traversal;
pub use algo::cycle::CycleDetector;
pub use algo::shortest_path::{ShortestPathFinder, ShortestPathTree};
pub use algo::components::ComponentFinder;
pub use algo::toposort::TopologicalSorter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
