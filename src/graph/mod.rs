//! Ordered adjacency-list graph and its derived views
//!
//! - `AdjacencyList` / `EdgeSet`: the mutable, always-sorted graph structure
//! - `AdjacencyMatrix`: a disposable dense projection of the graph
//! - `algos`: Warshall, Floyd, Dijkstra, and Prim over the projection

pub mod adjlist;
pub mod algos;
pub mod edges;
pub mod matrix;
pub mod types;

pub use adjlist::{AdjacencyList, Node};
pub use algos::{dijkstra, floyd, prim, warshall};
pub use edges::{EdgeEntry, EdgeSet};
pub use matrix::AdjacencyMatrix;
pub use types::{
    DistanceMatrix, EdgeRecord, ReachabilityMatrix, ShortestPathTable, SpanningTree, Weight,
};
