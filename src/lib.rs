//! Ordgraph
//!
//! A directed, weighted graph that keeps its node set and each node's
//! outgoing edges lexicographically ordered at all times, plus the classic
//! matrix algorithms built on top of it: transitive closure (Warshall),
//! all-pairs shortest distances (Floyd), single-source shortest distances
//! (Dijkstra), and minimum spanning tree (Prim).

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{
    dijkstra, floyd, prim, warshall, AdjacencyList, AdjacencyMatrix, DistanceMatrix, EdgeRecord,
    EdgeSet, ReachabilityMatrix, ShortestPathTable, SpanningTree, Weight,
};
