//! Classic graph algorithms over an [`AdjacencyList`](crate::graph::AdjacencyList)
//!
//! All four are pure, read-only queries: they take the graph by shared
//! reference, project it onto a dense matrix internally, and return freshly
//! allocated results with no aliasing back into the graph.

pub mod dijkstra;
pub mod floyd;
pub mod prim;
pub mod warshall;

pub use dijkstra::dijkstra;
pub use floyd::floyd;
pub use prim::prim;
pub use warshall::warshall;
