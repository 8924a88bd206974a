use crate::graph::adjlist::AdjacencyList;
use crate::graph::types::Weight;
use serde::Serialize;

/// Dense N×N projection of an [`AdjacencyList`].
///
/// Row and column `i` both correspond to the i:th node in the graph's
/// lexicographic node order. A cell holds the edge weight when the edge
/// exists and `Weight::INFINITY` otherwise; the diagonal gets no implicit
/// zero, so `get(i, i)` is `INFINITY` unless a genuine self-loop exists.
///
/// The projection is a disposable snapshot: it is not kept in sync with
/// later graph mutations.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyMatrix {
    nodes: Vec<String>,
    weights: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Builds the projection by walking each node's edge set once and
    /// resolving destination columns by binary search over the node order.
    pub(crate) fn from_graph(graph: &AdjacencyList) -> Self {
        let nodes = graph.list_nodes();
        let n = nodes.len();
        let mut weights = vec![vec![Weight::INFINITY; n]; n];

        for (row, node) in graph.iter().enumerate() {
            for entry in node.edges().iter() {
                if let Ok(col) = nodes.binary_search(&entry.dst) {
                    weights[row][col] = entry.weight;
                }
                // a dangling edge (destination deleted, not yet purged) has
                // no column and is simply not represented
            }
        }

        AdjacencyMatrix { nodes, weights }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node names in row/column order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Weight of the edge from the i:th to the j:th node, or
    /// `Weight::INFINITY` when no such edge exists.
    ///
    /// Panics when an index is out of bounds, like ordinary slice indexing.
    pub fn get(&self, i: usize, j: usize) -> Weight {
        self.weights[i][j]
    }

    /// Maps a node name to its row/column index, if the node is present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.nodes.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    /// The raw weight rows, in row order
    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.weights
    }
}
