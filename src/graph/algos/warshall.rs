use crate::graph::types::ReachabilityMatrix;
use crate::graph::AdjacencyList;

/// Computes the transitive closure of the graph with Warshall's algorithm.
///
/// `reachable[i][j]` ends up true iff a directed path (possibly of length
/// zero, i.e. `i == j`) exists from the i:th to the j:th node, ignoring
/// weights. An empty graph yields the degenerate 0×0 result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_cardinality()))]
pub fn warshall(graph: &AdjacencyList) -> ReachabilityMatrix {
    let matrix = graph.adjacency_matrix();
    let n = matrix.size();

    let mut reachable = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            reachable[i][j] = i == j || matrix.get(i, j).is_finite();
        }
    }

    // k must be the outer loop
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                reachable[i][j] = reachable[i][j] || (reachable[i][k] && reachable[k][j]);
            }
        }
    }

    ReachabilityMatrix {
        nodes: matrix.nodes().to_vec(),
        reachable,
    }
}
