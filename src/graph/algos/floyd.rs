use crate::graph::types::{DistanceMatrix, Weight};
use crate::graph::AdjacencyList;

/// Computes all-pairs shortest distances with Floyd's algorithm.
///
/// `dist[i][j]` ends up with the minimal path cost from the i:th to the j:th
/// node, `Weight::ZERO` on the diagonal, and `Weight::INFINITY` for
/// unreachable pairs. Assumes the graph has no negative cycles; this is not
/// checked. An empty graph yields the degenerate 0×0 result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_cardinality()))]
pub fn floyd(graph: &AdjacencyList) -> DistanceMatrix {
    let matrix = graph.adjacency_matrix();
    let n = matrix.size();

    let mut dist = vec![vec![Weight::INFINITY; n]; n];
    for i in 0..n {
        for j in 0..n {
            dist[i][j] = if i == j { Weight::ZERO } else { matrix.get(i, j) };
        }
    }

    // k must be the outer loop
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    DistanceMatrix {
        nodes: matrix.nodes().to_vec(),
        dist,
    }
}
