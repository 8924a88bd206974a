use crate::error::{GraphError, Result};
use crate::graph::types::{SpanningTree, Weight};
use crate::graph::AdjacencyList;

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// The graph must represent an undirected graph, i.e. every edge `(u, v, w)`
/// is stored as the two directed entries `(u, v, w)` and `(v, u, w)`. This
/// precondition is trusted, not validated; a directed graph gives
/// unspecified (but non-panicking) output.
///
/// The output vectors follow the graph's node order. At the start node's own
/// index both vectors hold `None`; elsewhere `lowcost[i]` is the weight of
/// the edge that connected the i:th node to the tree and `closest[i]` names
/// the tree endpoint of that edge. Nodes unreachable from `start` keep
/// `lowcost = Some(Weight::INFINITY)` and `closest = None`.
///
/// Each round selects the minimum-weight edge with exactly one endpoint in
/// the tree, ties broken by lowest far-endpoint index, then by lowest
/// near-endpoint index.
///
/// Fails with [`GraphError::NodeNotFound`] when `start` is not a member.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_cardinality()))]
pub fn prim(graph: &AdjacencyList, start: &str) -> Result<SpanningTree> {
    let matrix = graph.adjacency_matrix();
    let n = matrix.size();
    let start_idx = matrix
        .position(start)
        .ok_or_else(|| GraphError::node_not_found(start))?;

    let mut in_tree = vec![false; n];
    let mut lowcost: Vec<Option<Weight>> = vec![Some(Weight::INFINITY); n];
    let mut closest: Vec<Option<String>> = vec![None; n];
    in_tree[start_idx] = true;

    while let Some((far, near, weight)) = min_crossing_edge(&matrix, &in_tree) {
        in_tree[far] = true;
        lowcost[far] = Some(weight);
        closest[far] = Some(matrix.nodes()[near].clone());
    }

    lowcost[start_idx] = None;

    Ok(SpanningTree {
        nodes: matrix.nodes().to_vec(),
        lowcost,
        closest,
    })
}

/// Minimum-weight edge crossing the tree boundary as `(far, near, weight)`,
/// or `None` once no finite crossing edge remains. Scanning far-ascending,
/// near-ascending with a strict comparison realizes the tie-break order.
fn min_crossing_edge(
    matrix: &crate::graph::AdjacencyMatrix,
    in_tree: &[bool],
) -> Option<(usize, usize, Weight)> {
    let n = matrix.size();
    let mut best: Option<(usize, usize, Weight)> = None;
    for far in 0..n {
        if in_tree[far] {
            continue;
        }
        for near in 0..n {
            if !in_tree[near] {
                continue;
            }
            let weight = matrix.get(near, far);
            if !weight.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, _, b)| weight < b) {
                best = Some((far, near, weight));
            }
        }
    }
    best
}
