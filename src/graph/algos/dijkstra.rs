use crate::error::{GraphError, Result};
use crate::graph::types::{ShortestPathTable, Weight};
use crate::graph::AdjacencyList;

/// Computes single-source shortest distances with Dijkstra's algorithm.
///
/// The output vectors follow the graph's node order. At the start node's own
/// index both vectors hold `None`; elsewhere `dist[i]` is the minimal cost
/// from `start` to the i:th node (`Weight::INFINITY` when unreachable) and
/// `origin[i]` names the predecessor that performed the winning relaxation
/// (`None` when unreachable).
///
/// Ties in minimum-distance extraction break toward the lowest node index,
/// so the result is deterministic. Correctness assumes non-negative edge
/// weights; this is a caller obligation.
///
/// Fails with [`GraphError::NodeNotFound`] when `start` is not a member.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_cardinality()))]
pub fn dijkstra(graph: &AdjacencyList, start: &str) -> Result<ShortestPathTable> {
    let matrix = graph.adjacency_matrix();
    let n = matrix.size();
    let start_idx = matrix
        .position(start)
        .ok_or_else(|| GraphError::node_not_found(start))?;

    let mut dist = vec![Weight::INFINITY; n];
    let mut origin: Vec<Option<String>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start_idx] = Weight::ZERO;

    while let Some(u) = extract_min(&dist, &visited) {
        visited[u] = true;
        for v in 0..n {
            let weight = matrix.get(u, v);
            if visited[v] || !weight.is_finite() {
                continue;
            }
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                origin[v] = Some(matrix.nodes()[u].clone());
            }
        }
    }

    let dist = dist
        .into_iter()
        .enumerate()
        .map(|(i, d)| if i == start_idx { None } else { Some(d) })
        .collect();

    Ok(ShortestPathTable {
        nodes: matrix.nodes().to_vec(),
        dist,
        origin,
    })
}

/// Unvisited index with the smallest settled-so-far distance, lowest index
/// winning ties; `None` once only unreachable or visited nodes remain.
fn extract_min(dist: &[Weight], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for i in 0..dist.len() {
        if visited[i] || !dist[i].is_finite() {
            continue;
        }
        if best.is_none_or(|b| dist[i] < dist[b]) {
            best = Some(i);
        }
    }
    best
}
