//! Integration tests for the algorithm surface

use ordgraph::{dijkstra, floyd, prim, warshall, AdjacencyList, GraphError, Weight};

fn triangle() -> AdjacencyList {
    let mut graph = AdjacencyList::new();
    graph.add_node("a", None);
    graph.add_node("b", None);
    graph.add_node("c", None);
    graph.add_edge("a", "b", Weight::from(1));
    graph.add_edge("b", "c", Weight::from(2));
    graph.add_edge("a", "c", Weight::from(1));
    graph
}

fn undirected(graph: &mut AdjacencyList, a: &str, b: &str, weight: Weight) {
    graph.add_edge(a, b, weight);
    graph.add_edge(b, a, weight);
}

/// Floyd finds a finite distance exactly where Warshall finds a path
#[test]
fn test_floyd_and_warshall_agree_on_reachability() {
    let mut graph = AdjacencyList::new();
    for name in ["a", "b", "c", "d", "e", "x"] {
        graph.add_node(name, None);
    }
    graph.add_edge("a", "b", Weight::from(2));
    graph.add_edge("b", "c", Weight::from(1));
    graph.add_edge("c", "a", Weight::from(4));
    graph.add_edge("c", "d", Weight::from(7));
    graph.add_edge("e", "a", Weight::from(1));
    graph.add_edge("x", "x", Weight::from(9));

    let reach = warshall(&graph);
    let dist = floyd(&graph);
    let n = graph.node_cardinality();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(
                dist.dist[i][j].is_finite(),
                reach.reachable[i][j],
                "disagreement at ({i}, {j})"
            );
        }
    }
}

/// Scenario: dijkstra on the triangle from a — the direct a->c edge with
/// weight 1 beats a->b->c with weight 3
#[test]
fn test_dijkstra_triangle_scenario() {
    let graph = triangle();
    let result = dijkstra(&graph, "a").unwrap();

    assert_eq!(result.nodes, ["a", "b", "c"]);
    assert_eq!(result.dist, vec![None, Some(Weight::from(1)), Some(Weight::from(1))]);
    assert_eq!(
        result.origin,
        vec![None, Some("a".to_string()), Some("a".to_string())]
    );
}

/// Scenario: prim on the undirected triangle a-b(1), a-c(3), b-c(1)
#[test]
fn test_prim_triangle_scenario() {
    let mut graph = AdjacencyList::new();
    for name in ["a", "b", "c"] {
        graph.add_node(name, None);
    }
    undirected(&mut graph, "a", "b", Weight::from(1));
    undirected(&mut graph, "a", "c", Weight::from(3));
    undirected(&mut graph, "b", "c", Weight::from(1));

    let result = prim(&graph, "a").unwrap();
    assert_eq!(result.lowcost, vec![None, Some(Weight::from(1)), Some(Weight::from(1))]);
    assert_eq!(
        result.closest,
        vec![None, Some("a".to_string()), Some("b".to_string())]
    );
}

/// Algorithms are read-only: the graph is unchanged afterwards
#[test]
fn test_algorithms_leave_graph_untouched() {
    let graph = triangle();
    let before = graph.clone();

    let _ = warshall(&graph);
    let _ = floyd(&graph);
    let _ = dijkstra(&graph, "a").unwrap();
    let _ = prim(&graph, "a").unwrap();

    assert_eq!(graph, before);
}

#[test]
fn test_start_node_membership_is_enforced() {
    let graph = triangle();
    assert_eq!(
        dijkstra(&graph, "zebra").unwrap_err(),
        GraphError::NodeNotFound {
            name: "zebra".to_string()
        }
    );
    assert_eq!(
        prim(&graph, "zebra").unwrap_err(),
        GraphError::NodeNotFound {
            name: "zebra".to_string()
        }
    );
}

/// Warshall and Floyd accept the empty graph and return 0x0 results
#[test]
fn test_closure_algorithms_on_empty_graph() {
    let graph = AdjacencyList::new();
    assert!(warshall(&graph).reachable.is_empty());
    assert!(floyd(&graph).dist.is_empty());
}

/// Fractional weights flow through the whole pipeline
#[test]
fn test_fractional_weights() {
    let mut graph = AdjacencyList::new();
    for name in ["a", "b", "c"] {
        graph.add_node(name, None);
    }
    graph.add_edge("a", "b", Weight::new(0.5));
    graph.add_edge("b", "c", Weight::new(0.25));
    graph.add_edge("a", "c", Weight::new(1.0));

    let result = dijkstra(&graph, "a").unwrap();
    assert_eq!(result.dist[2], Some(Weight::new(0.75)));
    assert_eq!(result.origin[2], Some("b".to_string()));

    let all_pairs = floyd(&graph);
    assert_eq!(all_pairs.dist[0][2], Weight::new(0.75));
}

/// A larger undirected graph: prim picks the known-unique MST
#[test]
fn test_prim_square_with_diagonal() {
    let mut graph = AdjacencyList::new();
    for name in ["a", "b", "c", "d"] {
        graph.add_node(name, None);
    }
    undirected(&mut graph, "a", "b", Weight::from(4));
    undirected(&mut graph, "a", "c", Weight::from(1));
    undirected(&mut graph, "c", "b", Weight::from(2));
    undirected(&mut graph, "b", "d", Weight::from(5));
    undirected(&mut graph, "c", "d", Weight::from(8));

    let result = prim(&graph, "a").unwrap();
    // tree edges: a-c(1), c-b(2), b-d(5)
    assert_eq!(result.lowcost[0], None);
    assert_eq!(result.lowcost[1], Some(Weight::from(2)));
    assert_eq!(result.closest[1], Some("c".to_string()));
    assert_eq!(result.lowcost[2], Some(Weight::from(1)));
    assert_eq!(result.closest[2], Some("a".to_string()));
    assert_eq!(result.lowcost[3], Some(Weight::from(5)));
    assert_eq!(result.closest[3], Some("b".to_string()));
}

/// Logging initialization is available to embedding tools and is harmless
/// to call more than once (later calls fail quietly)
#[test]
fn test_init_tracing_is_reentrant_safe() {
    let _ = ordgraph::logging::init_tracing(Some("debug"), false);
    let second = ordgraph::logging::init_tracing(None, true);
    // first call may or may not have won a race with other tests; either
    // way the second call in this thread must not panic
    drop(second);
    let _ = dijkstra(&triangle(), "a").unwrap();
}
