use crate::graph::edges::EdgeSet;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::{EdgeRecord, Weight};
use serde_json::Value;
use tracing::debug;

/// A single node: its unique name, an optional caller-opaque payload, and
/// the set of its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    info: Option<Value>,
    edges: EdgeSet,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> Option<&Value> {
        self.info.as_ref()
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }
}

/// A directed, weighted graph that keeps its nodes and each node's edges
/// lexicographically ordered at all times.
///
/// All mutating operations preserve two invariants: node names are strictly
/// ascending and unique, and every node's edge set is strictly ascending and
/// unique by destination. The empty graph is an ordinary value, not an error
/// state.
///
/// Deleting a node does *not* remove edges in other nodes that target it;
/// callers wanting a full excision follow [`delete_node`](Self::delete_node)
/// with [`delete_edges_to`](Self::delete_edges_to). This two-step contract
/// is deliberate: the dangling entries stay visible until explicitly purged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyList {
    nodes: Vec<Node>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    ///
    /// Node operations
    ///

    /// Adds a node named `name` at its sorted position. If the node is
    /// already a member, its info payload is overwritten instead; its edges
    /// are untouched either way.
    pub fn add_node(&mut self, name: &str, info: Option<Value>) {
        match self.position(name) {
            Ok(idx) => self.nodes[idx].info = info,
            Err(idx) => self.nodes.insert(
                idx,
                Node {
                    name: name.to_string(),
                    info,
                    edges: EdgeSet::new(),
                },
            ),
        }
    }

    /// Deletes the node named `name` (and its outgoing edges) if it is a
    /// member; no-op otherwise. Edges in other nodes that target `name` are
    /// left in place — see [`delete_edges_to`](Self::delete_edges_to).
    pub fn delete_node(&mut self, name: &str) {
        if let Ok(idx) = self.position(name) {
            self.nodes.remove(idx);
        }
    }

    /// Returns true if the node named `name` is a member
    pub fn find_node(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    /// Returns the info payload of the node named `name`, if the node is a
    /// member and a payload was set
    pub fn node_info(&self, name: &str) -> Option<&Value> {
        self.position(name)
            .ok()
            .and_then(|idx| self.nodes[idx].info.as_ref())
    }

    /// Number of nodes
    pub fn node_cardinality(&self) -> usize {
        self.nodes.len()
    }

    ///
    /// Edge operations
    ///

    /// Adds (or re-weights) an edge from node `src` to node `dst`. If either
    /// of the two nodes is not a member, the graph is left unchanged.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: Weight) {
        if !self.find_node(dst) {
            debug!(src, dst, "add_edge skipped: destination not a member");
            return;
        }
        match self.position(src) {
            Ok(idx) => self.nodes[idx].edges.add(dst, weight),
            Err(_) => debug!(src, dst, "add_edge skipped: source not a member"),
        }
    }

    /// Deletes the edge from node `src` to node `dst` if it exists; no-op
    /// otherwise
    pub fn delete_edge(&mut self, src: &str, dst: &str) {
        if let Ok(idx) = self.position(src) {
            self.nodes[idx].edges.delete(dst);
        }
    }

    /// Deletes, across every node's edge set, all edges toward the node
    /// named `name`. Used together with [`delete_node`](Self::delete_node)
    /// to fully excise a node's incoming references.
    pub fn delete_edges_to(&mut self, name: &str) {
        for node in &mut self.nodes {
            node.edges.delete(name);
        }
    }

    /// Returns true if there is an edge from node `src` to node `dst`
    pub fn find_edge(&self, src: &str, dst: &str) -> bool {
        self.position(src)
            .is_ok_and(|idx| self.nodes[idx].edges.find(dst))
    }

    /// Returns the weight of the edge from `src` to `dst`, if it exists
    pub fn edge_weight(&self, src: &str, dst: &str) -> Option<Weight> {
        self.position(src)
            .ok()
            .and_then(|idx| self.nodes[idx].edges.weight(dst))
    }

    /// Total number of edges across all nodes
    pub fn edge_cardinality(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.cardinality()).sum()
    }

    /// Number of self-loops, i.e. edges from a node to itself
    pub fn self_loops(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.edges.find(&node.name))
            .count()
    }

    ///
    /// Listings and projections
    ///

    /// All node names in ascending order, as a fresh owned snapshot
    pub fn list_nodes(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.name.clone()).collect()
    }

    /// All edges, grouped by source in ascending node order and sorted by
    /// destination within each group, as a fresh owned snapshot
    pub fn list_edges(&self) -> Vec<EdgeRecord> {
        self.nodes
            .iter()
            .flat_map(|node| node.edges.list(&node.name))
            .collect()
    }

    /// Projects this graph onto a dense weight matrix whose row and column
    /// order is the graph's node order. An empty graph yields the degenerate
    /// 0×0 matrix.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_graph(self)
    }

    /// Iterate over nodes in name order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn position(&self, name: &str) -> std::result::Result<usize, usize> {
        self.nodes
            .binary_search_by(|node| node.name.as_str().cmp(name))
    }
}
