use serde::Serialize;

/// Weight of a single directed edge, and the unit in which all path costs
/// are accumulated.
///
/// `Weight::INFINITY` is the designated "no edge / no path" sentinel: it is
/// a real value of the domain type, so a dense matrix cell can always hold a
/// `Weight` without an `Option` wrapper. Negative weights are representable;
/// Dijkstra's correctness assumes non-negative weights, which is a caller
/// obligation rather than an enforced invariant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    /// Default edge weight when the caller does not supply one
    pub const DEFAULT: Weight = Weight(1.0);
    /// Zero cost (the distance from a node to itself)
    pub const ZERO: Weight = Weight(0.0);
    /// The "no edge / unreachable" sentinel
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true for any real weight, false for the `INFINITY` sentinel
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight as f64)
    }
}

/// A single directed edge materialized as a source-tagged triple.
///
/// This is the currency of `list_edges()`: a fresh, owned snapshot with no
/// aliasing back into the adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dst: String,
    pub weight: Weight,
}

/// Transitive closure result: `reachable[i][j]` is true iff a (possibly
/// zero-length) directed path exists from the i:th to the j:th node.
///
/// Rows and columns follow `nodes`, the graph's lexicographic node order.
#[derive(Debug, Clone, Serialize)]
pub struct ReachabilityMatrix {
    pub nodes: Vec<String>,
    pub reachable: Vec<Vec<bool>>,
}

/// All-pairs shortest distances: `dist[i][j]` is the minimal path cost from
/// the i:th to the j:th node, `Weight::INFINITY` for unreachable pairs, and
/// `Weight::ZERO` on the diagonal.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMatrix {
    pub nodes: Vec<String>,
    pub dist: Vec<Vec<Weight>>,
}

/// Single-source shortest distances, indexed by the graph's node order.
///
/// At the start node's own index both vectors hold `None` (the "undefined"
/// marker). Everywhere else `dist[i]` is `Some(cost)` — `Weight::INFINITY`
/// when unreachable — and `origin[i]` names the predecessor on the shortest
/// path found, `None` when unreachable.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTable {
    pub nodes: Vec<String>,
    pub dist: Vec<Option<Weight>>,
    pub origin: Vec<Option<String>>,
}

/// Minimum spanning tree result, indexed by the graph's node order.
///
/// At the start node's own index both vectors hold `None`. Everywhere else
/// `lowcost[i]` is the weight of the edge that connected the i:th node to
/// the tree (`Weight::INFINITY` when the node is unreachable) and
/// `closest[i]` names the tree endpoint of that edge (`None` when
/// unreachable).
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    pub nodes: Vec<String>,
    pub lowcost: Vec<Option<Weight>>,
    pub closest: Vec<Option<String>>,
}
