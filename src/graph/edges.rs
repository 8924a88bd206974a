use crate::graph::types::{EdgeRecord, Weight};
use serde::Serialize;

/// A single entry in an edge set: the destination node name and the weight
/// of the edge toward it. The source node is implicit (the owning node).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEntry {
    pub dst: String,
    pub weight: Weight,
}

/// The outgoing edges of a single node, kept strictly sorted and unique by
/// destination name at all times.
///
/// Destination membership in the surrounding graph is the responsibility of
/// [`AdjacencyList`](crate::graph::AdjacencyList); on its own an `EdgeSet`
/// accepts any destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSet {
    entries: Vec<EdgeEntry>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of edges in this set
    pub fn cardinality(&self) -> usize {
        self.entries.len()
    }

    /// Adds an edge toward `dst` at its sorted position. If such an edge
    /// exists already, its weight is overwritten instead.
    pub fn add(&mut self, dst: &str, weight: Weight) {
        match self.position(dst) {
            Ok(idx) => self.entries[idx].weight = weight,
            Err(idx) => self.entries.insert(
                idx,
                EdgeEntry {
                    dst: dst.to_string(),
                    weight,
                },
            ),
        }
    }

    /// Deletes the edge toward `dst` if it exists; no-op otherwise
    pub fn delete(&mut self, dst: &str) {
        if let Ok(idx) = self.position(dst) {
            self.entries.remove(idx);
        }
    }

    /// Returns true if there is an edge toward `dst` in this set
    pub fn find(&self, dst: &str) -> bool {
        self.position(dst).is_ok()
    }

    /// Returns the weight of the edge toward `dst`, if present
    pub fn weight(&self, dst: &str) -> Option<Weight> {
        self.position(dst).ok().map(|idx| self.entries[idx].weight)
    }

    /// Materializes this set as source-tagged triples in destination order.
    /// The returned records are an owned snapshot, fresh on every call.
    pub fn list(&self, src: &str) -> Vec<EdgeRecord> {
        self.entries
            .iter()
            .map(|entry| EdgeRecord {
                src: src.to_string(),
                dst: entry.dst.clone(),
                weight: entry.weight,
            })
            .collect()
    }

    /// Iterate over entries in destination order
    pub fn iter(&self) -> impl Iterator<Item = &EdgeEntry> {
        self.entries.iter()
    }

    fn position(&self, dst: &str) -> std::result::Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.dst.as_str().cmp(dst))
    }
}
