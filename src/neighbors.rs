//! Brute-force nearest-neighbor resolution.
//!
//! Every node is compared against every other node, O(N²), and the whole
//! assignment is recomputed after each mutation. There is no spatial index.

use crate::store::{Node, NodeId};

/// Nearest-neighbor assignment for a set of nodes, kept in the nodes' stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborMap {
    entries: Vec<(NodeId, Option<NodeId>)>,
}

impl NeighborMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest neighbor of `id`, or `None` if it has none or is unknown.
    pub fn neighbor_of(&self, id: NodeId) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(node, _)| *node == id)
            .and_then(|(_, neighbor)| *neighbor)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.iter().any(|(node, _)| *node == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NodeId, Option<NodeId>)> for NeighborMap {
    fn from_iter<I: IntoIterator<Item = (NodeId, Option<NodeId>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Compute the nearest other node for every node in `nodes`.
///
/// Candidates are scanned in stored order and only a strictly closer node
/// replaces the current one, so on equal distances the earlier node wins.
/// With fewer than two nodes every entry is `None`.
pub fn resolve_all(nodes: &[Node]) -> NeighborMap {
    nodes
        .iter()
        .map(|node| (node.id, nearest_to(node, nodes)))
        .collect()
}

fn nearest_to(node: &Node, nodes: &[Node]) -> Option<NodeId> {
    let mut closest_id = None;
    let mut closest_distance = f64::INFINITY;

    for other in nodes {
        if other.id == node.id {
            continue;
        }
        let distance = node.position.distance_squared(other.position);
        if closest_id.is_none() || distance < closest_distance {
            closest_distance = distance;
            closest_id = Some(other.id);
        }
    }

    closest_id
}
