use crate::neighbors::{resolve_all, NeighborMap};
use std::fmt;

/// A position on the drawing surface, in pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, computed in double precision.
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    ///
    /// Coordinates are widened before subtracting, so near-equal distances
    /// that collapse to the same `f32` still order correctly.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Identifier of a placed node, stable for the node's lifetime.
///
/// Ids are handed out by [`NodeStore::place`] from a counter that restarts at
/// zero on [`NodeStore::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NodeId> for i32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A placed node and its derived nearest neighbor.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    /// Diameter in pixels
    pub size: f32,
    pub label: String,
    nearest_neighbor: Option<NodeId>,
}

impl Node {
    /// The closest other node, or `None` while fewer than two nodes exist.
    ///
    /// Maintained by the store; there is no setter.
    pub fn nearest_neighbor(&self) -> Option<NodeId> {
        self.nearest_neighbor
    }
}

/// Errors returned by [`NodeStore`] mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreError {
    /// A node already occupies exactly this position
    Rejected(Point),
    /// No live node has this id
    NotFound(NodeId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(p) => write!(f, "Position ({}, {}) is already occupied", p.x, p.y),
            Self::NotFound(id) => write!(f, "Node {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Authoritative, insertion-ordered set of nodes.
///
/// Every successful [`place`](Self::place) or [`move_node`](Self::move_node)
/// recomputes the nearest neighbor of every node before returning, so readers
/// never see a stale link.
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
    next_id: i32,
    node_size: f32,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::with_node_size(crate::CanvasConfig::default().node_size)
    }
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose placed nodes get the given diameter.
    pub fn with_node_size(node_size: f32) -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
            node_size,
        }
    }

    /// Diameter given to nodes placed from now on.
    pub fn set_node_size(&mut self, size: f32) {
        self.node_size = size;
    }

    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    /// Place a new node at `point`.
    ///
    /// Fails without touching the store if a node sits at exactly `point`.
    pub fn place(&mut self, point: Point) -> Result<NodeId, StoreError> {
        if self.nodes.iter().any(|node| node.position == point) {
            return Err(StoreError::Rejected(point));
        }

        let index = self.next_id;
        self.next_id += 1;
        let id = NodeId(index);
        self.nodes.push(Node {
            id,
            position: point,
            size: self.node_size,
            label: index.to_string(),
            nearest_neighbor: None,
        });
        self.refresh_neighbors();
        Ok(id)
    }

    /// Move node `id` to `point`. Overlapping another node is allowed.
    pub fn move_node(&mut self, id: NodeId, point: Point) -> Result<(), StoreError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or(StoreError::NotFound(id))?;
        node.position = point;
        self.refresh_neighbors();
        Ok(())
    }

    /// Remove every node and restart id numbering.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.next_id = 0;
    }

    /// Copy of all nodes in insertion order.
    pub fn snapshot(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Current nearest-neighbor assignment, in insertion order.
    pub fn neighbors(&self) -> NeighborMap {
        self.nodes
            .iter()
            .map(|node| (node.id, node.nearest_neighbor))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn refresh_neighbors(&mut self) {
        let neighbors = resolve_all(&self.nodes);
        for node in &mut self.nodes {
            node.nearest_neighbor = neighbors.neighbor_of(node.id);
        }
    }
}
