//! Nearest-neighbor links and their rendering.
//!
//! Each node contributes the link to its nearest neighbor. When two nodes are
//! each other's nearest neighbor the pair would be produced twice, once from
//! each side; [`nearest_links`] keeps only the first, so a mutual pair is
//! stroked exactly once.
//!
//! # Example
//!
//! ```
//! use slint_nearest_link::{LinkRenderer, NodeStore, Point, RecordingSurface};
//!
//! let mut store = NodeStore::new();
//! store.place(Point::new(0.0, 0.0)).unwrap();
//! store.place(Point::new(10.0, 0.0)).unwrap();
//!
//! let mut surface = RecordingSurface::new(100.0, 100.0);
//! let drawn = LinkRenderer::default().render(&mut surface, store.nodes(), &store.neighbors());
//! assert_eq!(drawn, 1);
//! ```

use crate::config::CanvasConfig;
use crate::neighbors::NeighborMap;
use crate::store::{Node, NodeId, Point};
use crate::surface::DrawingSurface;
use slint::Color;
use std::collections::HashSet;

/// A link from a node to its nearest neighbor, with both endpoints resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestLink {
    pub from: NodeId,
    pub to: NodeId,
    pub start: Point,
    pub end: Point,
}

impl NearestLink {
    /// The unordered pair this link connects, smaller id first.
    pub fn pair(&self) -> (NodeId, NodeId) {
        unordered_pair(self.from, self.to)
    }
}

fn unordered_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Collect the links to draw, without duplicates.
///
/// Nodes are walked in stored order; each node whose neighbor is known yields
/// a link unless the same unordered pair was already yielded. Neighbor ids
/// with no matching node are skipped.
pub fn nearest_links(nodes: &[Node], neighbors: &NeighborMap) -> Vec<NearestLink> {
    let mut drawn: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut links = Vec::new();

    for node in nodes {
        let Some(neighbor_id) = neighbors.neighbor_of(node.id) else {
            continue;
        };
        let Some(neighbor) = nodes.iter().find(|n| n.id == neighbor_id) else {
            log::trace!("node {} points at missing neighbor {}", node.id, neighbor_id);
            continue;
        };
        if !drawn.insert(unordered_pair(node.id, neighbor_id)) {
            continue;
        }
        links.push(NearestLink {
            from: node.id,
            to: neighbor_id,
            start: node.position,
            end: neighbor.position,
        });
    }

    links
}

/// Strokes nearest-neighbor links onto a [`DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRenderer {
    pub stroke_width: f32,
    pub color: Color,
}

impl Default for LinkRenderer {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl LinkRenderer {
    pub fn new(stroke_width: f32, color: Color) -> Self {
        Self {
            stroke_width,
            color,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.link_width, config.link_color)
    }

    /// Clear `surface` and draw every link once.
    ///
    /// Returns the number of segments drawn.
    pub fn render<S>(&self, surface: &mut S, nodes: &[Node], neighbors: &NeighborMap) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        surface.clear();
        let links = nearest_links(nodes, neighbors);
        for link in &links {
            surface.draw_segment(link.start, link.end, self.stroke_width, self.color);
        }
        links.len()
    }

    /// Like [`render`](Self::render), but a missing surface is a no-op.
    pub fn render_to<S>(&self, surface: Option<&mut S>, nodes: &[Node], neighbors: &NeighborMap) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        match surface {
            Some(surface) => self.render(surface, nodes, neighbors),
            None => {
                log::trace!("render skipped: no surface attached");
                0
            }
        }
    }
}
