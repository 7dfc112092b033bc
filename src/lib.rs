//! # Slint Nearest Link
//!
//! Click on a canvas to place labeled nodes, drag them around, and see every
//! node joined by a straight line to its nearest neighbor.
//!
//! ## Features
//!
//! - **Node Store** - Insertion-ordered nodes with collision-checked placement
//! - **Nearest-Neighbor Resolution** - Recomputed for all nodes after every mutation
//! - **Duplicate-Free Links** - Mutual nearest pairs are drawn once
//! - **Surface-Agnostic Rendering** - Draw into any [`DrawingSurface`], or into
//!   SVG path commands for a Slint `Path`
//! - **Explicit Interaction State Machine** - Idle / Dragging, no hidden listeners
//!
//! ## Quick Start
//!
//! ```
//! use slint_nearest_link::{CanvasConfig, InteractionController, PointerEvent, RecordingSurface};
//!
//! let mut ctrl = InteractionController::with_surface(
//!     CanvasConfig::default(),
//!     RecordingSurface::new(800.0, 600.0),
//! );
//! ctrl.handle_pointer(PointerEvent::down(0.0, 0.0));
//! ctrl.handle_pointer(PointerEvent::down(10.0, 0.0));
//! ctrl.handle_pointer(PointerEvent::down(10.0, 10.0));
//!
//! assert_eq!(ctrl.surface().unwrap().segments().len(), 2);
//! ```
//!
//! ## Rust Helpers
//!
//! - [`NodeStore`] - Owns the nodes and their derived nearest neighbors
//! - [`resolve_all`] - O(N²) nearest-neighbor scan with earliest-node tie-break
//! - [`nearest_links`] / [`LinkRenderer`] - Deduplicate and stroke links
//! - [`find_node_at`] - Hit-test node discs at surface coordinates
//! - [`InteractionController`] - Pointer event state machine
//! - [`CanvasController`] - Callback factories and model sync for Slint windows
//!
//! ## Logging
//!
//! Rejected placements, stale drags and skipped renders are reported through
//! the [`log`] facade. Install any logger in the host application to see them.

pub mod config;
pub mod store;
pub mod neighbors;
pub mod surface;
pub mod links;
pub mod controller;
pub mod canvas;

pub use config::CanvasConfig;
pub use store::{Node, NodeId, NodeStore, Point, StoreError};
pub use neighbors::{resolve_all, NeighborMap};
pub use surface::{DrawingSurface, PathCommandSurface, RecordingSurface, Segment};
pub use links::{nearest_links, LinkRenderer, NearestLink};
pub use hit_test::{find_node_at, NodeGeometry};
pub use controller::{InteractionController, InteractionState, PointerEvent, PointerKind};
pub use canvas::{CanvasController, NodeVisual};
