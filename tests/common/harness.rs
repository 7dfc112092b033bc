//! Test harness mirroring `demos/canvas/src/main.rs`.
//!
//! Wires a [`CanvasController`] to a node model and a link handler exactly as
//! the demo window does, with callback tracking and helpers for simulating
//! pointer input.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{Model, VecModel};
use slint_nearest_link::{CanvasController, NodeVisual, PointerEvent, RecordingSurface};
use slint_nearest_link::{CanvasConfig, InteractionController};
use std::rc::Rc;

/// Row type standing in for the demo's generated `NodeData` struct.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRow {
    pub id: i32,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub dragging: bool,
}

impl NodeRow {
    fn from_visual(visual: &NodeVisual) -> Self {
        Self {
            id: visual.id,
            label: visual.label.to_string(),
            x: visual.x,
            y: visual.y,
            size: visual.size,
            dragging: visual.dragging,
        }
    }
}

/// Test harness for the canvas window bindings.
pub struct CanvasTestHarness {
    pub ctrl: CanvasController,
    pub nodes: Rc<VecModel<NodeRow>>,
    pub tracker: CallbackTracker,
    press: Box<dyn Fn(f32, f32)>,
    node_press: Box<dyn Fn(i32, f32, f32)>,
    moved: Box<dyn Fn(f32, f32)>,
    released: Box<dyn Fn(f32, f32)>,
    reset: Box<dyn Fn()>,
    resized: Box<dyn Fn(f32, f32)>,
}

impl CanvasTestHarness {
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let ctrl = CanvasController::with_config(config);
        let tracker = CallbackTracker::new();

        let nodes = Rc::new(VecModel::<NodeRow>::default());
        ctrl.bind_nodes(nodes.clone(), {
            let tracker = tracker.clone();
            move |visual: &NodeVisual| {
                *tracker.node_syncs.borrow_mut() += 1;
                NodeRow::from_visual(visual)
            }
        });

        ctrl.bind_links({
            let tracker = tracker.clone();
            move |commands, color, width| {
                tracker.link_updates.borrow_mut().push((commands, color, width));
            }
        });

        Self {
            press: Box::new(ctrl.canvas_pressed_callback()),
            node_press: Box::new(ctrl.node_pressed_callback()),
            moved: Box::new(ctrl.pointer_moved_callback()),
            released: Box::new(ctrl.pointer_released_callback()),
            reset: Box::new(ctrl.reset_callback()),
            resized: Box::new(ctrl.resized_callback()),
            ctrl,
            nodes,
            tracker,
        }
    }

    /// Simulate a press on empty canvas.
    pub fn click_canvas(&self, x: f32, y: f32) {
        (self.press)(x, y);
    }

    /// Simulate pressing a node, dragging it through `path`, and releasing at the last point.
    pub fn drag_node(&self, id: i32, path: &[(f32, f32)]) {
        let Some(node) = self.node_row(id) else {
            return;
        };
        (self.node_press)(id, node.x, node.y);
        let Some((&(end_x, end_y), steps)) = path.split_last() else {
            return;
        };
        for &(x, y) in steps {
            (self.moved)(x, y);
        }
        (self.released)(end_x, end_y);
    }

    pub fn press_node(&self, id: i32, x: f32, y: f32) {
        (self.node_press)(id, x, y);
    }

    pub fn move_pointer(&self, x: f32, y: f32) {
        (self.moved)(x, y);
    }

    pub fn release_pointer(&self, x: f32, y: f32) {
        (self.released)(x, y);
    }

    pub fn click_reset(&self) {
        (self.reset)();
    }

    pub fn resize(&self, width: f32, height: f32) {
        (self.resized)(width, height);
    }

    /// Get a node's row by ID.
    pub fn node_row(&self, id: i32) -> Option<NodeRow> {
        (0..self.nodes.row_count())
            .filter_map(|i| self.nodes.row_data(i))
            .find(|row| row.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.row_count()
    }

    /// Nearest neighbor of `id` as currently stored.
    pub fn neighbor_of(&self, id: i32) -> Option<i32> {
        let ctrl = self.ctrl.controller();
        let ctrl = ctrl.borrow();
        let node = ctrl
            .store()
            .nodes()
            .iter()
            .find(|node| i32::from(node.id) == id)?;
        node.nearest_neighbor().map(i32::from)
    }

    /// Segments of the current link path.
    pub fn segments(&self) -> Vec<(f32, f32, f32, f32)> {
        super::parse_segments(self.ctrl.link_commands().as_str())
    }
}

/// A bare controller over a recording surface, for tests that do not need the bindings.
pub fn recording_controller() -> InteractionController<RecordingSurface> {
    InteractionController::with_surface(CanvasConfig::default(), RecordingSurface::new(800.0, 600.0))
}

/// Feed a sequence of canvas presses to `ctrl`.
pub fn place_all(ctrl: &mut InteractionController<RecordingSurface>, points: &[(f32, f32)]) {
    for &(x, y) in points {
        ctrl.handle_pointer(PointerEvent::down(x, y));
    }
}
