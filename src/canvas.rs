//! Slint bindings for the nearest-link canvas.
//!
//! [`CanvasController`] wraps an [`InteractionController`] drawing into a
//! [`PathCommandSurface`] and hands out ready-made callbacks for a Slint
//! window. After every event it pushes the node visuals into a bound
//! `VecModel` and the link path commands into a bound handler.
//!
//! # Example
//!
//! ```ignore
//! use slint_nearest_link::CanvasController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = NearestLinkWindow::new().unwrap();
//!     let ctrl = CanvasController::new();
//!
//!     let nodes = Rc::new(VecModel::<NodeData>::default());
//!     ctrl.bind_nodes(nodes.clone(), |n| NodeData {
//!         id: n.id,
//!         label: n.label.clone(),
//!         x: n.x,
//!         y: n.y,
//!         size: n.size,
//!         color: n.color,
//!         dragging: n.dragging,
//!     });
//!     window.set_nodes(ModelRc::from(nodes));
//!
//!     let w = window.as_weak();
//!     ctrl.bind_links(move |commands, color, width| {
//!         if let Some(w) = w.upgrade() {
//!             w.set_link_commands(commands);
//!             w.set_link_color(color);
//!             w.set_link_width(width);
//!         }
//!     });
//!
//!     window.on_canvas_pressed(ctrl.canvas_pressed_callback());
//!     window.on_node_pressed(ctrl.node_pressed_callback());
//!     window.on_pointer_moved(ctrl.pointer_moved_callback());
//!     window.on_pointer_released(ctrl.pointer_released_callback());
//!     window.on_reset_requested(ctrl.reset_callback());
//!     window.on_canvas_resized(ctrl.resized_callback());
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::CanvasConfig;
use crate::controller::{InteractionController, InteractionState, PointerEvent};
use crate::store::{NodeId, Point};
use crate::surface::PathCommandSurface;
use slint::{Color, Model, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// What a node looks like on screen, handed to the model constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    pub id: i32,
    pub label: SharedString,
    /// Centre of the node in canvas pixels
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    /// True while this node follows the pointer
    pub dragging: bool,
}

/// Internal trait for auto-syncing node visuals to a Slint model.
trait NodeModelSyncer {
    fn sync(&self, visuals: &[NodeVisual]);
}

struct ConcreteNodeSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> NodeModelSyncer for ConcreteNodeSyncer<P, F>
where
    P: Clone + PartialEq + 'static,
    F: Fn(&NodeVisual) -> P,
{
    fn sync(&self, visuals: &[NodeVisual]) {
        // Only touch rows that changed, so a drag repaints one node
        for (i, visual) in visuals.iter().enumerate() {
            let item = (self.constructor)(visual);
            if i < self.model.row_count() {
                if self.model.row_data(i).as_ref() != Some(&item) {
                    self.model.set_row_data(i, item);
                }
            } else {
                self.model.push(item);
            }
        }
        while self.model.row_count() > visuals.len() {
            self.model.remove(self.model.row_count() - 1);
        }
    }
}

type LinkHandler = Box<dyn Fn(SharedString, Color, f32)>;

/// Cloneable handle that connects an interaction controller to a Slint window.
///
/// All clones share the same nodes and surface.
#[derive(Clone)]
pub struct CanvasController {
    inner: Rc<RefCell<InteractionController<PathCommandSurface>>>,
    node_syncer: Rc<RefCell<Option<Box<dyn NodeModelSyncer>>>>,
    link_handler: Rc<RefCell<Option<LinkHandler>>>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Create a controller with the default look.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(InteractionController::with_surface(
                config,
                PathCommandSurface::default(),
            ))),
            node_syncer: Rc::new(RefCell::new(None)),
            link_handler: Rc::new(RefCell::new(None)),
        }
    }

    /// Shared access to the underlying interaction controller.
    pub fn controller(&self) -> Rc<RefCell<InteractionController<PathCommandSurface>>> {
        self.inner.clone()
    }

    pub fn state(&self) -> InteractionState {
        self.inner.borrow().state()
    }

    pub fn config(&self) -> CanvasConfig {
        *self.inner.borrow().config()
    }

    /// Replace the visual settings and push the result to the window.
    pub fn set_config(&self, config: CanvasConfig) {
        self.inner.borrow_mut().set_config(config);
        self.sync();
    }

    /// Current link path commands.
    pub fn link_commands(&self) -> SharedString {
        self.inner
            .borrow()
            .surface()
            .map(PathCommandSurface::shared_commands)
            .unwrap_or_default()
    }

    /// Snapshot of what every node should look like right now.
    pub fn node_visuals(&self) -> Vec<NodeVisual> {
        let ctrl = self.inner.borrow();
        let dragged = match ctrl.state() {
            InteractionState::Dragging(id) => Some(id),
            InteractionState::Idle => None,
        };
        let color = ctrl.config().node_color;
        ctrl.store()
            .nodes()
            .iter()
            .map(|node| NodeVisual {
                id: node.id.into(),
                label: SharedString::from(node.label.as_str()),
                x: node.position.x,
                y: node.position.y,
                size: node.size,
                color,
                dragging: dragged == Some(node.id),
            })
            .collect()
    }

    /// Bind a Slint model for automatic synchronization.
    ///
    /// The model is filled immediately and then kept in step with the store
    /// after every event handled through this controller.
    pub fn bind_nodes<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + PartialEq + 'static,
        F: Fn(&NodeVisual) -> P + 'static,
    {
        *self.node_syncer.borrow_mut() = Some(Box::new(ConcreteNodeSyncer { model, constructor }));
        self.sync();
    }

    /// Register the handler that receives `(commands, color, stroke_width)`
    /// after every render.
    pub fn bind_links<F>(&self, handler: F)
    where
        F: Fn(SharedString, Color, f32) + 'static,
    {
        *self.link_handler.borrow_mut() = Some(Box::new(handler));
        self.sync();
    }

    // === Direct handlers ===

    /// Handle a press on empty canvas: place a node there.
    pub fn handle_canvas_pressed(&self, x: f32, y: f32) {
        self.dispatch(PointerEvent::down(x, y));
    }

    /// Handle a press on the visual of node `id`: start dragging it.
    pub fn handle_node_pressed(&self, id: i32, x: f32, y: f32) {
        self.dispatch(PointerEvent::down_on(NodeId(id), x, y));
    }

    pub fn handle_pointer_moved(&self, x: f32, y: f32) {
        self.dispatch(PointerEvent::moved(x, y));
    }

    pub fn handle_pointer_released(&self, x: f32, y: f32) {
        self.dispatch(PointerEvent::up(x, y));
    }

    /// Handle a press where the UI cannot tell what was hit.
    pub fn handle_pressed_at(&self, x: f32, y: f32) {
        self.inner.borrow_mut().pointer_down_at(Point::new(x, y));
        self.sync();
    }

    pub fn handle_reset(&self) {
        self.inner.borrow_mut().reset();
        self.sync();
    }

    pub fn handle_resized(&self, width: f32, height: f32) {
        self.inner.borrow_mut().resize(width, height);
        self.sync();
    }

    // === Callback factories ===

    /// Returns a callback for `canvas-pressed(x, y)`.
    pub fn canvas_pressed_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_canvas_pressed(x, y)
    }

    /// Returns a callback for `node-pressed(id, x, y)`.
    pub fn node_pressed_callback(&self) -> impl Fn(i32, f32, f32) {
        let ctrl = self.clone();
        move |id, x, y| ctrl.handle_node_pressed(id, x, y)
    }

    /// Returns a callback for `pointer-moved(x, y)`.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_moved(x, y)
    }

    /// Returns a callback for `pointer-released(x, y)`.
    pub fn pointer_released_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_released(x, y)
    }

    /// Returns a callback for `reset-requested()`.
    pub fn reset_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_reset()
    }

    /// Returns a callback for `canvas-resized(width, height)`.
    pub fn resized_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |width, height| ctrl.handle_resized(width, height)
    }

    fn dispatch(&self, event: PointerEvent) {
        self.inner.borrow_mut().handle_pointer(event);
        self.sync();
    }

    fn sync(&self) {
        let visuals = self.node_visuals();
        let commands = self.link_commands();
        let (color, width) = {
            let ctrl = self.inner.borrow();
            (ctrl.config().link_color, ctrl.config().link_width)
        };

        if let Some(syncer) = self.node_syncer.borrow().as_ref() {
            syncer.sync(&visuals);
        }
        if let Some(handler) = self.link_handler.borrow().as_ref() {
            handler(commands, color, width);
        }
    }
}
