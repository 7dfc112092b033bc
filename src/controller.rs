//! Pointer-driven placement and dragging of nodes.
//!
//! [`InteractionController`] owns the [`NodeStore`] and is the only code that
//! mutates it. Every pointer event runs to completion: mutate the store, which
//! recomputes all nearest neighbors, then clear and redraw the links.
//!
//! # Example
//!
//! ```
//! use slint_nearest_link::{
//!     CanvasConfig, InteractionController, InteractionState, NodeId, PointerEvent,
//!     RecordingSurface,
//! };
//!
//! let mut ctrl = InteractionController::with_surface(
//!     CanvasConfig::default(),
//!     RecordingSurface::new(800.0, 600.0),
//! );
//!
//! ctrl.handle_pointer(PointerEvent::down(100.0, 100.0));
//! ctrl.handle_pointer(PointerEvent::down(300.0, 100.0));
//!
//! // Press on node 1, drag it, release
//! ctrl.handle_pointer(PointerEvent::down_on(NodeId(1), 300.0, 100.0));
//! assert_eq!(ctrl.state(), InteractionState::Dragging(NodeId(1)));
//! ctrl.handle_pointer(PointerEvent::moved(200.0, 150.0));
//! ctrl.handle_pointer(PointerEvent::up(150.0, 150.0));
//!
//! assert_eq!(ctrl.state(), InteractionState::Idle);
//! assert_eq!(ctrl.surface().unwrap().segments().len(), 1);
//! ```

use crate::config::CanvasConfig;
use crate::hit_test::find_node_at;
use crate::links::LinkRenderer;
use crate::store::{NodeId, NodeStore, Point, StoreError};
use crate::surface::DrawingSurface;

/// Where the controller is in the press/drag cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A node was pressed and follows the pointer until release
    Dragging(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event in surface coordinates.
///
/// `target` is set by the input layer when the press landed on a node's
/// visual; it is ignored for moves and releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub target: Option<NodeId>,
}

impl PointerEvent {
    /// Press on empty canvas.
    pub fn down(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Down, position: Point::new(x, y), target: None }
    }

    /// Press on the visual of node `id`.
    pub fn down_on(id: NodeId, x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Down, position: Point::new(x, y), target: Some(id) }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Move, position: Point::new(x, y), target: None }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Up, position: Point::new(x, y), target: None }
    }
}

/// Translates pointer events into store mutations and redraws.
///
/// The surface is optional: until one is attached, rendering is skipped but
/// the store still tracks every mutation.
pub struct InteractionController<S> {
    store: NodeStore,
    renderer: LinkRenderer,
    config: CanvasConfig,
    surface: Option<S>,
    state: InteractionState,
}

impl<S: DrawingSurface> Default for InteractionController<S> {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl<S: DrawingSurface> InteractionController<S> {
    /// Create a controller with no surface attached.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            store: NodeStore::with_node_size(config.node_size),
            renderer: LinkRenderer::from_config(&config),
            config,
            surface: None,
            state: InteractionState::Idle,
        }
    }

    pub fn with_surface(config: CanvasConfig, surface: S) -> Self {
        let mut ctrl = Self::new(config);
        ctrl.attach_surface(surface);
        ctrl
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Read-only access to the nodes.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Replace the visual settings and redraw.
    ///
    /// Only nodes placed afterwards take the new node size.
    pub fn set_config(&mut self, config: CanvasConfig) {
        self.config = config;
        self.store.set_node_size(config.node_size);
        self.renderer = LinkRenderer::from_config(&config);
        self.render();
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Attach a drawing surface and paint the current links onto it.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.render();
    }

    /// Detach and return the drawing surface, if any.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Dispatch a pointer event. Returns the state after handling it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InteractionState {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.position, event.target),
            PointerKind::Move => self.pointer_moved(event.position),
            PointerKind::Up => self.pointer_released(event.position),
        }
        self.state
    }

    /// Press at `point`, hit-testing the nodes to decide whether it grabs one.
    ///
    /// For input layers that do not report which visual was pressed.
    pub fn pointer_down_at(&mut self, point: Point) -> InteractionState {
        let target = find_node_at(point, self.store.nodes());
        self.pointer_down(point, target);
        self.state
    }

    fn pointer_down(&mut self, point: Point, target: Option<NodeId>) {
        if let InteractionState::Dragging(id) = self.state {
            log::debug!("press while dragging node {}, ending drag", id);
            self.state = InteractionState::Idle;
        }

        match target {
            Some(id) if self.store.get(id).is_some() => {
                self.state = InteractionState::Dragging(id);
            }
            Some(id) => {
                log::warn!("press on unknown node {}, ignored", id);
            }
            None => {
                // Occupied positions are silently ignored
                let _ = self.place(point);
            }
        }
    }

    fn pointer_moved(&mut self, point: Point) {
        if let InteractionState::Dragging(id) = self.state {
            self.drag_to(id, point);
        }
    }

    fn pointer_released(&mut self, point: Point) {
        if let InteractionState::Dragging(id) = self.state {
            self.drag_to(id, point);
            self.state = InteractionState::Idle;
        }
    }

    fn drag_to(&mut self, id: NodeId, point: Point) {
        match self.store.move_node(id, point) {
            Ok(()) => {
                self.render();
            }
            Err(err) => {
                log::warn!("drag of node {} dropped: {}", id, err);
                self.state = InteractionState::Idle;
            }
        }
    }

    /// Place a node at `point` and redraw.
    pub fn place(&mut self, point: Point) -> Result<NodeId, StoreError> {
        match self.store.place(point) {
            Ok(id) => {
                log::debug!("placed node {} at ({}, {})", id, point.x, point.y);
                self.render();
                Ok(id)
            }
            Err(err) => {
                log::debug!("placement ignored: {}", err);
                Err(err)
            }
        }
    }

    /// Remove all nodes, clear the surface and return to idle.
    pub fn reset(&mut self) {
        self.store.reset();
        self.state = InteractionState::Idle;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Resize the surface and repaint the current links. Nodes are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
        self.render();
    }

    /// Clear the surface and redraw every link. Returns the number of segments drawn.
    pub fn render(&mut self) -> usize {
        let neighbors = self.store.neighbors();
        self.renderer
            .render_to(self.surface.as_mut(), self.store.nodes(), &neighbors)
    }
}
