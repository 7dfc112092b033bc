//! Window-level harness: the shipped `NearestLinkWindow` on the testing backend.
//!
//! Wires the window exactly like `demos/canvas/src/main.rs` and feeds it raw
//! pointer events, so routing between the canvas, node discs and HUD is
//! exercised by the real `.slint` component.

#![allow(dead_code)]

use slint::{
    platform::{PointerEventButton, WindowEvent},
    ComponentHandle, LogicalPosition, LogicalSize, Model, ModelRc, VecModel,
};
use slint_nearest_link::{CanvasController, InteractionState, NodeVisual};
use std::rc::Rc;

// Include the compiled UI from build.rs
slint::include_modules!();

/// Initialize the testing backend once per test thread.
fn init_testing_backend() {
    use std::cell::Cell;
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }

    INITIALIZED.with(|init| {
        if !init.get() {
            i_slint_backend_testing::init_no_event_loop();
            init.set(true);
        }
    });
}

fn node_data(visual: &NodeVisual) -> NodeData {
    NodeData {
        id: visual.id,
        label: visual.label.clone(),
        x: visual.x,
        y: visual.y,
        size: visual.size,
        color: visual.color,
        dragging: visual.dragging,
    }
}

pub struct WindowTestHarness {
    pub window: NearestLinkWindow,
    pub ctrl: CanvasController,
    pub nodes: Rc<VecModel<NodeData>>,
}

impl WindowTestHarness {
    pub fn new() -> Self {
        init_testing_backend();
        let window = NearestLinkWindow::new().unwrap();
        window.window().set_size(LogicalSize::new(800.0, 600.0));
        window.show().unwrap();

        let ctrl = CanvasController::new();
        let w = window.as_weak();

        let nodes = Rc::new(VecModel::<NodeData>::default());
        ctrl.bind_nodes(nodes.clone(), node_data);
        window.set_nodes(ModelRc::from(nodes.clone()));

        ctrl.bind_links(move |commands, color, width| {
            if let Some(w) = w.upgrade() {
                w.set_link_commands(commands);
                w.set_link_color(color);
                w.set_link_width(width);
            }
        });

        window.on_canvas_pressed(ctrl.canvas_pressed_callback());
        window.on_node_pressed(ctrl.node_pressed_callback());
        window.on_pointer_moved(ctrl.pointer_moved_callback());
        window.on_pointer_released(ctrl.pointer_released_callback());
        window.on_reset_requested(ctrl.reset_callback());
        window.on_canvas_resized(ctrl.resized_callback());

        ctrl.handle_resized(800.0, 600.0);

        Self { window, ctrl, nodes }
    }

    /// Process pending timers and property changes.
    pub fn pump_events(&self) {
        slint::platform::update_timers_and_animations();
    }

    // === Mouse event helpers ===

    /// Simulate the pointer arriving at a position and pressing there.
    pub fn mouse_down(&self, x: f32, y: f32) {
        self.mouse_move(x, y);
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerPressed {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    pub fn mouse_move(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerMoved {
                position: LogicalPosition::new(x, y),
            });
        self.pump_events();
    }

    pub fn mouse_up(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerReleased {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    /// Simulate a complete click (down + up) at the given position.
    pub fn click(&self, x: f32, y: f32) {
        self.mouse_down(x, y);
        self.mouse_up(x, y);
    }

    /// Press at `from`, move through `to`, release there.
    pub fn drag(&self, from: (f32, f32), to: (f32, f32)) {
        self.mouse_down(from.0, from.1);
        self.mouse_move(to.0, to.1);
        self.mouse_up(to.0, to.1);
    }

    // === Queries ===

    pub fn node_count(&self) -> usize {
        self.nodes.row_count()
    }

    pub fn node_position(&self, id: i32) -> Option<(f32, f32)> {
        (0..self.nodes.row_count())
            .filter_map(|i| self.nodes.row_data(i))
            .find(|node| node.id == id)
            .map(|node| (node.x, node.y))
    }

    pub fn state(&self) -> InteractionState {
        self.ctrl.state()
    }

    /// Link path as the window currently holds it.
    pub fn link_commands(&self) -> String {
        self.window.get_link_commands().to_string()
    }
}
