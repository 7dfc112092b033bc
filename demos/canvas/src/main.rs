use slint::{ComponentHandle, ModelRc, VecModel};
use slint_nearest_link::{CanvasController, NodeVisual};
use std::rc::Rc;

slint::include_modules!();

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

fn main() -> Result<(), slint::PlatformError> {
    let window = NearestLinkWindow::new()?;
    let ctrl = CanvasController::new();
    let w = window.as_weak();

    window.set_canvas_background(ctrl.config().background);

    // Node visuals - kept in sync after every event
    let nodes = Rc::new(VecModel::<NodeData>::default());
    ctrl.bind_nodes(nodes.clone(), node_data);
    window.set_nodes(ModelRc::from(nodes));

    // Links - one path for all segments
    ctrl.bind_links(move |commands, color, width| {
        if let Some(w) = w.upgrade() {
            w.set_link_commands(commands);
            w.set_link_color(color);
            w.set_link_width(width);
        }
    });

    // Pointer input
    window.on_canvas_pressed(ctrl.canvas_pressed_callback());
    window.on_node_pressed(ctrl.node_pressed_callback());
    window.on_pointer_moved(ctrl.pointer_moved_callback());
    window.on_pointer_released(ctrl.pointer_released_callback());

    // Chrome
    window.on_reset_requested(ctrl.reset_callback());
    window.on_canvas_resized(ctrl.resized_callback());

    ctrl.handle_resized(window.get_canvas_width(), window.get_canvas_height());
    window.run()
}
