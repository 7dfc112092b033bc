//! Drawing surfaces that links are stroked onto.
//!
//! The renderer only needs to clear the surface and draw straight segments.
//! [`PathCommandSurface`] turns those segments into SVG path commands for a
//! Slint `Path` element; [`RecordingSurface`] keeps them as plain data.

use crate::store::Point;
use slint::{Color, SharedString};
use std::fmt::Write;

/// Minimal 2D drawing contract used by [`LinkRenderer`](crate::LinkRenderer).
///
/// Coordinates are pixels with the origin at the top-left and y growing downward.
pub trait DrawingSurface {
    /// Resize the drawable area. Implementations may drop their content.
    fn resize(&mut self, width: f32, height: f32);
    /// Erase everything drawn so far.
    fn clear(&mut self);
    /// Stroke a straight segment from `from` to `to`.
    fn draw_segment(&mut self, from: Point, to: Point, stroke_width: f32, color: Color);
}

/// A stroked segment as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub stroke_width: f32,
    pub color: Color,
}

/// Surface that records what is drawn on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    segments: Vec<Segment>,
    clear_count: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Segments drawn since the last clear, in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl DrawingSurface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.segments.clear();
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.clear_count += 1;
    }

    fn draw_segment(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        self.segments.push(Segment {
            from,
            to,
            stroke_width,
            color,
        });
    }
}

/// Surface that builds SVG path commands (`"M x1 y1 L x2 y2 ..."`).
///
/// A Slint `Path` takes a single stroke, so the colour and width of the last
/// segment drawn are reported for the whole path.
#[derive(Debug, Clone)]
pub struct PathCommandSurface {
    width: f32,
    height: f32,
    commands: String,
    stroke_width: f32,
    color: Color,
}

impl Default for PathCommandSurface {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            commands: String::new(),
            stroke_width: 0.0,
            color: Color::default(),
        }
    }
}

impl PathCommandSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Path commands for everything drawn since the last clear.
    pub fn commands(&self) -> &str {
        &self.commands
    }

    pub fn shared_commands(&self) -> SharedString {
        SharedString::from(self.commands.as_str())
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl DrawingSurface for PathCommandSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_segment(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        if !self.commands.is_empty() {
            self.commands.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(self.commands, "M {} {} L {} {}", from.x, from.y, to.x, to.y);
        self.stroke_width = stroke_width;
        self.color = color;
    }
}
