//! Visual defaults for the nearest-link canvas.

use slint::Color;

/// Sizes and colours used when placing nodes and stroking links.
///
/// The defaults reproduce the stock canvas: 30px orange nodes on a light
/// purple background, joined by 2px black lines.
///
/// ```
/// use slint_nearest_link::CanvasConfig;
///
/// let config = CanvasConfig::default().with_node_size(40.0).with_link_width(3.0);
/// assert_eq!(config.node_size, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Diameter of newly placed nodes, in pixels
    pub node_size: f32,
    pub node_color: Color,
    pub link_color: Color,
    /// Stroke width of link segments, in pixels
    pub link_width: f32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            node_size: 30.0,
            node_color: Color::from_rgb_u8(0xf9, 0x73, 0x16),
            link_color: Color::from_rgb_u8(0, 0, 0),
            link_width: 2.0,
            background: Color::from_rgb_u8(0xf3, 0xe8, 0xff),
        }
    }
}

impl CanvasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diameter given to nodes placed from now on.
    pub fn with_node_size(mut self, size: f32) -> Self {
        self.node_size = size;
        self
    }

    pub fn with_node_color(mut self, color: Color) -> Self {
        self.node_color = color;
        self
    }

    pub fn with_link_color(mut self, color: Color) -> Self {
        self.link_color = color;
        self
    }

    pub fn with_link_width(mut self, width: f32) -> Self {
        self.link_width = width;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}
