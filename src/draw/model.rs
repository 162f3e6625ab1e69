use serde::{Deserialize, Serialize};

/// Canvas-local coordinate. Any finite value is accepted, including points
/// outside the visible canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(255, 59, 48, 255);
    pub const BLUE: Color = Color::rgba(0, 122, 255, 255);
    pub const GREEN: Color = Color::rgba(52, 199, 89, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_rgba_array(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            width: 1.0,
        }
    }
}

/// One continuous freehand path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub style: StrokeStyle,
}

impl Stroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn width(&self) -> f32 {
        self.style.width
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Read-only view of a renderable stroke entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeView<'a> {
    pub points: &'a [Point],
    pub color: Color,
    pub width: f32,
}
