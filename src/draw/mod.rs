pub mod input;
pub mod model;
pub mod render;
pub mod tool;

pub use input::{CaptureMode, DrawingSurface};
pub use model::{Color, Point, Stroke, StrokeStyle, StrokeView};
pub use tool::{ToolSettings, THICKNESS_MAX, THICKNESS_MIN};
