use crate::draw::model::{Color, StrokeStyle};

pub const THICKNESS_MIN: f32 = 1.0;
pub const THICKNESS_MAX: f32 = 20.0;

/// Color and thickness used to seed the next stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub color: Color,
    pub thickness: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color::RED,
            thickness: THICKNESS_MIN,
        }
    }
}

impl ToolSettings {
    pub fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }

    pub fn style(self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.thickness,
        }
    }
}

pub fn thickness_in_range(thickness: f32) -> bool {
    (THICKNESS_MIN..=THICKNESS_MAX).contains(&thickness)
}

/// NaN maps to the minimum so a clamped surface never stores it.
pub fn clamp_thickness(thickness: f32) -> f32 {
    if thickness.is_nan() {
        return THICKNESS_MIN;
    }
    thickness.clamp(THICKNESS_MIN, THICKNESS_MAX)
}
