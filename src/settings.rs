use crate::draw::input::CaptureMode;
use crate::draw::model::Color;
use crate::draw::tool::ToolSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.json";
pub const MAX_TOAST_DURATION: f32 = 600.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional path of a log file. Logs go to stdout when unset.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Initial inner size of the window.
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Color selected when the app starts.
    #[serde(default = "default_color")]
    pub default_color: Color,
    /// Thickness selected when the app starts.
    #[serde(default = "default_thickness")]
    pub default_thickness: f32,
    /// Clamp thickness changes to the slider range `1..=20`.
    #[serde(default)]
    pub clamp_thickness: bool,
    #[serde(default)]
    pub capture_mode: CaptureMode,
    /// Swatches shown next to the color picker.
    #[serde(default = "default_quick_colors")]
    pub quick_colors: Vec<Color>,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
}

fn default_window_size() -> (f32, f32) {
    (480.0, 900.0)
}

fn default_color() -> Color {
    Color::RED
}

fn default_thickness() -> f32 {
    1.0
}

fn default_quick_colors() -> Vec<Color> {
    vec![Color::BLACK, Color::RED, Color::BLUE, Color::GREEN]
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

/// Non-finite or non-positive durations fall back to the default; large ones
/// are capped so `Duration::from_secs_f64` never overflows.
pub fn sanitize_toast_duration(seconds: f32) -> f32 {
    if !seconds.is_finite() || seconds <= 0.0 {
        tracing::warn!(seconds, "invalid toast duration, using default");
        return default_toast_duration();
    }
    seconds.min(MAX_TOAST_DURATION)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            default_color: default_color(),
            default_thickness: default_thickness(),
            clamp_thickness: false,
            capture_mode: CaptureMode::default(),
            quick_colors: default_quick_colors(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
        }
    }
}

impl Settings {
    /// Missing or empty files yield the defaults; malformed JSON is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut loaded: Settings = serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))?;
        loaded.sanitize();
        Ok(loaded)
    }

    /// Replaces values that would make the UI panic with usable ones.
    pub fn sanitize(&mut self) {
        self.toast_duration = sanitize_toast_duration(self.toast_duration);
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))?;
        Ok(())
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings::new(self.default_color, self.default_thickness)
    }
}
