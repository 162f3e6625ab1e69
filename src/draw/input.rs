use crate::draw::model::{Color, Point, Stroke, StrokeStyle, StrokeView};
use crate::draw::tool::{clamp_thickness, thickness_in_range, ToolSettings};
use serde::{Deserialize, Serialize};

/// How drag updates become render entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// Every move appends a snapshot of the active stroke to the render list.
    #[default]
    Snapshot,
    /// The active stroke is drawn as a preview and appended once on release.
    LivePreview,
}

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    points: Vec<Point>,
    style: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveStroke {
    stroke: Stroke,
    /// Style handle shared by every snapshot of this gesture.
    style_slot: Option<usize>,
    dragging: bool,
}

impl ActiveStroke {
    fn idle(tools: ToolSettings) -> Self {
        Self {
            stroke: Stroke::new(tools.style()),
            style_slot: None,
            dragging: false,
        }
    }
}

/// Completed strokes plus the stroke currently being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSurface {
    mode: CaptureMode,
    clamp: bool,
    tools: ToolSettings,
    active: ActiveStroke,
    completed: Vec<Snapshot>,
    styles: Vec<StrokeStyle>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(ToolSettings::default(), CaptureMode::default())
    }
}

impl DrawingSurface {
    pub fn new(tools: ToolSettings, mode: CaptureMode) -> Self {
        Self {
            mode,
            clamp: false,
            tools,
            active: ActiveStroke::idle(tools),
            completed: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Clamp thickness updates to the slider range instead of storing them as given.
    pub fn with_thickness_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        if clamp {
            self.tools.thickness = clamp_thickness(self.tools.thickness);
            self.active.stroke.style.width = self.tools.thickness;
        }
        self
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn tools(&self) -> ToolSettings {
        self.tools
    }

    pub fn active_stroke(&self) -> &Stroke {
        &self.active.stroke
    }

    pub fn is_dragging(&self) -> bool {
        self.active.dragging
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
        self.update_active_style(|style| style.color = color);
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        if !thickness_in_range(thickness) {
            tracing::warn!(thickness, clamp = self.clamp, "thickness outside 1..=20");
        }
        let thickness = if self.clamp {
            clamp_thickness(thickness)
        } else {
            thickness
        };
        self.tools.thickness = thickness;
        self.update_active_style(|style| style.width = thickness);
    }

    fn update_active_style(&mut self, apply: impl Fn(&mut StrokeStyle)) {
        apply(&mut self.active.stroke.style);
        if let Some(slot) = self.active.style_slot {
            if let Some(style) = self.styles.get_mut(slot) {
                apply(style);
            }
        }
    }

    /// Begins a gesture seeded with `tools`, leaving the ambient settings untouched.
    pub fn begin_stroke(&mut self, tools: ToolSettings) {
        self.active = ActiveStroke {
            stroke: Stroke::new(tools.style()),
            style_slot: None,
            dragging: true,
        };
        tracing::debug!(color = ?tools.color, width = tools.thickness, "stroke started");
    }

    pub fn drag_start(&mut self) {
        if self.active.dragging {
            return;
        }
        self.begin_stroke(self.tools);
    }

    pub fn drag_move(&mut self, point: Point) {
        if !self.active.dragging {
            self.drag_start();
        }
        self.active.stroke.points.push(point);

        if self.mode == CaptureMode::Snapshot {
            let slot = self.style_slot();
            self.completed.push(Snapshot {
                points: self.active.stroke.points.clone(),
                style: slot,
            });
        }
    }

    pub fn drag_end(&mut self) {
        let finished = std::mem::replace(&mut self.active, ActiveStroke::idle(self.tools));
        if !finished.dragging {
            return;
        }

        if self.mode == CaptureMode::LivePreview && !finished.stroke.is_empty() {
            self.styles.push(finished.stroke.style);
            self.completed.push(Snapshot {
                points: finished.stroke.points,
                style: self.styles.len() - 1,
            });
            tracing::debug!(entries = self.completed.len(), "stroke committed");
        } else {
            tracing::debug!(
                points = finished.stroke.points.len(),
                entries = self.completed.len(),
                "stroke finished"
            );
        }
    }

    fn style_slot(&mut self) -> usize {
        if let Some(slot) = self.active.style_slot {
            return slot;
        }
        self.styles.push(self.active.stroke.style);
        let slot = self.styles.len() - 1;
        self.active.style_slot = Some(slot);
        slot
    }

    /// Render entries in paint order, followed by the live preview when one is active.
    pub fn strokes(&self) -> impl Iterator<Item = StrokeView<'_>> + '_ {
        let preview = (self.mode == CaptureMode::LivePreview
            && self.active.dragging
            && !self.active.stroke.is_empty())
        .then(|| StrokeView {
            points: &self.active.stroke.points,
            color: self.active.stroke.style.color,
            width: self.active.stroke.style.width,
        });

        self.completed
            .iter()
            .map(|snapshot| {
                let style = self.styles[snapshot.style];
                StrokeView {
                    points: &snapshot.points,
                    color: style.color,
                    width: style.width,
                }
            })
            .chain(preview)
    }

    /// Drops every stroke and any gesture in progress.
    pub fn clear(&mut self) {
        self.completed.clear();
        self.styles.clear();
        self.active = ActiveStroke::idle(self.tools);
        tracing::info!("canvas cleared");
    }
}
