use crate::draw::input::DrawingSurface;
use crate::draw::model::Point;
use crate::draw::render::paint_surface;
use eframe::egui::{self, Color32, Pos2, Sense};

pub const MIN_CANVAS_SIZE: f32 = 400.0;

/// Pointer events the canvas forwards to the surface for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    DragStart,
    DragMove(Point),
    DragEnd,
}

pub fn to_canvas_point(origin: Pos2, pos: Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}

pub fn apply_event(surface: &mut DrawingSurface, event: CanvasEvent) {
    match event {
        CanvasEvent::DragStart => surface.drag_start(),
        CanvasEvent::DragMove(point) => surface.drag_move(point),
        CanvasEvent::DragEnd => surface.drag_end(),
    }
}

fn collect_events(response: &egui::Response, origin: Pos2) -> Vec<CanvasEvent> {
    let mut events = Vec::new();
    let pointer = response
        .interact_pointer_pos()
        .map(|pos| to_canvas_point(origin, pos));

    if response.drag_started() {
        events.push(CanvasEvent::DragStart);
        // The press position counts as the first point of the path.
        if let Some(point) = pointer {
            events.push(CanvasEvent::DragMove(point));
        }
    } else if response.dragged() && response.drag_delta() != egui::Vec2::ZERO {
        if let Some(point) = pointer {
            events.push(CanvasEvent::DragMove(point));
        }
    }
    if response.drag_stopped() {
        events.push(CanvasEvent::DragEnd);
    }
    events
}

pub fn show(ui: &mut egui::Ui, surface: &mut DrawingSurface) -> egui::Response {
    let available = ui.available_size();
    let size = egui::vec2(
        available.x.max(MIN_CANVAS_SIZE),
        available.y.max(MIN_CANVAS_SIZE),
    );
    let (response, painter) = ui.allocate_painter(size, Sense::drag());
    let origin = response.rect.min;

    for event in collect_events(&response, origin) {
        apply_event(surface, event);
    }

    painter.rect_filled(response.rect, 4.0, Color32::WHITE);
    paint_surface(&painter.with_clip_rect(response.rect), surface, origin);
    response
}
