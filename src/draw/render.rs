use crate::draw::input::DrawingSurface;
use crate::draw::model::{Color, Point, StrokeView};
use eframe::egui::{self, Color32, Pos2, Shape};

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> Color {
    Color::from_rgba_array(color.to_srgba_unmultiplied())
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}

/// Polyline for one stroke entry, translated from canvas-local to screen space.
pub fn stroke_shape(view: StrokeView<'_>, origin: Pos2) -> Shape {
    let points = view
        .points
        .iter()
        .map(|point| to_screen(origin, *point))
        .collect();
    Shape::line(points, egui::Stroke::new(view.width, to_color32(view.color)))
}

/// One shape per entry, in paint order, so later strokes land on top.
pub fn stroke_shapes(surface: &DrawingSurface, origin: Pos2) -> Vec<Shape> {
    surface
        .strokes()
        .map(|view| stroke_shape(view, origin))
        .collect()
}

pub fn paint_surface(painter: &egui::Painter, surface: &DrawingSurface, origin: Pos2) {
    painter.extend(stroke_shapes(surface, origin));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::input::CaptureMode;
    use crate::draw::tool::ToolSettings;

    #[test]
    fn color_conversion_round_trips_opaque_colors() {
        let color = Color::rgba(10, 20, 30, 255);
        assert_eq!(from_color32(to_color32(color)), color);
    }

    #[test]
    fn shapes_follow_insertion_order_and_origin() {
        let mut surface = DrawingSurface::new(
            ToolSettings::new(Color::BLUE, 3.0),
            CaptureMode::Snapshot,
        );
        surface.drag_move(Point::new(1.0, 2.0));
        surface.drag_move(Point::new(3.0, 4.0));
        surface.drag_end();

        let shapes = stroke_shapes(&surface, Pos2::new(100.0, 50.0));
        assert_eq!(shapes.len(), 2);
        match &shapes[1] {
            Shape::Path(path) => {
                assert_eq!(
                    path.points,
                    vec![Pos2::new(101.0, 52.0), Pos2::new(103.0, 54.0)]
                );
                assert!(!path.closed);
            }
            other => panic!("expected a path shape, got {other:?}"),
        }
    }
}
