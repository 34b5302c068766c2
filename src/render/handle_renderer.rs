//! Zeichnet Anker, Handles, Objekt-Beschriftung und Bounding-Box-Hinweise.

use super::to_screen;
use crate::core::{BezierObject, Camera2D, PointKind, SelectedPoint};
use crate::shared::{color32, EditorOptions};

/// Strichlänge der gestrichelten Bounding-Box.
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

/// Zeichnet die volle Detail-Ansicht eines selektierten bzw. in Arbeit
/// befindlichen Objekts: Handle-Linien, Handle-Marker, Anker-Marker
/// (hervorgehoben für den aktiven Punkt) und die Beschriftung.
pub fn draw_details(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    object: &BezierObject,
    selected_point: Option<&SelectedPoint>,
    options: &EditorOptions,
) {
    let points = object.transformed_points();
    let handle_color = color32(options.handle_color);
    let handle_stroke = egui::Stroke::new(1.0, handle_color);
    let anchor_color = color32(options.anchor_color);
    let highlight_color = color32(options.anchor_color_selected);

    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            log::warn!(
                "Renderer: nicht-endlicher Punkt {} in Objekt '{}' übersprungen",
                index,
                object.name
            );
            continue;
        }

        let anchor = to_screen(rect, camera, point.position);
        let handle_in = to_screen(rect, camera, point.handle_in);
        let handle_out = to_screen(rect, camera, point.handle_out);

        // Handle-Linien zuerst, dann Marker darüber
        painter.line_segment([anchor, handle_in], handle_stroke);
        painter.line_segment([anchor, handle_out], handle_stroke);

        let highlight = |kind: PointKind| {
            selected_point.is_some_and(|sp| {
                sp.object_id == object.id && sp.point_index == index && sp.kind == kind
            })
        };

        let handle_radius = options.handle_radius_px;
        painter.circle_filled(
            handle_in,
            handle_radius,
            if highlight(PointKind::HandleIn) {
                highlight_color
            } else {
                handle_color
            },
        );
        painter.circle_filled(
            handle_out,
            handle_radius,
            if highlight(PointKind::HandleOut) {
                highlight_color
            } else {
                handle_color
            },
        );

        let (anchor_radius, fill) = if highlight(PointKind::Main) {
            (options.point_radius_px * 1.25, highlight_color)
        } else {
            (options.point_radius_px, anchor_color)
        };
        painter.circle_filled(anchor, anchor_radius, fill);
        painter.circle_stroke(
            anchor,
            anchor_radius,
            egui::Stroke::new(1.0, egui::Color32::BLACK),
        );
    }

    // Beschriftung am ersten endlichen Punkt
    if let Some(first) = points.iter().find(|p| p.is_finite()) {
        let pos = to_screen(rect, camera, first.position);
        painter.text(
            pos + egui::vec2(0.0, -options.point_radius_px - 6.0),
            egui::Align2::CENTER_BOTTOM,
            &object.name,
            egui::FontId::proportional(13.0),
            color32(options.label_color),
        );
    }
}

/// Zeichnet nur eine gestrichelte Bounding-Box als günstigen Hinweis
/// für nicht selektierte Objekte.
pub fn draw_bbox_hint(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    object: &BezierObject,
    options: &EditorOptions,
) {
    let Some(bbox) = object.bounding_box() else {
        return;
    };

    let min = to_screen(rect, camera, bbox.min);
    let max = to_screen(rect, camera, bbox.max);
    let stroke = egui::Stroke::new(1.0, color32(options.bbox_hint_color));

    let corners = [
        min,
        egui::pos2(max.x, min.y),
        max,
        egui::pos2(min.x, max.y),
        min,
    ];
    for pair in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(
            &[pair[0], pair[1]],
            stroke,
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }
}
