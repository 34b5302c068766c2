//! Overlays: Führungslinie beim Zeichnen und Screen-feste Anzeigen.

use super::to_screen;
use crate::app::EditorTool;
use crate::core::BezierObject;
use crate::shared::{color32, RenderScene};

/// Zeichnet die gestrichelte Führungslinie vom letzten Anker zur
/// Cursorposition plus den Punktzähler der laufenden Zeichnung.
pub fn draw_drawing_guide(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    drawing: &BezierObject,
) {
    let Some(pointer) = scene.pointer_logical else {
        return;
    };
    let Some(last) = drawing.points.last().filter(|p| p.is_finite()) else {
        return;
    };

    let from = to_screen(rect, &scene.camera, last.position);
    let to = to_screen(rect, &scene.camera, pointer);
    let stroke = egui::Stroke::new(1.0, color32(scene.options.guide_color));
    painter.extend(egui::Shape::dashed_line(&[from, to], stroke, 6.0, 4.0));

    painter.text(
        to + egui::vec2(12.0, -12.0),
        egui::Align2::LEFT_BOTTOM,
        format!("{} Punkt(e)", drawing.points.len()),
        egui::FontId::proportional(12.0),
        color32(scene.options.guide_color),
    );
}

/// Zeichnet Screen-feste Overlays (unabhängig von Zoom/Pan): Zoom-Prozent,
/// Modus-Label und die Cursorposition in logischen Koordinaten.
pub fn draw_screen_overlays(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let color = color32(scene.options.label_color);
    let font = egui::FontId::proportional(12.0);

    let mode = match scene.active_tool {
        EditorTool::Select => "Auswählen",
        EditorTool::Draw => "Zeichnen",
    };
    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("{:.0} %  ·  {}", scene.camera.zoom * 100.0, mode),
        font.clone(),
        color,
    );

    if let Some(pointer) = scene.pointer_logical {
        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("({:.1}, {:.1})", pointer.x, pointer.y),
            font,
            color,
        );
    }
}
