//! Rect-Selektion: Zustand und Overlay-Painting.

use crate::shared::{color32, EditorOptions};

/// Zustand einer aktiven Rect-Selektion.
#[derive(Debug, Clone)]
pub(crate) struct DragSelection {
    /// Additive Selektion (Shift gedrückt) – erweitert statt zu ersetzen
    pub additive: bool,
    /// Startposition der Drag-Aktion in Screen-Koordinaten
    pub start_screen: egui::Pos2,
    /// Aktuelle Drag-Position in Screen-Koordinaten
    pub current_screen: egui::Pos2,
}

/// Seitenlänge der Eck-Griffe des Selektionsrechtecks.
const CORNER_HANDLE_SIZE: f32 = 6.0;

/// Zeichnet das Rect-Selektion-Overlay (halbtransparent, mit Eck-Griffen).
pub(super) fn draw_drag_selection_overlay(
    selection: Option<&DragSelection>,
    ui: &egui::Ui,
    response: &egui::Response,
    options: &EditorOptions,
) {
    let Some(selection) = selection else {
        return;
    };

    let fill = color32(options.selection_fill_color);
    let stroke_color = color32(options.selection_stroke_color);
    let stroke = egui::Stroke::new(1.5, stroke_color);
    let painter = ui.painter();

    let rect = egui::Rect::from_two_pos(selection.start_screen, selection.current_screen)
        .intersect(response.rect);
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);

    for corner in [
        rect.left_top(),
        rect.right_top(),
        rect.left_bottom(),
        rect.right_bottom(),
    ] {
        let handle = egui::Rect::from_center_size(
            corner,
            egui::Vec2::splat(CORNER_HANDLE_SIZE),
        );
        painter.rect_filled(handle, 1.0, stroke_color);
    }
}
