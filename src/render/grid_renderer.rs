//! Zeichnet das logische Raster, beschnitten auf den sichtbaren Bereich.

use super::to_screen;
use crate::core::Camera2D;
use crate::shared::{color32, EditorOptions};
use glam::Vec2;

/// Zeichnet Rasterlinien mit fester logischer Weite.
///
/// Die Iterationsgrenzen werden aus dem sichtbaren logischen Bereich
/// berechnet — bei großen Pans wird nie über den Viewport hinaus iteriert.
pub fn draw(painter: &egui::Painter, rect: egui::Rect, camera: &Camera2D, options: &EditorOptions) {
    let spacing = options.grid_size;
    if spacing <= 0.0 {
        return;
    }

    let (min, max) = camera.visible_logical_bounds(Vec2::new(rect.width(), rect.height()));
    let stroke = egui::Stroke::new(1.0, color32(options.grid_color));

    let first_x = (min.x / spacing).floor() * spacing;
    let mut x = first_x;
    while x <= max.x {
        let top = to_screen(rect, camera, Vec2::new(x, min.y));
        let bottom = to_screen(rect, camera, Vec2::new(x, max.y));
        painter.line_segment([top, bottom], stroke);
        x += spacing;
    }

    let first_y = (min.y / spacing).floor() * spacing;
    let mut y = first_y;
    while y <= max.y {
        let left = to_screen(rect, camera, Vec2::new(min.x, y));
        let right = to_screen(rect, camera, Vec2::new(max.x, y));
        painter.line_segment([left, right], stroke);
        y += spacing;
    }
}
