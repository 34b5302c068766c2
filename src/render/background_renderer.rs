//! Zeichnet das Hintergrundbild hinter Raster und Kurven.

use crate::shared::RenderScene;

/// Zeichnet die Hintergrund-Textur eingepasst in den Viewport.
///
/// Das Bild wird unter Erhalt des Seitenverhältnisses in die Fläche
/// eingepasst, mit dem expliziten Skalierungsfaktor aus dem View-State
/// multipliziert, zentriert und mit der Deckung überblendet. Es hängt
/// bewusst nicht an Zoom/Pan — es dient als Pausvorlage der Fläche.
pub fn draw(
    painter: &egui::Painter,
    rect: egui::Rect,
    texture: &egui::TextureHandle,
    scene: &RenderScene,
) {
    let texture_size = texture.size_vec2();
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return;
    }

    let fit = (rect.width() / texture_size.x)
        .min(rect.height() / texture_size.y)
        .max(f32::EPSILON);
    let size = texture_size * fit * scene.background_scale;
    let image_rect = egui::Rect::from_center_size(rect.center(), size);

    let opacity = scene.background_opacity.clamp(0.0, 1.0);
    let tint = egui::Color32::WHITE.gamma_multiply(opacity);

    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}
