//! Painter-Renderer für die Zeichenfläche.
//!
//! Aufgeteilt nach Zuständigkeit: Hintergrundbild, Raster, Kurvenzüge,
//! Handles/Marker und Overlays. Der Renderer ist langlebig und wird pro
//! Frame mit einer frischen `RenderScene` konfiguriert statt neu gebaut;
//! er hält nur die hochgeladene Hintergrund-Textur als GPU-Ressource.

pub mod background_renderer;
pub mod curve_renderer;
pub mod grid_renderer;
pub mod handle_renderer;
pub mod overlay_renderer;

use crate::core::BackgroundImage;
use crate::shared::{color32, RenderScene};

/// Langlebiger Renderer mit Textur-Cache für das Hintergrundbild.
#[derive(Default)]
pub struct Renderer {
    background_texture: Option<egui::TextureHandle>,
}

impl Renderer {
    /// Erstellt einen neuen Renderer ohne Hintergrund-Textur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Hintergrundbild als egui-Textur hoch.
    pub fn set_background(&mut self, ctx: &egui::Context, image: &BackgroundImage) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.pixels,
        );
        self.background_texture = Some(ctx.load_texture(
            "background_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));
    }

    /// Entfernt die Hintergrund-Textur.
    pub fn clear_background(&mut self) {
        self.background_texture = None;
    }

    /// Zeichnet einen kompletten Frame.
    ///
    /// Reihenfolge: Flächenfarbe, Hintergrundbild, Raster, Objekte in
    /// Array-Reihenfolge (Offsets vor Hauptkurve, Details nur für
    /// selektierte bzw. die Kurve in Arbeit), Führungslinie, Overlays.
    /// Das Selektionsrechteck zeichnet die Eingabeschicht selbst.
    pub fn draw_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        let options = &scene.options;

        painter.rect_filled(rect, 0.0, color32(options.canvas_color));

        if scene.background_visible {
            if let Some(texture) = &self.background_texture {
                background_renderer::draw(painter, rect, texture, scene);
            }
        }

        if options.grid_visible {
            grid_renderer::draw(painter, rect, &scene.camera, options);
        }

        for object in &scene.sketch.objects {
            curve_renderer::draw_object(painter, rect, &scene.camera, object);

            if scene.shows_detail(&object.id) {
                handle_renderer::draw_details(
                    painter,
                    rect,
                    &scene.camera,
                    object,
                    scene.selected_point.as_ref(),
                    options,
                );
            } else {
                handle_renderer::draw_bbox_hint(painter, rect, &scene.camera, object, options);
            }
        }

        if let Some(drawing) = &scene.drawing_object {
            curve_renderer::draw_object(painter, rect, &scene.camera, drawing);
            handle_renderer::draw_details(
                painter,
                rect,
                &scene.camera,
                drawing,
                scene.selected_point.as_ref(),
                options,
            );
            overlay_renderer::draw_drawing_guide(painter, rect, scene, drawing);
        }

        overlay_renderer::draw_screen_overlays(painter, rect, scene);
    }
}

/// Rechnet eine logische Position in absolute Screen-Koordinaten um.
pub(crate) fn to_screen(
    rect: egui::Rect,
    camera: &crate::core::Camera2D,
    logical: glam::Vec2,
) -> egui::Pos2 {
    let screen = camera.logical_to_screen(logical);
    egui::pos2(rect.min.x + screen.x, rect.min.y + screen.y)
}
