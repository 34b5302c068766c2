//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Zoom-Faktor und Pan-Offset in Screen-Pixeln.
///
/// Logische Koordinaten sind das unskalierte, unverschobene System, in dem
/// die Objektgeometrie gespeichert ist; Screen-Koordinaten sind Pixel auf
/// der Zeichenfläche.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Zoom-Faktor (1.0 = normal)
    pub zoom: f32,
    /// Pan-Offset in Screen-Pixeln (nicht zoom-skaliert)
    pub pan_offset: Vec2,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 5.0;

    /// Erstellt eine neue Kamera (Zoom 1.0, kein Offset).
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
        }
    }

    /// Setzt die Ansicht auf den Standardzustand zurück.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }

    /// Verschiebt die Ansicht um ein Screen-Pixel-Delta.
    pub fn pan_by(&mut self, delta_screen: Vec2) {
        self.pan_offset += delta_screen;
    }

    /// Screen → logisch: `(p - pan) / zoom`
    pub fn screen_to_logical(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan_offset) / self.zoom
    }

    /// Logisch → Screen: `p * zoom + pan`
    pub fn logical_to_screen(&self, logical: Vec2) -> Vec2 {
        logical * self.zoom + self.pan_offset
    }

    /// Zoomt um `factor` mit Fixpunkt `around_screen`.
    ///
    /// Der neue Zoom wird auf `[min, max]` geklemmt; das Pan-Offset wird so
    /// nachgezogen, dass der logische Punkt unter `around_screen` vor und
    /// nach dem Zoom auf dieselbe Bildschirmposition abbildet:
    /// `pan' = s - (s - pan) * zoom'/zoom`
    pub fn zoom_around(&mut self, factor: f32, around_screen: Vec2, min: f32, max: f32) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(min, max);
        let ratio = self.zoom / old_zoom;
        self.pan_offset = around_screen - (around_screen - self.pan_offset) * ratio;
    }

    /// Rechnet einen Pixel-Radius in logische Einheiten um.
    ///
    /// Wird für Punkt-Hit-Tests gebraucht, damit die Trefferfläche auf dem
    /// Bildschirm unabhängig vom Zoom gleich groß bleibt.
    pub fn pick_radius_logical(&self, radius_px: f32) -> f32 {
        radius_px / self.zoom
    }

    /// Sichtbarer logischer Bereich für einen Viewport der Größe `size`.
    pub fn visible_logical_bounds(&self, size: Vec2) -> (Vec2, Vec2) {
        (
            self.screen_to_logical(Vec2::ZERO),
            self.screen_to_logical(size),
        )
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
