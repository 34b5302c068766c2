//! Handler für Kamera, Viewport und Hintergrundbild.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Ansicht um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    use_cases::camera::pan(state, delta_screen);
}

/// Zoomt mit optionalem Screen-Fixpunkt.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

/// Lädt ein Hintergrundbild und propagiert Fehler an den Aufrufer.
pub fn load_background_image(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::background::load_background_image(state, path)
}

/// Setzt die Hintergrund-Deckung.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    use_cases::background::set_background_opacity(state, opacity);
}

/// Setzt die Hintergrund-Skalierung.
pub fn set_background_scale(state: &mut AppState, scale: f32) {
    use_cases::background::set_background_scale(state, scale);
}

/// Schaltet die Hintergrund-Sichtbarkeit um.
pub fn toggle_background_visibility(state: &mut AppState) {
    use_cases::background::toggle_background_visibility(state);
}

/// Entfernt das Hintergrundbild.
pub fn clear_background_image(state: &mut AppState) {
    use_cases::background::clear_background_image(state);
}
