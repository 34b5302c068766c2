//! Use-Cases für das Hintergrundbild.

use crate::app::AppState;
use crate::core::BackgroundImage;
use std::path::Path;
use std::sync::Arc;

/// Lädt ein Hintergrundbild von der Platte.
///
/// Ein Dekodier-Fehler ist nicht fatal: er wird geloggt, der Zustand
/// bleibt "kein Hintergrundbild".
pub fn load_background_image(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let image = BackgroundImage::load_from_file(Path::new(path))?;
    state.view.background_image = Some(Arc::new(image));
    state.view.background_opacity = state.options.background_opacity_default;
    state.view.background_scale = 1.0;
    state.view.background_visible = true;
    state.view.background_dirty = true;
    Ok(())
}

/// Setzt die Hintergrund-Deckung (geklemmt auf [0, 1]).
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    state.view.background_opacity = opacity.clamp(0.0, 1.0);
}

/// Setzt die Hintergrund-Skalierung (nie kleiner als 5 %).
pub fn set_background_scale(state: &mut AppState, scale: f32) {
    state.view.background_scale = scale.max(0.05);
}

/// Schaltet die Hintergrund-Sichtbarkeit um.
pub fn toggle_background_visibility(state: &mut AppState) {
    state.view.background_visible = !state.view.background_visible;
}

/// Entfernt das Hintergrundbild.
pub fn clear_background_image(state: &mut AppState) {
    if state.view.background_image.take().is_some() {
        state.view.background_dirty = true;
        log::info!("Hintergrundbild entfernt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_clamped() {
        let mut state = AppState::new();
        set_background_opacity(&mut state, 3.0);
        assert_eq!(state.view.background_opacity, 1.0);
        set_background_opacity(&mut state, -1.0);
        assert_eq!(state.view.background_opacity, 0.0);
    }

    #[test]
    fn scale_has_a_floor() {
        let mut state = AppState::new();
        set_background_scale(&mut state, 0.0);
        assert!(state.view.background_scale >= 0.05);
    }

    #[test]
    fn load_failure_leaves_state_unchanged() {
        let mut state = AppState::new();
        let result = load_background_image(&mut state, "/gibt/es/nicht.png");
        assert!(result.is_err());
        assert!(state.view.background_image.is_none());
        assert!(!state.view.background_dirty);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = AppState::new();
        assert!(state.view.background_visible);
        toggle_background_visibility(&mut state);
        assert!(!state.view.background_visible);
    }
}
