//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::Vec2;

/// Setzt die Ansicht auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.camera.reset_view();
}

/// Fixpunkt für stufenweisen Zoom: die Viewport-Mitte.
fn viewport_center(state: &AppState) -> Vec2 {
    Vec2::new(
        state.view.viewport_size[0] * 0.5,
        state.view.viewport_size[1] * 0.5,
    )
}

/// Zoomt stufenweise hinein (Fixpunkt Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let center = viewport_center(state);
    state.view.camera.zoom_around(
        state.options.camera_zoom_step,
        center,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt stufenweise heraus (Fixpunkt Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let center = viewport_center(state);
    state.view.camera.zoom_around(
        1.0 / state.options.camera_zoom_step,
        center,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Ansicht um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    state.view.camera.pan_by(delta_screen);
}

/// Zoomt mit optionalem Screen-Fixpunkt (Mausposition).
///
/// Ohne Fixpunkt wird die Viewport-Mitte verwendet, damit auch
/// Shortcut-Zooms die Bildmitte stabil halten.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    let anchor = focus_screen.unwrap_or_else(|| viewport_center(state));
    state.view.camera.zoom_around(
        factor,
        anchor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_view_restores_defaults() {
        let mut state = AppState::new();
        state.view.camera.pan_by(Vec2::new(100.0, 200.0));
        zoom_towards(&mut state, 3.0, None);

        reset_view(&mut state);

        assert_eq!(state.view.camera.zoom, 1.0);
        assert_eq!(state.view.camera.pan_offset, Vec2::ZERO);
    }

    #[test]
    fn zoom_in_increases_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;
        zoom_in(&mut state);
        assert!(state.view.camera.zoom > before);
    }

    #[test]
    fn zoom_out_decreases_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;
        zoom_out(&mut state);
        assert!(state.view.camera.zoom < before);
    }

    #[test]
    fn zoom_stays_clamped_over_long_sequences() {
        let mut state = AppState::new();
        for _ in 0..100 {
            zoom_in(&mut state);
        }
        assert!(state.view.camera.zoom <= state.options.camera_zoom_max);

        for _ in 0..200 {
            zoom_out(&mut state);
        }
        assert!(state.view.camera.zoom >= state.options.camera_zoom_min);
    }

    #[test]
    fn zoom_towards_focus_keeps_logical_point_under_cursor() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        let focus = Vec2::new(400.0, 300.0);
        let logical_before = state.view.camera.screen_to_logical(focus);

        zoom_towards(&mut state, 2.0, Some(focus));

        let screen_after = state.view.camera.logical_to_screen(logical_before);
        assert!((screen_after - focus).length() < 1e-3);
    }

    #[test]
    fn pan_moves_offset() {
        let mut state = AppState::new();
        pan(&mut state, Vec2::new(10.0, -5.0));
        assert_eq!(state.view.camera.pan_offset, Vec2::new(10.0, -5.0));
    }
}
