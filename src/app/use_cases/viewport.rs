//! Use-Case-Funktionen für den Viewport.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
