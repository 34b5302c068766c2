//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Fordert den Hintergrundbild-Dialog an.
pub fn request_background_dialog(state: &mut AppState) {
    state.ui.show_background_dialog = true;
}
