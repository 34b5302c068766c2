//! Handler für Datei-I/O (JSON-Entwürfe).

use crate::app::use_cases;
use crate::app::AppState;

/// Legt einen neuen, leeren Entwurf an.
pub fn new_sketch(state: &mut AppState) {
    use_cases::file_io::new_sketch(state);
}

/// Fordert den Öffnen-Dialog an.
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Fordert den Speichern-Dialog an.
pub fn request_save(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt einen Entwurf und propagiert Fehler an den Aufrufer.
pub fn load(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::load_sketch(state, path)
}

/// Speichert den Entwurf (None = aktueller Pfad).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_sketch(state, path)
}
