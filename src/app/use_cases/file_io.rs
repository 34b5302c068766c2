//! Use-Cases für Laden und Speichern des Entwurfs (JSON-Vertrag).

use crate::app::use_cases::selection::helpers::clear_selection;
use crate::app::AppState;
use crate::core::Sketch;
use anyhow::Context;
use std::sync::Arc;

/// Legt einen neuen, leeren Entwurf an (mit Undo-Snapshot).
pub fn new_sketch(state: &mut AppState) {
    if state.sketch.object_count() > 0 {
        state.record_undo_snapshot();
    }
    state.sketch = Arc::new(Sketch::new());
    clear_selection(state);
    state.editor.drawing = None;
    state.ui.current_file_path = None;
    state.set_status("Neuer Entwurf");
}

/// Lädt einen Entwurf aus einer JSON-Datei.
///
/// Der vorherige Zustand landet als Undo-Schritt in der History; bei
/// Lesefehlern bleibt der Zustand unverändert.
pub fn load_sketch(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Entwurf laden fehlgeschlagen: {}", path))?;
    let sketch = Sketch::from_json(&content)
        .with_context(|| format!("Entwurf-JSON ungültig: {}", path))?;

    state.record_undo_snapshot();
    state.sketch = Arc::new(sketch);
    clear_selection(state);
    state.editor.drawing = None;
    state.ui.current_file_path = Some(path.to_string());
    state.set_status(format!(
        "Geladen: {} ({} Objekte)",
        path,
        state.sketch.object_count()
    ));
    Ok(())
}

/// Speichert den Entwurf als JSON.
///
/// Ohne Pfad (weder übergeben noch gemerkt) wird stattdessen der
/// Speichern-Dialog angefordert. Die Kurve in Arbeit wird nicht
/// mitgespeichert — unfertige Objekte sind nicht persistierbar.
pub fn save_sketch(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = match path.or_else(|| state.ui.current_file_path.clone()) {
        Some(p) => p,
        None => {
            state.ui.show_save_file_dialog = true;
            return Ok(());
        }
    };

    let json = state.sketch.to_json()?;
    std::fs::write(&target, json)
        .with_context(|| format!("Entwurf speichern fehlgeschlagen: {}", target))?;
    state.ui.current_file_path = Some(target.clone());
    state.set_status(format!("Gespeichert: {}", target));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut state = AppState::new();
        let object = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(100.0, 0.0));
        state.sketch_mut().add_object(object);

        let path = temp_path("bezier_curve_studio_test_sketch.json");
        save_sketch(&mut state, Some(path.display().to_string())).expect("speicherbar");

        let mut fresh = AppState::new();
        load_sketch(&mut fresh, &path.display().to_string()).expect("ladbar");
        assert_eq!(fresh.sketch.object_count(), 1);
        assert_eq!(fresh.sketch.objects[0].points.len(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_without_any_path_requests_dialog() {
        let mut state = AppState::new();
        save_sketch(&mut state, None).expect("kein Fehler");
        assert!(state.ui.show_save_file_dialog);
    }

    #[test]
    fn load_error_keeps_state_unchanged() {
        let mut state = AppState::new();
        let object = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(1.0, 0.0));
        state.sketch_mut().add_object(object);

        let result = load_sketch(&mut state, "/gibt/es/nicht.json");

        assert!(result.is_err());
        assert_eq!(state.sketch.object_count(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn new_sketch_clears_objects_with_undo_step() {
        let mut state = AppState::new();
        let object = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(1.0, 0.0));
        state.sketch_mut().add_object(object);

        new_sketch(&mut state);

        assert_eq!(state.sketch.object_count(), 0);
        assert!(state.can_undo());
    }
}
