//! Use-Cases für den Zeichen-Lifecycle einer neuen Kurve.
//!
//! Die Kurve in Arbeit gehört dem Werkzeugzustand. Erst die erfolgreiche
//! Finalisierung nimmt den Undo-Snapshot und committet das Objekt in den
//! Sketch; ein Abbruch verwirft es ohne Spuren in der History.

use super::selection::helpers::sync_selected_flags;
use crate::app::AppState;
use crate::core::{PointKind, SelectedPoint};
use glam::Vec2;

/// Verarbeitet einen Zeichen-Klick: beginnt eine neue Kurve oder hängt
/// einen Punkt an die laufende an.
pub fn click(state: &mut AppState, pos: Vec2) {
    match state.editor.drawing.take() {
        Some(object) => {
            state.editor.drawing = Some(object.add_point(pos));
        }
        None => {
            // Neue Kurve: Selektion weicht dem Zeichenfokus
            super::selection::clear_selection(state);
            let object = state.sketch.make_object().add_point(pos);
            log::info!("Zeichnung begonnen: '{}'", object.name);
            state.editor.drawing = Some(object);
        }
    }
}

/// Armiert den zuletzt gesetzten Punkt der Kurve in Arbeit als Drag-Ziel,
/// damit ein Klick-und-Ziehen den frischen Punkt direkt verschieben kann.
pub fn arm_newest_point(state: &mut AppState) {
    let Some(object) = state.editor.drawing.as_ref() else {
        return;
    };
    if object.points.is_empty() {
        return;
    }
    state.selection.selected_point = Some(SelectedPoint {
        object_id: object.id.clone(),
        point_index: object.points.len() - 1,
        kind: PointKind::Main,
    });
}

/// Finalisiert die Kurve in Arbeit.
///
/// Unter 2 Punkten wird die Anfrage mit sichtbarem Hinweis abgelehnt und
/// die Kurve bleibt in Arbeit — weder stilles Verwerfen noch stilles
/// Akzeptieren.
pub fn finalize(state: &mut AppState) {
    let complete = match state.editor.drawing.as_ref() {
        Some(object) => object.is_complete(),
        None => return,
    };
    if !complete {
        state.set_status("Finalisieren abgelehnt: eine Kurve braucht mindestens 2 Punkte");
        return;
    }

    state.record_undo_snapshot();
    if let Some(object) = state.editor.drawing.take() {
        let id = object.id.clone();
        let name = object.name.clone();
        let point_count = object.points.len();
        state.sketch_mut().add_object(object);

        let ids = state.selection.ids_mut();
        ids.clear();
        ids.insert(id);
        state.selection.selected_point = None;
        sync_selected_flags(state);

        state.set_status(format!("'{}' mit {} Punkten angelegt", name, point_count));
    }
}

/// Verwirft die Kurve in Arbeit (Escape).
pub fn cancel(state: &mut AppState) {
    if let Some(object) = state.editor.drawing.take() {
        state.selection.selected_point = None;
        log::info!("Zeichnung verworfen: '{}'", object.name);
    }
}
