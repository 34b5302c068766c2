//! Use-Cases für Punkt-Operationen: Drag, Löschen, Anhängen.

use crate::app::AppState;
use crate::core::{geometry, PointKind, SelectedPoint};
use glam::Vec2;

/// Startet einen Punkt-Drag.
///
/// Für committete Objekte wird der Undo-Snapshot vor der ersten Mutation
/// genommen (ein Undo-Schritt pro Drag). Punkte der Kurve in Arbeit gehören
/// zur Zeichensitzung und erzeugen keinen eigenen Schritt.
pub fn begin_drag_point(state: &mut AppState, point: SelectedPoint) {
    if state.editor.drawing_object_id() != Some(point.object_id.as_str()) {
        state.record_undo_snapshot();
    }
    state.selection.selected_point = Some(point);
}

/// Bewegt den gegriffenen Punkt auf eine logische Zielposition.
///
/// `Main` nimmt beide Handles mit; Handles werden absolut gesetzt. Bei
/// aktiver View-Transformation wird die Cursor-Position zurück in
/// gespeicherte Koordinaten gerechnet, damit der Punkt unter dem Cursor
/// bleibt.
pub fn drag_point_to(state: &mut AppState, pos: Vec2) {
    let Some(selected) = state.selection.selected_point.clone() else {
        return;
    };

    // Kurve in Arbeit: direkt im Werkzeugzustand mutieren
    if state.editor.drawing_object_id() == Some(selected.object_id.as_str()) {
        if let Some(object) = state.editor.drawing.take() {
            state.editor.drawing =
                Some(object.move_point(selected.point_index, selected.kind, pos));
        }
        return;
    }

    let Some(object) = state.sketch.object(&selected.object_id) else {
        return;
    };
    let target = if object.transform.is_identity() {
        pos
    } else {
        let t = &object.transform;
        geometry::inverse_rigid_transform(pos, object.centroid(), t.rotation, t.scale_x, t.scale_y)
    };
    let updated = object.move_point(selected.point_index, selected.kind, target);
    state.sketch_mut().replace_object(updated);
}

/// Beendet den Punkt-Drag. Die Hervorhebung des Punkts bleibt bestehen,
/// bis Escape oder eine neue Selektion sie ersetzt.
pub fn end_drag_point(_state: &mut AppState) {
    // No-op: Snapshot lief beim Drag-Start, Selektion bleibt erhalten
}

/// Löscht einen Punkt aus einem committeten Objekt.
///
/// Abgelehnt (mit Hinweis, Zustand unverändert) wenn danach weniger als
/// 2 Punkte blieben.
pub fn delete_point(state: &mut AppState, object_id: &str, point_index: usize) {
    let Some(object) = state.sketch.object(object_id) else {
        return;
    };
    match object.remove_point(point_index) {
        Some(updated) => {
            state.record_undo_snapshot();
            state.sketch_mut().replace_object(updated);
            state.selection.selected_point = None;
            log::info!("Punkt {} aus Objekt '{}' gelöscht", point_index, object_id);
        }
        None => {
            state.set_status("Punkt löschen abgelehnt: eine Kurve braucht mindestens 2 Punkte");
        }
    }
}

/// Hängt per Doppelklick einen Punkt an ein committetes Objekt an.
pub fn append_point(state: &mut AppState, object_id: &str, pos: Vec2) {
    let Some(updated) = state.sketch.object(object_id).map(|o| o.add_point(pos)) else {
        return;
    };
    let new_index = updated.points.len() - 1;
    state.record_undo_snapshot();
    state.sketch_mut().replace_object(updated);
    state.selection.selected_point = Some(SelectedPoint {
        object_id: object_id.to_string(),
        point_index: new_index,
        kind: PointKind::Main,
    });
}
