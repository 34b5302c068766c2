//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use glam::Vec2;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection.selected_object_ids != state.selection.selected_object_ids {
        let snap = Snapshot {
            sketch: state.sketch.clone(),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Selektiert das oberste Objekt unter dem Klickpunkt.
pub fn select_object_at(state: &mut AppState, pos: Vec2, threshold: f32, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_object_at(state, pos, threshold, additive);
    record_if_selection_changed(state, old);
}

/// Selektiert Objekte innerhalb eines Rechtecks.
pub fn select_in_rect(state: &mut AppState, corner_a: Vec2, corner_b: Vec2, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_objects_in_rect(state, corner_a, corner_b, additive);
    record_if_selection_changed(state, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, old);
}

/// Selektiert alle Objekte.
pub fn select_all(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::select_all(state);
    record_if_selection_changed(state, old);
}

/// Startet einen Move-Lifecycle (nimmt Undo-Snapshot auf).
pub fn begin_move(state: &mut AppState) {
    if !state.selection.selected_object_ids.is_empty() {
        state.record_undo_snapshot();
    }
}

/// Verschiebt alle selektierten Objekte um ein Delta.
pub fn move_selected(state: &mut AppState, delta_logical: Vec2) {
    use_cases::selection::move_selected_objects(state, delta_logical);
}
