//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use indexmap::IndexSet;

/// Löscht die aktuelle Selektion explizit (Objekte und Einzelpunkt).
pub fn clear_selection(state: &mut AppState) {
    state.selection.ids_mut().clear();
    state.selection.selected_point = None;
    sync_selected_flags(state);
}

/// Spiegelt die Selektionsmenge in die `is_selected`-Flags der Objekte.
///
/// Die Menge ist die Quelle der Wahrheit; das Flag existiert nur, weil das
/// persistierte Objektformat es führt.
pub fn sync_selected_flags(state: &mut AppState) {
    let selected: IndexSet<String> = state.selection.selected_object_ids.as_ref().clone();
    let sketch = state.sketch_mut();
    for object in &mut sketch.objects {
        object.is_selected = selected.contains(&object.id);
    }
}
