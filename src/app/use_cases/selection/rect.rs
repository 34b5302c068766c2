//! Use-Case: Rechteck-Selektion (Drag im Select-Modus).

use super::helpers::{clear_selection, sync_selected_flags};
use crate::app::AppState;
use crate::core::Rect;
use glam::Vec2;

/// Selektiert alle Objekte mit mindestens einem Anker im Rechteck.
///
/// Die Eckpunkte dürfen in beliebiger Reihenfolge kommen (negative
/// Drag-Ausdehnung); `Rect::from_corners` normalisiert.
pub fn select_objects_in_rect(
    state: &mut AppState,
    corner_a: Vec2,
    corner_b: Vec2,
    additive: bool,
) {
    let rect = Rect::from_corners(corner_a, corner_b);
    let hit_ids = state.sketch.objects_in_rect(&rect);

    if !additive {
        clear_selection(state);
    }

    state.selection.ids_mut().extend(hit_ids);
    state.selection.selected_point = None;
    sync_selected_flags(state);
}

/// Selektiert alle Objekte des Sketches.
pub fn select_all(state: &mut AppState) {
    let all_ids: Vec<String> = state.sketch.objects.iter().map(|o| o.id.clone()).collect();
    let count = all_ids.len();
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.extend(all_ids);
    sync_selected_flags(state);
    log::info!("Alle {} Objekte selektiert", count);
}
