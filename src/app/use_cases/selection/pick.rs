//! Use-Case: Objekt-Selektion per Klick (Kurven-Körper-Hit-Test).

use super::helpers::{clear_selection, sync_selected_flags};
use crate::app::AppState;
use glam::Vec2;

/// Selektiert das oberste Objekt unter dem Klickpunkt.
///
/// `additive` (Shift) toggelt das getroffene Objekt in der Selektion,
/// statt sie zu ersetzen. Klick ins Leere leert die Selektion, außer bei
/// additivem Klick (der lässt sie stehen).
pub fn select_object_at(state: &mut AppState, pos: Vec2, threshold: f32, additive: bool) {
    let hit_id = state
        .sketch
        .hit_test_curve(pos, threshold)
        .map(|object| object.id.clone());

    match hit_id {
        Some(id) => {
            if additive {
                let ids = state.selection.ids_mut();
                if !ids.shift_remove(&id) {
                    ids.insert(id);
                }
            } else {
                let ids = state.selection.ids_mut();
                ids.clear();
                ids.insert(id);
            }
            state.selection.selected_point = None;
            sync_selected_flags(state);
        }
        None => {
            if !additive {
                clear_selection(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_two_lines() -> (AppState, String, String) {
        let mut state = AppState::new();
        let first = state
            .sketch
            .make_object()
            .add_point(Vec2::new(0.0, 0.0))
            .add_point(Vec2::new(100.0, 0.0));
        let second = state
            .sketch
            .make_object()
            .add_point(Vec2::new(0.0, 100.0))
            .add_point(Vec2::new(100.0, 100.0));
        let (a, b) = (first.id.clone(), second.id.clone());
        state.sketch_mut().add_object(first);
        state.sketch_mut().add_object(second);
        (state, a, b)
    }

    #[test]
    fn click_selects_hit_object_and_replaces_selection() {
        let (mut state, a, b) = state_with_two_lines();
        state.selection.ids_mut().insert(b.clone());

        select_object_at(&mut state, Vec2::new(50.0, 1.0), 5.0, false);

        assert!(state.selection.selected_object_ids.contains(&a));
        assert!(!state.selection.selected_object_ids.contains(&b));
        assert!(state.sketch.object(&a).unwrap().is_selected);
        assert!(!state.sketch.object(&b).unwrap().is_selected);
    }

    #[test]
    fn additive_click_toggles_membership() {
        let (mut state, a, b) = state_with_two_lines();
        state.selection.ids_mut().insert(b.clone());

        select_object_at(&mut state, Vec2::new(50.0, 1.0), 5.0, true);
        assert!(state.selection.selected_object_ids.contains(&a));
        assert!(state.selection.selected_object_ids.contains(&b));

        select_object_at(&mut state, Vec2::new(50.0, 1.0), 5.0, true);
        assert!(!state.selection.selected_object_ids.contains(&a));
        assert!(state.selection.selected_object_ids.contains(&b));
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let (mut state, a, _) = state_with_two_lines();
        state.selection.ids_mut().insert(a.clone());

        select_object_at(&mut state, Vec2::new(500.0, 500.0), 5.0, false);

        assert!(state.selection.selected_object_ids.is_empty());
        assert!(!state.sketch.object(&a).unwrap().is_selected);
    }

    #[test]
    fn additive_click_on_empty_space_keeps_selection() {
        let (mut state, a, _) = state_with_two_lines();
        state.selection.ids_mut().insert(a.clone());

        select_object_at(&mut state, Vec2::new(500.0, 500.0), 5.0, true);

        assert!(state.selection.selected_object_ids.contains(&a));
    }
}
