//! Use-Cases für Objekt-Operationen: Löschen und Eigenschaften.

use crate::app::use_cases::selection::helpers::clear_selection;
use crate::app::AppState;
use crate::core::{BezierObject, CurveStyle, TransformSettings};

/// Löscht alle selektierten Objekte (mit Undo-Snapshot).
pub fn delete_selected_objects(state: &mut AppState) {
    if state.selection.selected_object_ids.is_empty() {
        return;
    }
    state.record_undo_snapshot();

    let ids: Vec<String> = state
        .selection
        .selected_object_ids
        .iter()
        .cloned()
        .collect();
    let sketch = state.sketch_mut();
    for id in &ids {
        sketch.remove_object(id);
    }
    clear_selection(state);
    state.set_status(format!("{} Objekt(e) gelöscht", ids.len()));
}

/// Wendet eine pure Objekt-Operation an und ersetzt das Objekt im Sketch.
///
/// Eigenschafts-Änderungen sind keine History-Commit-Punkte; Commits
/// passieren nur bei Drags, Finalisierung und Punkt-Add/-Delete.
fn update_object(
    state: &mut AppState,
    object_id: &str,
    apply: impl FnOnce(&BezierObject) -> BezierObject,
) {
    let Some(object) = state.sketch.object(object_id) else {
        return;
    };
    let updated = apply(object);
    state.sketch_mut().replace_object(updated);
}

/// Benennt ein Objekt um.
pub fn set_name(state: &mut AppState, object_id: &str, name: String) {
    update_object(state, object_id, |o| o.set_name(name));
}

/// Setzt die Anzahl der Kurven-Ebenen.
pub fn set_parallel_count(state: &mut AppState, object_id: &str, count: u32) {
    update_object(state, object_id, |o| o.set_parallel_count(count));
}

/// Setzt den Ebenen-Abstand.
pub fn set_spacing(state: &mut AppState, object_id: &str, spacing: f32) {
    update_object(state, object_id, |o| o.set_spacing(spacing));
}

/// Setzt den Stil einer Ebene.
pub fn set_style(state: &mut AppState, object_id: &str, layer: usize, style: CurveStyle) {
    update_object(state, object_id, |o| o.set_style(layer, style));
}

/// Setzt die View-Transformation eines Objekts.
pub fn set_transform(state: &mut AppState, object_id: &str, transform: TransformSettings) {
    update_object(state, object_id, |o| o.set_transform(transform));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_line() -> (AppState, String) {
        let mut state = AppState::new();
        let object = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(100.0, 0.0));
        let id = object.id.clone();
        state.sketch_mut().add_object(object);
        (state, id)
    }

    #[test]
    fn delete_selected_removes_objects_and_selection() {
        let (mut state, id) = state_with_line();
        state.selection.ids_mut().insert(id.clone());

        delete_selected_objects(&mut state);

        assert_eq!(state.sketch.object_count(), 0);
        assert!(state.selection.selected_object_ids.is_empty());
        assert!(state.can_undo());
    }

    #[test]
    fn delete_with_empty_selection_is_a_noop() {
        let (mut state, _) = state_with_line();
        delete_selected_objects(&mut state);
        assert_eq!(state.sketch.object_count(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn property_setters_replace_object_without_history_commit() {
        let (mut state, id) = state_with_line();

        set_name(&mut state, &id, "Umriss".to_string());
        set_parallel_count(&mut state, &id, 3);
        set_spacing(&mut state, &id, 12.0);
        set_transform(
            &mut state,
            &id,
            TransformSettings {
                rotation: 45.0,
                scale_x: 2.0,
                scale_y: 1.0,
            },
        );

        let object = state.sketch.object(&id).unwrap();
        assert_eq!(object.name, "Umriss");
        assert_eq!(object.curve_config.parallel_count, 3);
        assert_eq!(object.curve_config.spacing, 12.0);
        assert_eq!(object.transform.rotation, 45.0);
        assert!(!state.can_undo());
    }

    #[test]
    fn set_style_on_unknown_object_is_ignored() {
        let (mut state, _) = state_with_line();
        set_style(&mut state, "obj-unbekannt", 0, CurveStyle::default());
        assert_eq!(state.sketch.object_count(), 1);
    }
}
