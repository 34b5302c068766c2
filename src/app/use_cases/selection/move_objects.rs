//! Use-Case: Verschieben selektierter Objekte (Gruppen-Drag).

use crate::app::AppState;
use glam::Vec2;

/// Verschiebt alle selektierten Objekte um den gegebenen logischen Offset.
///
/// Das ist der einzige Pfad, der gespeicherte Punktkoordinaten dauerhaft
/// verändert: die Translation wird in Anker und Handles committet,
/// Rotation/Skalierung bleiben reine View-Transformation.
pub fn move_selected_objects(state: &mut AppState, delta_logical: Vec2) {
    if delta_logical == Vec2::ZERO || state.selection.selected_object_ids.is_empty() {
        return;
    }

    let selected = state.selection.selected_object_ids.clone();
    let sketch = state.sketch_mut();
    let updated: Vec<_> = sketch
        .objects
        .iter()
        .filter(|o| selected.contains(&o.id))
        .map(|o| o.translate(delta_logical))
        .collect();
    for object in updated {
        sketch.replace_object(object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_translates_all_selected_objects() {
        let mut state = AppState::new();
        let first = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(10.0, 0.0));
        let second = state
            .sketch
            .make_object()
            .add_point(Vec2::new(100.0, 0.0))
            .add_point(Vec2::new(110.0, 0.0));
        let first_id = first.id.clone();
        let second_id = second.id.clone();
        state.sketch_mut().add_object(first);
        state.sketch_mut().add_object(second);
        state.selection.ids_mut().insert(first_id.clone());
        state.selection.ids_mut().insert(second_id.clone());

        move_selected_objects(&mut state, Vec2::new(2.0, 3.0));

        let first = state.sketch.object(&first_id).unwrap();
        let second = state.sketch.object(&second_id).unwrap();
        assert_eq!(first.points[0].position, Vec2::new(2.0, 3.0));
        assert_eq!(second.points[1].position, Vec2::new(112.0, 3.0));
        // Handles wandern mit
        assert_eq!(
            first.points[0].handle_out,
            Vec2::new(2.0 + crate::core::DEFAULT_HANDLE_OFFSET, 3.0)
        );
    }

    #[test]
    fn unselected_objects_stay_put() {
        let mut state = AppState::new();
        let still = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(10.0, 0.0));
        let still_id = still.id.clone();
        state.sketch_mut().add_object(still);

        move_selected_objects(&mut state, Vec2::new(5.0, 5.0));

        assert_eq!(
            state.sketch.object(&still_id).unwrap().points[0].position,
            Vec2::ZERO
        );
    }
}
