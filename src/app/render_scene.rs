//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alle teuren Anteile (Sketch, Selektionsmenge, Hintergrundbild) werden
/// als Arc-Klone übergeben; nur die kleine Kurve in Arbeit wird kopiert.
pub fn build(state: &AppState, viewport_size: [f32; 2], pointer_logical: Option<Vec2>) -> RenderScene {
    RenderScene {
        sketch: state.sketch.clone(),
        camera: state.view.camera.clone(),
        viewport_size,
        selected_object_ids: state.selection.selected_object_ids.clone(),
        selected_point: state.selection.selected_point.clone(),
        drawing_object: state.editor.drawing.clone(),
        pointer_logical,
        active_tool: state.editor.active_tool,
        background_image: state.view.background_image.clone(),
        background_opacity: state.view.background_opacity,
        background_visible: state.view.background_visible,
        background_scale: state.view.background_scale,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn build_shares_sketch_and_selection_arcs() {
        let mut state = AppState::new();
        let object = state
            .sketch
            .make_object()
            .add_point(Vec2::ZERO)
            .add_point(Vec2::new(10.0, 0.0));
        state.sketch_mut().add_object(object);

        let scene = build(&state, [800.0, 600.0], None);

        assert!(Arc::ptr_eq(&scene.sketch, &state.sketch));
        assert!(Arc::ptr_eq(
            &scene.selected_object_ids,
            &state.selection.selected_object_ids
        ));
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
    }

    #[test]
    fn build_carries_drawing_object() {
        let mut state = AppState::new();
        state.editor.drawing = Some(state.sketch.make_object().add_point(Vec2::ZERO));

        let scene = build(&state, [800.0, 600.0], Some(Vec2::new(5.0, 5.0)));

        assert!(scene.drawing_object.is_some());
        assert_eq!(scene.pointer_logical, Some(Vec2::new(5.0, 5.0)));
    }
}
