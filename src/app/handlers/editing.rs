//! Handler für Punkt- und Objekt-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveStyle, SelectedPoint, TransformSettings};
use glam::Vec2;

/// Startet einen Punkt-Drag.
pub fn begin_drag_point(state: &mut AppState, point: SelectedPoint) {
    use_cases::editing::points::begin_drag_point(state, point);
}

/// Bewegt den gegriffenen Punkt.
pub fn drag_point_to(state: &mut AppState, pos: Vec2) {
    use_cases::editing::points::drag_point_to(state, pos);
}

/// Beendet den Punkt-Drag.
pub fn end_drag_point(state: &mut AppState) {
    use_cases::editing::points::end_drag_point(state);
}

/// Löscht einen Punkt (≥ 2 müssen bleiben).
pub fn delete_point(state: &mut AppState, object_id: &str, point_index: usize) {
    use_cases::editing::points::delete_point(state, object_id, point_index);
}

/// Hängt einen Punkt an ein committetes Objekt an.
pub fn append_point(state: &mut AppState, object_id: &str, pos: Vec2) {
    use_cases::editing::points::append_point(state, object_id, pos);
}

/// Löscht alle selektierten Objekte.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::objects::delete_selected_objects(state);
}

/// Benennt ein Objekt um.
pub fn set_name(state: &mut AppState, object_id: &str, name: String) {
    use_cases::editing::objects::set_name(state, object_id, name);
}

/// Setzt die Anzahl der Kurven-Ebenen.
pub fn set_parallel_count(state: &mut AppState, object_id: &str, count: u32) {
    use_cases::editing::objects::set_parallel_count(state, object_id, count);
}

/// Setzt den Ebenen-Abstand.
pub fn set_spacing(state: &mut AppState, object_id: &str, spacing: f32) {
    use_cases::editing::objects::set_spacing(state, object_id, spacing);
}

/// Setzt den Stil einer Ebene.
pub fn set_style(state: &mut AppState, object_id: &str, layer: usize, style: CurveStyle) {
    use_cases::editing::objects::set_style(state, object_id, layer, style);
}

/// Setzt die View-Transformation eines Objekts.
pub fn set_transform(state: &mut AppState, object_id: &str, transform: TransformSettings) {
    use_cases::editing::objects::set_transform(state, object_id, transform);
}
