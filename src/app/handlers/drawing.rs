//! Handler für den Zeichen-Lifecycle.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Verarbeitet einen Zeichen-Klick.
pub fn click(state: &mut AppState, pos: Vec2) {
    use_cases::drawing::click(state, pos);
}

/// Armiert den zuletzt gesetzten Punkt als Drag-Ziel.
pub fn arm_newest_point(state: &mut AppState) {
    use_cases::drawing::arm_newest_point(state);
}

/// Finalisiert die Kurve in Arbeit.
pub fn finalize(state: &mut AppState) {
    use_cases::drawing::finalize(state);
}

/// Verwirft die Kurve in Arbeit.
pub fn cancel(state: &mut AppState) {
    use_cases::drawing::cancel(state);
}
