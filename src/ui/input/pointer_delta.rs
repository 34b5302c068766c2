//! Pointer-Delta-Verarbeitung: Kamera-Pan, Gruppen-Move, Punkt-Drag.

use super::{screen_pos_to_logical, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für die laufende Geste.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if self.drag_selection.is_some() {
            // Während Rect-Selektion keine Pan/Move-Events senden.
        } else if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::PointDrag => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        let pos = screen_pos_to_logical(pointer_pos, ctx.response, ctx.camera);
                        events.push(AppIntent::PointDragMoved { pos });
                    }
                }
                PrimaryDragMode::GroupMove
                    if !ctx.selection.selected_object_ids.is_empty() =>
                {
                    // Screen-Delta → logisches Delta
                    let delta_logical =
                        Vec2::new(pointer_delta.x, pointer_delta.y) / ctx.camera.zoom;
                    events.push(AppIntent::MoveSelectedRequested { delta_logical });
                }
                PrimaryDragMode::CameraPan => {
                    events.push(AppIntent::CameraPan {
                        delta_screen: Vec2::new(pointer_delta.x, pointer_delta.y),
                    });
                }
                PrimaryDragMode::GroupMove | PrimaryDragMode::None => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle) {
            events.push(AppIntent::CameraPan {
                delta_screen: Vec2::new(pointer_delta.x, pointer_delta.y),
            });
        }
    }
}
