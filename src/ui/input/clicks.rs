//! Klick-Events: Einfach-/Doppel-Klick, Rechtsklick-Finalisierung.

use super::{screen_pos_to_logical, InputState, PrimaryDragMode, ViewportContext};
use crate::app::{AppIntent, EditorTool};

impl InputState {
    /// Verarbeitet Einfach-, Doppel- und Rechtsklicks im Viewport.
    pub(crate) fn handle_clicks(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let pos = screen_pos_to_logical(pointer_pos, ctx.response, ctx.camera);
                // Prioritätsauflösung (Finalisieren / Punkt löschen / Punkt
                // anhängen) passiert im Intent-Mapping mit App-Zustand
                events.push(AppIntent::DoubleClickRequested { pos });
            }

            self.primary_drag_mode = PrimaryDragMode::None;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let pos = screen_pos_to_logical(pointer_pos, ctx.response, ctx.camera);

                // Kurven-Körper hat Vorrang vor dem Punktesetzen — dieselbe
                // Auflösungsreihenfolge wie beim Drag-Start
                let body_threshold = ctx
                    .camera
                    .pick_radius_logical(ctx.options.curve_hit_threshold_px);
                let body_hit = ctx.sketch.hit_test_curve(pos, body_threshold).is_some();

                if ctx.active_tool == EditorTool::Draw && !body_hit {
                    // Zeichenmodus: Kurve beginnen oder Punkt anhängen
                    events.push(AppIntent::DrawingClickRequested { pos });
                } else {
                    // Standard-Selektion (Klick ins Leere deselektiert)
                    events.push(AppIntent::ObjectPickRequested {
                        pos,
                        additive: modifiers.shift,
                    });
                }
            }

            self.primary_drag_mode = PrimaryDragMode::None;
        }

        // Rechtsklick: System-Kontextmenü bleibt unterdrückt (es wird keins
        // geöffnet); während des Zeichnens finalisiert er die Kurve.
        if ctx.response.secondary_clicked() && ctx.drawing.is_some() {
            events.push(AppIntent::DrawingFinalizeRequested);
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
