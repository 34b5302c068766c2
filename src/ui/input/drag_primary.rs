//! Drag-Start/-Ende: Punkt-Drag, Gruppen-Move, Kamera-Pan, Rect-Selektion.

use super::{screen_pos_to_logical, DragSelection, InputState, PrimaryDragMode, ViewportContext};
use crate::app::{AppIntent, EditorTool};
use crate::core::sketch::hit_test_object_points;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus.
    ///
    /// Auflösungsreihenfolge bei gedrückter Primärtaste:
    /// 1. Leertaste gehalten → Kamera-Pan
    /// 2. Anker/Handle getroffen (Kurve in Arbeit zuerst, dann Sketch) → Punkt-Drag
    /// 3. Kurven-Körper getroffen → selektieren + Gruppen-Move
    /// 4. Zeichenmodus → Punkt setzen und sofort greifen
    /// 5. Select-Modus, leere Fläche → Rect-Selektion
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        if ctx.ui.input(|i| i.key_down(egui::Key::Space)) {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung
        // (offset um ~6px), was zu asymmetrischen Hitboxen führen kann.
        let Some(press_pos) = ctx.ui.input(|i| i.pointer.press_origin()) else {
            return;
        };
        let logical = screen_pos_to_logical(press_pos, ctx.response, ctx.camera);
        let pick_radius = ctx
            .camera
            .pick_radius_logical(ctx.options.point_radius_px);

        // Punkte der Kurve in Arbeit haben Vorrang
        if let Some(drawing) = ctx.drawing {
            if let Some(hit) = hit_test_object_points(drawing, logical, pick_radius, true) {
                events.push(AppIntent::PointDragStarted { point: hit });
                self.primary_drag_mode = PrimaryDragMode::PointDrag;
                return;
            }
        }

        // Anker/Handles committeter Objekte (selektierte zuerst)
        if let Some(hit) = ctx.sketch.hit_test_point(
            logical,
            pick_radius,
            &ctx.selection.selected_object_ids,
        ) {
            events.push(AppIntent::PointDragStarted { point: hit });
            self.primary_drag_mode = PrimaryDragMode::PointDrag;
            return;
        }

        // Kurven-Körper → Objekt selektieren und Gruppen-Move starten
        let body_threshold = ctx
            .camera
            .pick_radius_logical(ctx.options.curve_hit_threshold_px);
        if let Some(hit_object) = ctx.sketch.hit_test_curve(logical, body_threshold) {
            let already_selected = ctx
                .selection
                .selected_object_ids
                .contains(&hit_object.id);
            if !already_selected {
                events.push(AppIntent::ObjectPickRequested {
                    pos: logical,
                    additive: modifiers.shift,
                });
            }
            events.push(AppIntent::BeginMoveSelectedRequested);
            self.primary_drag_mode = PrimaryDragMode::GroupMove;
            return;
        }

        if ctx.active_tool == EditorTool::Draw {
            // Punkt setzen und den frischen Punkt direkt draggen
            events.push(AppIntent::DrawingDragStarted { pos: logical });
            self.primary_drag_mode = PrimaryDragMode::PointDrag;
            return;
        }

        // Select-Modus, leere Fläche: Rect-Selektion aufziehen.
        // Shift = additiv (bestehende Selektion bleibt erhalten).
        self.drag_selection = Some(DragSelection {
            additive: modifiers.shift,
            start_screen: press_pos,
            current_screen: press_pos,
        });
        self.primary_drag_mode = PrimaryDragMode::None;
    }

    /// Aktualisiert das Selektionsrechteck während des Ziehens.
    pub(crate) fn handle_drag_update(&mut self, ctx: &ViewportContext) {
        let Some(selection) = self.drag_selection.as_mut() else {
            return;
        };
        if !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            selection.current_screen = pointer_pos;
        }
    }

    /// Beendet einen Drag und emittiert die resultierenden Intents.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(selection) = self.drag_selection.take() {
            let corner_a = screen_pos_to_logical(selection.start_screen, ctx.response, ctx.camera);
            let corner_b =
                screen_pos_to_logical(selection.current_screen, ctx.response, ctx.camera);
            events.push(AppIntent::SelectObjectsInRectRequested {
                corner_a,
                corner_b,
                additive: selection.additive,
            });
        }

        match self.primary_drag_mode {
            PrimaryDragMode::GroupMove => events.push(AppIntent::EndMoveSelectedRequested),
            PrimaryDragMode::PointDrag => events.push(AppIntent::PointDragEnded),
            PrimaryDragMode::CameraPan | PrimaryDragMode::None => {}
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
