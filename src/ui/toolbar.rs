//! Toolbar für Werkzeugauswahl, Zoom und Hintergrundbild.

use crate::app::{AppIntent, AppState, EditorTool};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");

            if ui
                .add(egui::Button::new("Auswählen (1)").selected(active == EditorTool::Select))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Select,
                });
            }

            if ui
                .add(egui::Button::new("Zeichnen (2)").selected(active == EditorTool::Draw))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Draw,
                });
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui.button("−").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            ui.label(format!("{:.0}%", state.view.camera.zoom * 100.0));
            if ui.button("+").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("Ansicht zurücksetzen").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }

            ui.separator();

            // ── Hintergrundbild ──
            if state.view.background_image.is_some() {
                let mut visible = state.view.background_visible;
                if ui.checkbox(&mut visible, "Hintergrund").changed() {
                    events.push(AppIntent::ToggleBackgroundVisibility);
                }

                let mut opacity = state.view.background_opacity;
                if ui
                    .add(
                        egui::Slider::new(&mut opacity, 0.0..=1.0)
                            .text("Deckung")
                            .fixed_decimals(2),
                    )
                    .changed()
                {
                    events.push(AppIntent::SetBackgroundOpacity { opacity });
                }

                let mut scale = state.view.background_scale;
                if ui
                    .add(
                        egui::DragValue::new(&mut scale)
                            .speed(0.01)
                            .range(0.05..=10.0)
                            .prefix("Skalierung: "),
                    )
                    .changed()
                {
                    events.push(AppIntent::SetBackgroundScale { scale });
                }

                if ui.button("✕").on_hover_text("Hintergrundbild entfernen").clicked() {
                    events.push(AppIntent::BackgroundImageCleared);
                }
            } else if ui.button("Hintergrundbild…").clicked() {
                events.push(AppIntent::BackgroundImageSelectionRequested);
            }
        });
    });

    events
}
