//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Objekte: {} | Punkte: {}",
                state.sketch.object_count(),
                state.sketch.point_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.0}% | Pan: ({:.0}, {:.0})",
                state.view.camera.zoom * 100.0,
                state.view.camera.pan_offset.x,
                state.view.camera.pan_offset.y
            ));

            ui.separator();

            // Aktives Werkzeug
            let tool_name = match state.editor.active_tool {
                EditorTool::Select => "Auswählen",
                EditorTool::Draw => "Zeichnen",
            };
            ui.label(format!("Modus: {}", tool_name));

            if let Some(drawing) = &state.editor.drawing {
                ui.separator();
                ui.label(format!(
                    "Zeichnung: {} Punkt(e) — Enter/Rechtsklick schließt ab, Esc verwirft",
                    drawing.points.len()
                ));
            }

            let selected_count = state.selection.selected_object_ids.len();
            if selected_count > 0 {
                ui.separator();
                ui.label(format!("Selektiert: {}", selected_count));
            }

            if let Some(path) = &state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(path.as_str());
                ui.label(format!("Datei: {}", filename));
            }

            // Statusnachricht (z.B. abgelehnte Finalisierung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
