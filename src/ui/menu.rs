//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neu (Ctrl+N)").clicked() {
                    events.push(AppIntent::NewSketchRequested);
                    ui.close();
                }

                if ui.button("Öffnen… (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                let has_objects = state.object_count() > 0;

                if ui
                    .add_enabled(has_objects, egui::Button::new("Speichern (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_objects, egui::Button::new("Speichern unter…"))
                    .clicked()
                {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Hintergrundbild laden…").clicked() {
                    events.push(AppIntent::BackgroundImageSelectionRequested);
                    ui.close();
                }

                if state.view.background_image.is_some()
                    && ui.button("Hintergrundbild entfernen").clicked()
                {
                    events.push(AppIntent::BackgroundImageCleared);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Rückgängig (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Wiederholen (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Alles auswählen (Ctrl+A)").clicked() {
                    events.push(AppIntent::SelectAllRequested);
                    ui.close();
                }

                let has_selection = !state.selection.selected_object_ids.is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Auswahl löschen (Entf)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Hineinzoomen (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Herauszoomen (−)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
                if ui.button("Ansicht zurücksetzen").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
