//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool, SelectionState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selection: &SelectionState,
    active_tool: EditorTool,
    is_drawing: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+N (Neu), Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+A (Alle selektieren)
    let (key_n_pressed, key_o_pressed, key_s_pressed, key_a_pressed, key_escape_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::Escape),
            )
        });

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewSketchRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    let has_selection =
        !selection.selected_object_ids.is_empty() || selection.selected_point.is_some();

    if key_escape_pressed {
        if is_drawing {
            // Kurve in Arbeit → verwerfen
            events.push(AppIntent::DrawingCancelRequested);
        } else if has_selection {
            // Selektion und Punkt-Hervorhebung aufheben
            events.push(AppIntent::ClearSelectionRequested);
        } else if active_tool != EditorTool::Select {
            // Zurück zum Select-Tool
            events.push(AppIntent::SetEditorToolRequested {
                tool: EditorTool::Select,
            });
        }
    }

    // Delete, Enter, Tool-Wechsel
    let (key_del_pressed, key_enter_pressed, key_1_pressed, key_2_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
        )
    });

    if key_del_pressed && !selection.selected_object_ids.is_empty() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    // Enter = Zeichnung finalisieren
    if key_enter_pressed && is_drawing {
        events.push(AppIntent::DrawingFinalizeRequested);
    }

    if key_1_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Select,
        });
    }
    if key_2_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Draw,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn collect_with_key_event_full(
        event: egui::Event,
        selection: SelectionState,
        active_tool: EditorTool,
        is_drawing: bool,
    ) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        if let egui::Event::Key { modifiers, .. } = &event {
            raw_input.modifiers = *modifiers;
        }
        raw_input.events.push(event);

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui, &selection, active_tool, is_drawing);
            });
        });

        events
    }

    fn selection_with_one_object() -> SelectionState {
        let mut selection = SelectionState::new();
        selection.ids_mut().insert("obj-1".to_string());
        selection
    }

    #[test]
    fn test_ctrl_z_emits_undo() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Z, egui::Modifiers::COMMAND),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_ctrl_shift_z_emits_redo() {
        let events = collect_with_key_event_full(
            key_event(
                egui::Key::Z,
                egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            ),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::RedoRequested)));
        assert!(!events
            .iter()
            .any(|e| matches!(e, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_delete_with_selection_emits_delete_intent() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Delete, egui::Modifiers::default()),
            selection_with_one_object(),
            EditorTool::Select,
            false,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::DeleteSelectedRequested)));
    }

    #[test]
    fn test_delete_without_selection_does_nothing() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Delete, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_enter_while_drawing_finalizes() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Enter, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Draw,
            true,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::DrawingFinalizeRequested)));
    }

    #[test]
    fn test_enter_without_drawing_does_nothing() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Enter, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Draw,
            false,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_escape_while_drawing_cancels() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Draw,
            true,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::DrawingCancelRequested)));
    }

    #[test]
    fn test_escape_with_selection_clears_selection() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            selection_with_one_object(),
            EditorTool::Select,
            false,
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::ClearSelectionRequested)));
    }

    #[test]
    fn test_escape_in_draw_tool_without_selection_switches_to_select() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Draw,
            false,
        );
        assert!(events.iter().any(|e| matches!(
            e,
            AppIntent::SetEditorToolRequested {
                tool: EditorTool::Select
            }
        )));
    }

    #[test]
    fn test_escape_in_select_tool_without_selection_does_nothing() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_num2_switches_to_draw_tool() {
        let events = collect_with_key_event_full(
            key_event(egui::Key::Num2, egui::Modifiers::default()),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(events.iter().any(|e| matches!(
            e,
            AppIntent::SetEditorToolRequested {
                tool: EditorTool::Draw
            }
        )));
    }

    #[test]
    fn test_ctrl_s_saves_and_ctrl_shift_s_saves_as() {
        let save = collect_with_key_event_full(
            key_event(egui::Key::S, egui::Modifiers::COMMAND),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(save.iter().any(|e| matches!(e, AppIntent::SaveRequested)));

        let save_as = collect_with_key_event_full(
            key_event(
                egui::Key::S,
                egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            ),
            SelectionState::new(),
            EditorTool::Select,
            false,
        );
        assert!(save_as
            .iter()
            .any(|e| matches!(e, AppIntent::SaveAsRequested)));
    }
}
