//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;
use glam::Vec2;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewSketch => handlers::file_io::new_sketch(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadSketch { path } => handlers::file_io::load(state, &path)?,
            AppCommand::SaveSketch { path } => handlers::file_io::save(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_screen } => handlers::view::pan(state, delta_screen),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),

            // === Hintergrundbild ===
            AppCommand::RequestBackgroundDialog => handlers::dialog::request_background_dialog(state),
            AppCommand::LoadBackgroundImage { path } => {
                handlers::view::load_background_image(state, &path)?
            }
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::view::set_background_opacity(state, opacity)
            }
            AppCommand::SetBackgroundScale { scale } => {
                handlers::view::set_background_scale(state, scale)
            }
            AppCommand::ToggleBackgroundVisibility => {
                handlers::view::toggle_background_visibility(state)
            }
            AppCommand::ClearBackgroundImage => handlers::view::clear_background_image(state),

            // === Selektion ===
            AppCommand::SelectObjectAt {
                pos,
                threshold,
                additive,
            } => handlers::selection::select_object_at(state, pos, threshold, additive),
            AppCommand::SelectObjectsInRect {
                corner_a,
                corner_b,
                additive,
            } => handlers::selection::select_in_rect(state, corner_a, corner_b, additive),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SelectAllObjects => handlers::selection::select_all(state),
            AppCommand::BeginMoveSelected => handlers::selection::begin_move(state),
            AppCommand::MoveSelected { delta_logical } => {
                handlers::selection::move_selected(state, delta_logical)
            }
            AppCommand::EndMoveSelected => { /* No-op: Move-Lifecycle Ende */ }

            // === Punkt-Drag ===
            AppCommand::BeginDragPoint { point } => {
                handlers::editing::begin_drag_point(state, point)
            }
            AppCommand::DragPointTo { pos } => handlers::editing::drag_point_to(state, pos),
            AppCommand::EndDragPoint => handlers::editing::end_drag_point(state),

            // === Zeichnen ===
            AppCommand::DrawingClick { pos } => handlers::drawing::click(state, pos),
            AppCommand::ArmNewestDrawnPoint => handlers::drawing::arm_newest_point(state),
            AppCommand::FinalizeDrawing => handlers::drawing::finalize(state),
            AppCommand::CancelDrawing => handlers::drawing::cancel(state),

            // === Editing ===
            AppCommand::DeletePoint {
                object_id,
                point_index,
            } => handlers::editing::delete_point(state, &object_id, point_index),
            AppCommand::AppendPoint { object_id, pos } => {
                handlers::editing::append_point(state, &object_id, pos)
            }
            AppCommand::DeleteSelectedObjects => handlers::editing::delete_selected(state),
            AppCommand::SetEditorTool { tool } => {
                // Werkzeugwechsel während des Zeichnens verwirft die Sitzung nicht:
                // die Kurve bleibt in Arbeit, bis finalisiert oder abgebrochen wird
                state.editor.active_tool = tool;
            }
            AppCommand::SetObjectName { object_id, name } => {
                handlers::editing::set_name(state, &object_id, name)
            }
            AppCommand::SetParallelCount { object_id, count } => {
                handlers::editing::set_parallel_count(state, &object_id, count)
            }
            AppCommand::SetSpacing { object_id, spacing } => {
                handlers::editing::set_spacing(state, &object_id, spacing)
            }
            AppCommand::SetStyle {
                object_id,
                layer,
                style,
            } => handlers::editing::set_style(state, &object_id, layer, style),
            AppCommand::SetTransform {
                object_id,
                transform,
            } => handlers::editing::set_transform(state, &object_id, transform),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(
        &self,
        state: &AppState,
        viewport_size: [f32; 2],
        pointer_logical: Option<Vec2>,
    ) -> RenderScene {
        render_scene::build(state, viewport_size, pointer_logical)
    }
}
