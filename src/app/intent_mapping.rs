//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Policy-Schicht: Pick-Radien aus Optionen und Zoom,
//! und die Prioritätsauflösung des Doppelklicks.

use super::{AppCommand, AppIntent, AppState, EditorTool};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewSketchRequested => vec![AppCommand::NewSketch],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveSketch { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadSketch { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveSketch { path: Some(path) }]
        }

        AppIntent::BackgroundImageSelectionRequested => vec![AppCommand::RequestBackgroundDialog],
        AppIntent::BackgroundImageSelected { path } => {
            vec![AppCommand::LoadBackgroundImage { path }]
        }
        AppIntent::SetBackgroundOpacity { opacity } => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }
        AppIntent::SetBackgroundScale { scale } => vec![AppCommand::SetBackgroundScale { scale }],
        AppIntent::ToggleBackgroundVisibility => vec![AppCommand::ToggleBackgroundVisibility],
        AppIntent::BackgroundImageCleared => vec![AppCommand::ClearBackgroundImage],

        AppIntent::ResetViewRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_screen } => vec![AppCommand::PanCamera { delta_screen }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],

        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],

        AppIntent::ObjectPickRequested { pos, additive } => {
            let threshold = state
                .view
                .camera
                .pick_radius_logical(state.options.curve_hit_threshold_px);
            vec![AppCommand::SelectObjectAt {
                pos,
                threshold,
                additive,
            }]
        }
        AppIntent::SelectObjectsInRectRequested {
            corner_a,
            corner_b,
            additive,
        } => vec![AppCommand::SelectObjectsInRect {
            corner_a,
            corner_b,
            additive,
        }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllObjects],

        AppIntent::PointDragStarted { point } => vec![AppCommand::BeginDragPoint { point }],
        AppIntent::PointDragMoved { pos } => vec![AppCommand::DragPointTo { pos }],
        AppIntent::PointDragEnded => vec![AppCommand::EndDragPoint],

        AppIntent::BeginMoveSelectedRequested => vec![AppCommand::BeginMoveSelected],
        AppIntent::MoveSelectedRequested { delta_logical } => {
            vec![AppCommand::MoveSelected { delta_logical }]
        }
        AppIntent::EndMoveSelectedRequested => vec![AppCommand::EndMoveSelected],

        AppIntent::DrawingClickRequested { pos } => vec![AppCommand::DrawingClick { pos }],
        AppIntent::DrawingDragStarted { pos } => vec![
            AppCommand::DrawingClick { pos },
            AppCommand::ArmNewestDrawnPoint,
        ],
        AppIntent::DrawingFinalizeRequested => vec![AppCommand::FinalizeDrawing],
        AppIntent::DrawingCancelRequested => vec![AppCommand::CancelDrawing],
        AppIntent::DoubleClickRequested { pos } => map_double_click(state, pos),

        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedObjects],
        AppIntent::SetObjectNameRequested { object_id, name } => {
            vec![AppCommand::SetObjectName { object_id, name }]
        }
        AppIntent::SetParallelCountRequested { object_id, count } => {
            vec![AppCommand::SetParallelCount { object_id, count }]
        }
        AppIntent::SetSpacingRequested { object_id, spacing } => {
            vec![AppCommand::SetSpacing { object_id, spacing }]
        }
        AppIntent::SetStyleRequested {
            object_id,
            layer,
            style,
        } => vec![AppCommand::SetStyle {
            object_id,
            layer,
            style,
        }],
        AppIntent::SetTransformRequested {
            object_id,
            transform,
        } => vec![AppCommand::SetTransform {
            object_id,
            transform,
        }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}

/// Prioritätsauflösung für Doppelklicks:
/// (a) Zeichnung in Arbeit → finalisieren,
/// (b) Punkt in doppeltem Pick-Radius → Punkt löschen,
/// (c) Zeichenmodus + genau ein selektiertes Objekt + frei vom nächsten
///     Punkt → Punkt anhängen.
fn map_double_click(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    if state.editor.is_drawing() {
        return vec![AppCommand::FinalizeDrawing];
    }

    let delete_radius = state
        .view
        .camera
        .pick_radius_logical(2.0 * state.options.point_radius_px);
    if let Some(hit) =
        state
            .sketch
            .hit_test_point(pos, delete_radius, &state.selection.selected_object_ids)
    {
        // Ablehnung unter 2 Punkten passiert im Use-Case (mit Hinweis)
        return vec![AppCommand::DeletePoint {
            object_id: hit.object_id,
            point_index: hit.point_index,
        }];
    }

    if state.editor.active_tool == EditorTool::Draw
        && state.selection.selected_object_ids.len() == 1
    {
        let object_id = state.selection.selected_object_ids[0].clone();
        return vec![AppCommand::AppendPoint { object_id, pos }];
    }

    vec![]
}
