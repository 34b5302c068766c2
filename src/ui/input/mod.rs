//! Viewport-Input-Handling: Maus-Events, Drag-Gesten, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Einfach-/Doppel-Klick, Rechtsklick-Finalisierung)
//! - `drag_primary` — Drag-Start/-Ende (Punkt-Drag, Gruppen-Move, Pan, Rect-Selektion)
//! - `pointer_delta` — Pan/Move-Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition
//!
//! Es ist immer höchstens eine Geste aktiv: ein neuer Drag-Start löst die
//! laufende Geste zuerst auf (`primary_drag_mode` wird überschrieben bzw.
//! beim Drag-Ende zurückgesetzt).

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::drag::{draw_drag_selection_overlay, DragSelection};
use super::keyboard;
use crate::app::{AppIntent, EditorTool, SelectionState};
use crate::core::{BezierObject, Camera2D, Sketch};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Drag eines einzelnen Ankers oder Handles
    PointDrag,
    /// Drag der gesamten Selektion (committet Translation)
    GroupMove,
    /// Kamera-Pan (Mitteltaste oder Leertaste + Ziehen)
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub camera: &'a Camera2D,
    pub sketch: &'a Sketch,
    pub selection: &'a SelectionState,
    pub active_tool: EditorTool,
    /// Kurve in Arbeit (liegt noch nicht im Sketch)
    pub drawing: Option<&'a BezierObject>,
    pub options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Selektion, Scroll).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    pub(crate) drag_selection: Option<DragSelection>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet alle Viewport-Events eines Frames und sammelt Intents.
    #[allow(clippy::too_many_arguments)]
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        sketch: &Sketch,
        selection: &SelectionState,
        active_tool: EditorTool,
        drawing: Option<&BezierObject>,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            camera,
            sketch,
            selection,
            active_tool,
            drawing,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            selection,
            active_tool,
            drawing.is_some(),
        ));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx, modifiers, &mut events);
        self.handle_drag_update(&ctx);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);

        // Drag-Selektion Overlay (ausgelagert in drag.rs)
        draw_drag_selection_overlay(self.drag_selection.as_ref(), ui, response, options);

        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine egui-Pointer-Position in logische Koordinaten um.
/// Die Kamera arbeitet in viewport-lokalen Screen-Pixeln.
fn screen_pos_to_logical(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    camera: &Camera2D,
) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_logical(Vec2::new(local.x, local.y))
}

/// Viewport-lokale Screen-Koordinaten einer Pointer-Position.
fn screen_pos_local(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
