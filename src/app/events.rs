//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorTool;
use crate::core::{CurveStyle, SelectedPoint, TransformSettings};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neuen, leeren Entwurf beginnen
    NewSketchRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },

    /// Hintergrundbild-Auswahldialog öffnen
    BackgroundImageSelectionRequested,
    /// Hintergrundbild wurde im Dialog ausgewählt
    BackgroundImageSelected { path: String },
    /// Hintergrund-Deckung ändern
    SetBackgroundOpacity { opacity: f32 },
    /// Hintergrund-Skalierung ändern
    SetBackgroundScale { scale: f32 },
    /// Hintergrund-Sichtbarkeit umschalten
    ToggleBackgroundVisibility,
    /// Hintergrundbild entfernen
    BackgroundImageCleared,

    /// Ansicht auf Standard zurücksetzen (Zoom 1.0, kein Pan)
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht um Screen-Pixel-Delta verschieben
    CameraPan { delta_screen: Vec2 },
    /// Zoomen (optional mit Fixpunkt in Screen-Koordinaten)
    CameraZoom {
        factor: f32,
        focus_screen: Option<Vec2>,
    },

    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },

    /// Objekt per Klick selektieren (Kurven-Körper-Hit-Test)
    ObjectPickRequested { pos: Vec2, additive: bool },
    /// Objekte innerhalb eines Rechtecks selektieren
    SelectObjectsInRectRequested {
        corner_a: Vec2,
        corner_b: Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Objekte selektieren
    SelectAllRequested,

    /// Punkt-Drag-Lifecycle Start: Anker oder Handle gegriffen
    PointDragStarted { point: SelectedPoint },
    /// Punkt-Drag-Lifecycle Update: Zielposition in logischen Koordinaten
    PointDragMoved { pos: Vec2 },
    /// Punkt-Drag-Lifecycle Ende
    PointDragEnded,

    /// Move-Lifecycle Start: Drag-Verschieben selektierter Objekte beginnen
    BeginMoveSelectedRequested,
    /// Move-Lifecycle Update: Selektion um logisches Delta verschieben
    MoveSelectedRequested { delta_logical: Vec2 },
    /// Move-Lifecycle Ende: Drag-Verschieben abgeschlossen
    EndMoveSelectedRequested,

    /// Zeichen-Klick: neue Kurve beginnen oder Punkt anhängen
    DrawingClickRequested { pos: Vec2 },
    /// Drag-Start im Zeichenmodus: Punkt setzen und sofort greifen
    DrawingDragStarted { pos: Vec2 },
    /// Zeichnung finalisieren (Rechtsklick, Doppelklick, Enter)
    DrawingFinalizeRequested,
    /// Zeichnung abbrechen und verwerfen (Escape)
    DrawingCancelRequested,
    /// Doppelklick: Finalisieren / Punkt löschen / Punkt anhängen
    DoubleClickRequested { pos: Vec2 },

    /// Selektierte Objekte löschen
    DeleteSelectedRequested,
    /// Objekt umbenennen
    SetObjectNameRequested { object_id: String, name: String },
    /// Anzahl der Kurven-Ebenen ändern
    SetParallelCountRequested { object_id: String, count: u32 },
    /// Ebenen-Abstand ändern
    SetSpacingRequested { object_id: String, spacing: f32 },
    /// Stil einer Ebene ändern
    SetStyleRequested {
        object_id: String,
        layer: usize,
        style: CurveStyle,
    },
    /// View-Transformation eines Objekts ändern
    SetTransformRequested {
        object_id: String,
        transform: TransformSettings,
    },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen, leeren Entwurf anlegen
    NewSketch,
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Hintergrundbild-Dialog anfordern
    RequestBackgroundDialog,
    /// Anwendung beenden
    RequestExit,
    /// JSON-Entwurf laden
    LoadSketch { path: String },
    /// Entwurf speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveSketch { path: Option<String> },

    /// Hintergrundbild laden
    LoadBackgroundImage { path: String },
    /// Hintergrund-Deckung setzen
    SetBackgroundOpacity { opacity: f32 },
    /// Hintergrund-Skalierung setzen
    SetBackgroundScale { scale: f32 },
    /// Hintergrund-Sichtbarkeit umschalten
    ToggleBackgroundVisibility,
    /// Hintergrundbild entfernen
    ClearBackgroundImage,

    /// Ansicht auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen (Fixpunkt Viewport-Mitte)
    ZoomIn,
    /// Stufenweise herauszoomen (Fixpunkt Viewport-Mitte)
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Ansicht um Screen-Pixel-Delta verschieben
    PanCamera { delta_screen: Vec2 },
    /// Zoomen mit optionalem Screen-Fixpunkt
    ZoomCamera {
        factor: f32,
        focus_screen: Option<Vec2>,
    },

    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },

    /// Objekt am Klickpunkt selektieren (oder Selektion leeren bei Fehlschlag)
    SelectObjectAt {
        pos: Vec2,
        threshold: f32,
        additive: bool,
    },
    /// Objekte im Rechteck selektieren
    SelectObjectsInRect {
        corner_a: Vec2,
        corner_b: Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Objekte selektieren
    SelectAllObjects,

    /// Punkt-Drag starten (nimmt Undo-Snapshot für committete Objekte)
    BeginDragPoint { point: SelectedPoint },
    /// Gegriffenen Punkt auf Zielposition bewegen
    DragPointTo { pos: Vec2 },
    /// Punkt-Drag beenden
    EndDragPoint,

    /// Move-Lifecycle: Verschieben starten (Undo-Snapshot)
    BeginMoveSelected,
    /// Selektierte Objekte um logisches Delta verschieben
    MoveSelected { delta_logical: Vec2 },
    /// Move-Lifecycle: Verschieben beenden
    EndMoveSelected,

    /// Zeichen-Klick verarbeiten (Kurve beginnen oder Punkt anhängen)
    DrawingClick { pos: Vec2 },
    /// Zuletzt gesetzten Zeichen-Punkt als Drag-Ziel armieren
    ArmNewestDrawnPoint,
    /// Zeichnung finalisieren (≥ 2 Punkte, sonst Ablehnung mit Hinweis)
    FinalizeDrawing,
    /// Zeichnung abbrechen und verwerfen
    CancelDrawing,

    /// Punkt aus einem Objekt löschen (≥ 2 Punkte müssen bleiben)
    DeletePoint {
        object_id: String,
        point_index: usize,
    },
    /// Punkt an ein committetes Objekt anhängen (Doppelklick)
    AppendPoint { object_id: String, pos: Vec2 },
    /// Selektierte Objekte löschen
    DeleteSelectedObjects,

    /// Objekt umbenennen
    SetObjectName { object_id: String, name: String },
    /// Anzahl der Kurven-Ebenen setzen
    SetParallelCount { object_id: String, count: u32 },
    /// Ebenen-Abstand setzen
    SetSpacing { object_id: String, spacing: f32 },
    /// Stil einer Ebene setzen
    SetStyle {
        object_id: String,
        layer: usize,
        style: CurveStyle,
    },
    /// View-Transformation setzen
    SetTransform {
        object_id: String,
        transform: TransformSettings,
    },

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
}
