//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use crate::core::{BackgroundImage, Camera2D, SelectedPoint, Sketch};
use crate::shared::EditorOptions;
use indexmap::IndexSet;
use std::sync::Arc;

/// Aktives Editor-Werkzeug.
///
/// `Draw` entscheidet, ob Klicks ins Leere eine neue Kurve beginnen
/// oder (im `Select`-Modus) ein Selektionsrechteck aufziehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Objekte selektieren, Punkte und Gruppen verschieben
    #[default]
    Select,
    /// Kurven zeichnen: jeder Klick setzt einen Kontrollpunkt
    Draw,
}

/// Zustand des aktuellen Editor-Werkzeugs.
///
/// Die in Arbeit befindliche Kurve gehört dem Werkzeug, nicht dem Sketch:
/// erst die Finalisierung committet sie (mit Undo-Snapshot) in die
/// Objektliste. Ein Abbruch verwirft sie spurlos.
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Kurve in Arbeit (None = kein Zeichnen aktiv)
    pub drawing: Option<crate::core::BezierObject>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// True solange eine Kurve in Arbeit ist.
    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    /// ID der Kurve in Arbeit.
    pub fn drawing_object_id(&self) -> Option<&str> {
        self.drawing.as_ref().map(|o| o.id.as_str())
    }
}

/// Auswahlbezogener Anwendungszustand.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Geordnete Menge der selektierten Objekt-IDs
    /// (Arc für O(1)-Clone in Snapshot und RenderScene)
    pub selected_object_ids: Arc<IndexSet<String>>,
    /// Der eine interaktiv selektierte Punkt (Anker oder Handle)
    pub selected_point: Option<SelectedPoint>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf die ID-Menge zurück (CoW: klont nur
    /// wenn nötig). Alle Selektions-Mutationen gehen über diese Methode,
    /// damit der Arc-Klon in `RenderScene` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_object_ids)
    }
}

/// View-bezogener Anwendungszustand.
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Hintergrundbild (optional)
    pub background_image: Option<Arc<BackgroundImage>>,
    /// Hintergrund-Deckung (0.0 = transparent, 1.0 = opak)
    pub background_opacity: f32,
    /// Hintergrund-Sichtbarkeit
    pub background_visible: bool,
    /// Skalierungsfaktor der Hintergrund-Ausdehnung (1.0 = eingepasst)
    pub background_scale: f32,
    /// Signalisiert, dass das Hintergrundbild neu als Textur hochgeladen werden muss
    pub background_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            background_image: None,
            background_opacity: 1.0,
            background_visible: true,
            background_scale: 1.0,
            background_dirty: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der Hintergrundbild-Dialog geöffnet werden soll
    pub show_background_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Speichern ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. abgelehnte Finalisierung)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Alle Kurven-Objekte (Arc für O(1)-Snapshots, CoW via `Arc::make_mut`)
    pub sketch: Arc<Sketch>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Zoom-Grenzen)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            sketch: Arc::new(Sketch::new()),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            history: EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Objekte zurück (für UI-Anzeige).
    pub fn object_count(&self) -> usize {
        self.sketch.object_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Setzt eine Statusnachricht für die Statuszeile.
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.ui.status_message = Some(message);
    }

    /// Mutabler Zugriff auf den Sketch (CoW: klont nur bei geteiltem Arc).
    #[inline]
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        Arc::make_mut(&mut self.sketch)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
