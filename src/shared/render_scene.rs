//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::app::EditorTool;
use crate::core::{BackgroundImage, BezierObject, Camera2D, SelectedPoint, Sketch};
use glam::Vec2;
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Der aktuelle Sketch (Arc für O(1)-Clone pro Frame)
    pub sketch: Arc<Sketch>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// IDs der aktuell selektierten Objekte (Arc für O(1)-Clone)
    pub selected_object_ids: Arc<IndexSet<String>>,
    /// Aktuell selektierter Einzelpunkt (Anker oder Handle)
    pub selected_point: Option<SelectedPoint>,
    /// Kurve in Arbeit (wird zusätzlich zur Objektliste gezeichnet)
    pub drawing_object: Option<BezierObject>,
    /// Live-Cursorposition in logischen Koordinaten (für die Führungslinie)
    pub pointer_logical: Option<Vec2>,
    /// Aktives Werkzeug (für das Modus-Overlay)
    pub active_tool: EditorTool,
    /// Hintergrundbild (optional)
    pub background_image: Option<Arc<BackgroundImage>>,
    /// Hintergrund-Deckung (0.0 = transparent, 1.0 = opak)
    pub background_opacity: f32,
    /// Hintergrund-Sichtbarkeit
    pub background_visible: bool,
    /// Skalierungsfaktor der Hintergrund-Ausdehnung (1.0 = eingepasst)
    pub background_scale: f32,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob das Objekt mit Handle-Details gezeichnet werden soll.
    pub fn shows_detail(&self, object_id: &str) -> bool {
        self.selected_object_ids.contains(object_id)
            || self.drawing_object.as_ref().map(|o| o.id.as_str()) == Some(object_id)
    }
}
