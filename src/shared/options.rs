//! Zentrale Konfiguration für das Bezier Curve Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 5.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Punkte & Hit-Tests ─────────────────────────────────────────────

/// Darstellungs- und Pick-Radius für Anker-Marker in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 8.0;
/// Radius der Handle-Marker in Screen-Pixeln.
pub const HANDLE_RADIUS_PX: f32 = 5.0;
/// Basis-Schwellwert für Kurven-Körper-Hit-Tests in Screen-Pixeln
/// (halbe Strichbreite kommt am Aufrufer dazu).
pub const CURVE_HIT_THRESHOLD_PX: f32 = 6.0;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite in logischen Einheiten.
pub const GRID_SIZE: f32 = 50.0;

// ── Farben (RGBA, 0.0–1.0) ─────────────────────────────────────────

/// Hintergrund der Zeichenfläche.
pub const CANVAS_COLOR: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
/// Rasterlinien.
pub const GRID_COLOR: [f32; 4] = [0.22, 0.22, 0.26, 1.0];
/// Anker-Marker.
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Hervorgehobener (selektierter) Punkt.
pub const ANCHOR_COLOR_SELECTED: [f32; 4] = [1.0, 0.4, 0.1, 1.0];
/// Handle-Marker und Handle-Linien.
pub const HANDLE_COLOR: [f32; 4] = [0.3, 0.8, 1.0, 0.9];
/// Gestrichelte Bounding-Box nicht selektierter Objekte.
pub const BBOX_HINT_COLOR: [f32; 4] = [0.6, 0.6, 0.65, 0.7];
/// Gestrichelte Führungslinie beim Zeichnen.
pub const GUIDE_COLOR: [f32; 4] = [0.9, 0.9, 0.3, 0.9];
/// Füllung des Selektionsrechtecks.
pub const SELECTION_FILL_COLOR: [f32; 4] = [0.3, 0.5, 1.0, 0.15];
/// Rahmen des Selektionsrechtecks.
pub const SELECTION_STROKE_COLOR: [f32; 4] = [0.4, 0.6, 1.0, 0.9];
/// Objekt-Beschriftung.
pub const LABEL_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Punkte & Hit-Tests ──────────────────────────────────────
    /// Pick- und Darstellungsradius für Anker in Screen-Pixeln
    pub point_radius_px: f32,
    /// Radius der Handle-Marker in Screen-Pixeln
    pub handle_radius_px: f32,
    /// Basis-Schwellwert für Kurven-Hit-Tests in Screen-Pixeln
    pub curve_hit_threshold_px: f32,

    // ── Raster ──────────────────────────────────────────────────
    /// Raster anzeigen
    #[serde(default = "default_true")]
    pub grid_visible: bool,
    /// Rasterweite in logischen Einheiten
    pub grid_size: f32,

    // ── Hintergrundbild ─────────────────────────────────────────
    /// Standard-Deckung eines frisch geladenen Hintergrundbilds
    pub background_opacity_default: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub canvas_color: [f32; 4],
    pub grid_color: [f32; 4],
    pub anchor_color: [f32; 4],
    pub anchor_color_selected: [f32; 4],
    pub handle_color: [f32; 4],
    pub bbox_hint_color: [f32; 4],
    pub guide_color: [f32; 4],
    pub selection_fill_color: [f32; 4],
    pub selection_stroke_color: [f32; 4],
    pub label_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            point_radius_px: POINT_RADIUS_PX,
            handle_radius_px: HANDLE_RADIUS_PX,
            curve_hit_threshold_px: CURVE_HIT_THRESHOLD_PX,

            grid_visible: true,
            grid_size: GRID_SIZE,

            background_opacity_default: 0.5,

            canvas_color: CANVAS_COLOR,
            grid_color: GRID_COLOR,
            anchor_color: ANCHOR_COLOR,
            anchor_color_selected: ANCHOR_COLOR_SELECTED,
            handle_color: HANDLE_COLOR,
            bbox_hint_color: BBOX_HINT_COLOR,
            guide_color: GUIDE_COLOR,
            selection_fill_color: SELECTION_FILL_COLOR,
            selection_stroke_color: SELECTION_STROKE_COLOR,
            label_color: LABEL_COLOR,
        }
    }
}

/// Serde-Default für `grid_visible` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Pfad der Options-Datei neben der Binary (Fallback: Arbeitsverzeichnis).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("bezier_curve_studio.toml")
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = EditorOptions::default();
        assert_eq!(options.camera_zoom_min, CAMERA_ZOOM_MIN);
        assert_eq!(options.camera_zoom_max, CAMERA_ZOOM_MAX);
        assert_eq!(options.point_radius_px, POINT_RADIUS_PX);
        assert_eq!(options.grid_size, GRID_SIZE);
    }

    #[test]
    fn toml_round_trip() {
        let options = EditorOptions::default();
        let toml_string = toml::to_string_pretty(&options).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&toml_string).expect("deserialisierbar");
        assert_eq!(back, options);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir();
        let path = dir.join("bezier_curve_studio_test_broken.toml");
        std::fs::write(&path, "das ist kein toml {{{{").expect("schreibbar");
        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options, EditorOptions::default());
        let _ = std::fs::remove_file(&path);
    }
}
