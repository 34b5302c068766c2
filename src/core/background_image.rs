//! Dekodiertes Hintergrundbild für die Zeichenfläche.

use anyhow::Context;
use std::path::Path;

/// Fertig dekodiertes RGBA-Bitmap.
///
/// Das Laden passiert ausschließlich hier am Host-Rand; der Render-Pfad
/// konsumiert nur noch das fertige Bitmap plus Opacity und Skalierung aus
/// dem View-State.
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8-Pixel, zeilenweise
    pub pixels: Vec<u8>,
    /// Quellpfad für die Anzeige in der UI
    pub source_path: String,
}

impl BackgroundImage {
    /// Lädt und dekodiert eine Bilddatei (PNG/JPEG).
    ///
    /// Fehler werden an den Aufrufer propagiert; ein fehlgeschlagener
    /// Ladevorgang bedeutet schlicht "kein Hintergrundbild".
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Hintergrundbild laden fehlgeschlagen: {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        log::info!(
            "Hintergrundbild geladen: {} ({}x{})",
            path.display(),
            width,
            height
        );

        Ok(Self {
            width,
            height,
            pixels: image.into_raw(),
            source_path: path.display().to_string(),
        })
    }

    /// Seitenverhältnis Breite/Höhe.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}
