//! Objekt-Sammlung eines Entwurfs plus Hit-Tests und JSON-Vertrag.

use super::geometry::{self, Rect};
use super::object::{BezierObject, PointKind, SelectedPoint};
use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Alle Kurven-Objekte eines Entwurfs in Zeichenreihenfolge.
///
/// Der Sketch ist die einzige Quelle der Wahrheit für Objektdaten; alle
/// Mutationen laufen als Ganz-Objekt-Ersetzungen über [`replace_object`]
/// (bzw. add/remove), nie als Teil-Updates.
///
/// [`replace_object`]: Sketch::replace_object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sketch {
    pub objects: Vec<BezierObject>,
}

impl Sketch {
    /// Erstellt einen leeren Sketch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gesamtzahl aller Kontrollpunkte (für die Statuszeile).
    pub fn point_count(&self) -> usize {
        self.objects.iter().map(|o| o.points.len()).sum()
    }

    /// Sucht ein Objekt per ID.
    pub fn object(&self, id: &str) -> Option<&BezierObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Index eines Objekts per ID.
    pub fn object_index(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Hängt ein neues Objekt hinten an (wird zuoberst gezeichnet).
    pub fn add_object(&mut self, object: BezierObject) {
        self.objects.push(object);
    }

    /// Ersetzt das Objekt mit derselben ID durch den neuen Wert.
    /// Unbekannte IDs werden ignoriert (das Objekt wurde inzwischen gelöscht).
    pub fn replace_object(&mut self, updated: BezierObject) {
        if let Some(index) = self.object_index(&updated.id) {
            self.objects[index] = updated;
        }
    }

    /// Entfernt ein Objekt per ID; true wenn eines entfernt wurde.
    pub fn remove_object(&mut self, id: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        self.objects.len() != before
    }

    /// Vergibt einen fortlaufenden Standard-Namen ("Kurve N").
    pub fn next_object_name(&self) -> String {
        format!("Kurve {}", self.objects.len() + 1)
    }

    /// Erstellt ein frisches, leeres Objekt mit Standard-Namen.
    pub fn make_object(&self) -> BezierObject {
        BezierObject::new(self.next_object_name())
    }

    /// Hit-Test gegen Anker und Handles aller Objekte.
    ///
    /// Selektierte Objekte werden zuerst geprüft und sind die einzigen, bei
    /// denen Handles greifbar sind (nur dort werden sie auch gezeichnet).
    /// Nicht-endliche Punkte werden übersprungen.
    pub fn hit_test_point(
        &self,
        pos: Vec2,
        radius: f32,
        selected_ids: &IndexSet<String>,
    ) -> Option<SelectedPoint> {
        for object in self
            .objects
            .iter()
            .filter(|o| selected_ids.contains(&o.id))
        {
            if let Some(hit) = hit_test_object_points(object, pos, radius, true) {
                return Some(hit);
            }
        }
        for object in self
            .objects
            .iter()
            .filter(|o| !selected_ids.contains(&o.id))
        {
            if let Some(hit) = hit_test_object_points(object, pos, radius, false) {
                return Some(hit);
            }
        }
        None
    }

    /// Hit-Test gegen Kurven-Körper (Nähe zum Strich).
    ///
    /// Zuletzt gezeichnete Objekte liegen oben und gewinnen. Die halbe
    /// Strichbreite der Hauptkurve wird auf den Schwellwert addiert, damit
    /// sichtbar berührende Klicks treffen.
    pub fn hit_test_curve(&self, pos: Vec2, base_threshold: f32) -> Option<&BezierObject> {
        self.objects.iter().rev().find(|object| {
            let threshold = base_threshold + object.curve_config.style_for(0).width * 0.5;
            let points = object.transformed_points();
            points.windows(2).any(|pair| {
                let (a, b) = (&pair[0], &pair[1]);
                if !a.is_finite() || !b.is_finite() {
                    log::warn!(
                        "Hit-Test: nicht-endliches Segment in Objekt '{}' übersprungen",
                        object.name
                    );
                    return false;
                }
                geometry::is_point_on_curve_segment(
                    a.position,
                    a.handle_out,
                    b.handle_in,
                    b.position,
                    pos,
                    threshold,
                )
            })
        })
    }

    /// IDs aller Objekte mit mindestens einem Anker im normalisierten Rechteck.
    pub fn objects_in_rect(&self, rect: &Rect) -> Vec<String> {
        self.objects
            .iter()
            .filter(|object| {
                object
                    .transformed_points()
                    .iter()
                    .filter(|p| p.is_finite())
                    .any(|p| geometry::point_in_rect(p.position, rect))
            })
            .map(|object| object.id.clone())
            .collect()
    }

    /// Serialisiert als Vertrags-JSON `{ "objects": [...] }`.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Liest das Vertrags-JSON ein.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Prüft Anker (und optional Handles) eines Objekts gegen eine Position.
/// Anker haben Vorrang vor Handles, damit zusammenfallende Marker den
/// Hauptpunkt liefern. Öffentlich, damit die Eingabeschicht auch die
/// Kurve in Arbeit (die noch nicht im Sketch liegt) testen kann.
pub fn hit_test_object_points(
    object: &BezierObject,
    pos: Vec2,
    radius: f32,
    include_handles: bool,
) -> Option<SelectedPoint> {
    let points = object.transformed_points();

    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            log::warn!(
                "Hit-Test: nicht-endlicher Punkt {} in Objekt '{}' übersprungen",
                index,
                object.name
            );
            continue;
        }
        if geometry::is_near(point.position, pos, radius) {
            return Some(SelectedPoint {
                object_id: object.id.clone(),
                point_index: index,
                kind: PointKind::Main,
            });
        }
    }

    if include_handles {
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                continue;
            }
            if geometry::is_near(point.handle_in, pos, radius) {
                return Some(SelectedPoint {
                    object_id: object.id.clone(),
                    point_index: index,
                    kind: PointKind::HandleIn,
                });
            }
            if geometry::is_near(point.handle_out, pos, radius) {
                return Some(SelectedPoint {
                    object_id: object.id.clone(),
                    point_index: index,
                    kind: PointKind::HandleOut,
                });
            }
        }
    }

    None
}
