//! Datenmodell für Kurven-Objekte: Kontrollpunkte, Stile, Transformationen.
//!
//! Alle Update-Operationen sind pur: sie geben ein neues Objekt zurück und
//! lassen das Original unangetastet. Der Aufrufer ersetzt das Objekt im
//! `Sketch` als Ganzes, damit kein Zustand halb-mutiert zurückbleiben kann.

use super::geometry::{self, Rect};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Horizontaler Standard-Abstand der Handles eines frisch gesetzten Punkts.
pub const DEFAULT_HANDLE_OFFSET: f32 = 50.0;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Erzeugt eine prozessweit eindeutige ID mit Präfix (z.B. `cp-17`).
pub(crate) fn next_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

/// Serde-Helfer: `Vec2` als `{x, y}`-Objekt statt als Array.
///
/// Das persistierte JSON-Format verlangt Punkt-Objekte; glams eigene
/// Serde-Implementierung würde `[x, y]` schreiben.
mod vec2_xy {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f32,
        y: f32,
    }

    pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        Xy {
            x: value.x,
            y: value.y,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let xy = Xy::deserialize(deserializer)?;
        Ok(Vec2::new(xy.x, xy.y))
    }
}

/// Kurven-Anker mit zwei Bézier-Tangenten-Handles.
///
/// Handles dürfen mit dem Anker zusammenfallen (entartetes/gerades
/// Segment), müssen aber endlich sein. Im Vertragsformat liegen die
/// Anker-Koordinaten flach als `x`/`y`, die Handles als `{x, y}`-Objekte.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ControlPointRepr", into = "ControlPointRepr")]
pub struct ControlPoint {
    /// Innerhalb des Objekts eindeutige ID
    pub id: String,
    /// Anker-Position in logischen Koordinaten
    pub position: Vec2,
    /// Eingehendes Tangenten-Handle
    pub handle_in: Vec2,
    /// Ausgehendes Tangenten-Handle
    pub handle_out: Vec2,
}

/// Drahtformat eines Kontrollpunkts (Vertragsform des JSON-Dokuments).
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ControlPointRepr {
    id: String,
    x: f32,
    y: f32,
    #[serde(with = "vec2_xy")]
    handle_in: Vec2,
    #[serde(with = "vec2_xy")]
    handle_out: Vec2,
}

impl From<ControlPointRepr> for ControlPoint {
    fn from(repr: ControlPointRepr) -> Self {
        Self {
            id: repr.id,
            position: Vec2::new(repr.x, repr.y),
            handle_in: repr.handle_in,
            handle_out: repr.handle_out,
        }
    }
}

impl From<ControlPoint> for ControlPointRepr {
    fn from(point: ControlPoint) -> Self {
        Self {
            id: point.id,
            x: point.position.x,
            y: point.position.y,
            handle_in: point.handle_in,
            handle_out: point.handle_out,
        }
    }
}

impl ControlPoint {
    /// Erstellt einen Punkt mit symmetrischen Standard-Handles
    /// (±`DEFAULT_HANDLE_OFFSET` horizontal, gerade Anfangstangente).
    pub fn with_default_handles(position: Vec2) -> Self {
        Self {
            id: next_id("cp"),
            position,
            handle_in: position - Vec2::new(DEFAULT_HANDLE_OFFSET, 0.0),
            handle_out: position + Vec2::new(DEFAULT_HANDLE_OFFSET, 0.0),
        }
    }

    /// True wenn Anker und beide Handles endliche Koordinaten haben.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.handle_in.is_finite() && self.handle_out.is_finite()
    }
}

/// Welcher Teil eines Kontrollpunkts selektiert/gedraggt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Der Anker selbst (Kurve läuft durch ihn)
    Main,
    /// Eingehendes Handle
    HandleIn,
    /// Ausgehendes Handle
    HandleOut,
}

/// Verweis auf den aktuell interaktiv selektierten Punkt.
/// Höchstens einer ist gleichzeitig selektiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPoint {
    pub object_id: String,
    pub point_index: usize,
    pub kind: PointKind,
}

/// Strich-Erscheinung einer Kurven-Ebene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveStyle {
    /// RGBA-Farbe (0.0–1.0 pro Kanal)
    pub color: [f32; 4],
    /// Strichbreite in logischen Einheiten
    pub width: f32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: [0.1, 0.4, 0.9, 1.0],
            width: 2.0,
        }
    }
}

/// Konfiguration der Kurven-Ebenen eines Objekts.
///
/// `styles[0]` ist die Hauptkurve; `styles[1..parallel_count-1]` stylen die
/// Offset-Kurven. Fehlende Indizes fallen auf `styles[0]` zurück.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveConfig {
    /// Anzahl der Kurven-Ebenen (≥ 1, Ebene 0 = Hauptkurve)
    pub parallel_count: u32,
    /// Senkrechter Abstand zwischen benachbarten Ebenen (≥ 0)
    pub spacing: f32,
    /// Stile pro Ebene
    pub styles: Vec<CurveStyle>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            parallel_count: 1,
            spacing: 0.0,
            styles: vec![CurveStyle::default()],
        }
    }
}

/// Fallback wenn ein importiertes Objekt gar keine Stile mitbringt.
const FALLBACK_STYLE: CurveStyle = CurveStyle {
    color: [0.1, 0.4, 0.9, 1.0],
    width: 2.0,
};

impl CurveConfig {
    /// Stil für eine Ebene, mit Fallback auf die Hauptkurve.
    pub fn style_for(&self, layer: usize) -> &CurveStyle {
        self.styles
            .get(layer)
            .or_else(|| self.styles.first())
            .unwrap_or(&FALLBACK_STYLE)
    }
}

/// View-Transformation eines Objekts (Rotation/Skalierung um den Zentroid).
///
/// Wird zur Render- und Hit-Test-Zeit angewendet; gespeicherte Koordinaten
/// bleiben unverändert. Gruppen-Drags committen ausschließlich Translationen
/// direkt in die Punktdaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformSettings {
    /// Rotation in Grad, im Uhrzeigersinn
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformSettings {
    /// True wenn die Transformation keinerlei Wirkung hat.
    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

/// Benanntes Kurven-Objekt aus ≥ 0 Kontrollpunkten.
///
/// Ein Objekt ist erst ab 2 Punkten "vollständig" (finalisierbar); weniger
/// Punkte sind legaler Zwischenzustand während des Zeichnens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierObject {
    pub id: String,
    pub name: String,
    pub points: Vec<ControlPoint>,
    pub curve_config: CurveConfig,
    pub transform: TransformSettings,
    pub is_selected: bool,
}

impl BezierObject {
    /// Erstellt ein leeres Objekt mit frischer ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_id("obj"),
            name: name.into(),
            points: Vec::new(),
            curve_config: CurveConfig::default(),
            transform: TransformSettings::default(),
            is_selected: false,
        }
    }

    /// True ab 2 Punkten (finalisierbar / persistierbar).
    pub fn is_complete(&self) -> bool {
        self.points.len() >= 2
    }

    /// Zentroid der Anker-Positionen; Ursprung bei leerem Objekt.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        let sum: Vec2 = self.points.iter().map(|p| p.position).sum();
        sum / self.points.len() as f32
    }

    /// Hängt einen neuen Punkt mit Standard-Handles an.
    pub fn add_point(&self, position: Vec2) -> Self {
        let mut next = self.clone();
        next.points.push(ControlPoint::with_default_handles(position));
        next
    }

    /// Verschiebt einen Punkt-Teil auf eine absolute Zielposition.
    ///
    /// `Main` verschiebt Anker und beide Handles um dasselbe Delta, damit
    /// die Handle-Relativ-Offsets erhalten bleiben. `HandleIn`/`HandleOut`
    /// setzen nur das jeweilige Handle absolut — Handles sind unabhängig,
    /// es gibt keine erzwungene Spiegelung.
    pub fn move_point(&self, index: usize, kind: PointKind, target: Vec2) -> Self {
        let mut next = self.clone();
        let Some(point) = next.points.get_mut(index) else {
            return next;
        };
        match kind {
            PointKind::Main => {
                let delta = target - point.position;
                point.position += delta;
                point.handle_in += delta;
                point.handle_out += delta;
            }
            PointKind::HandleIn => point.handle_in = target,
            PointKind::HandleOut => point.handle_out = target,
        }
        next
    }

    /// Entfernt einen Punkt; `None` wenn danach weniger als 2 Punkte blieben.
    pub fn remove_point(&self, index: usize) -> Option<Self> {
        if index >= self.points.len() || self.points.len() <= 2 {
            return None;
        }
        let mut next = self.clone();
        next.points.remove(index);
        Some(next)
    }

    /// Verschiebt das ganze Objekt (Anker + Handles) um ein Delta.
    /// Das ist der einzige Pfad, der Koordinaten dauerhaft verändert.
    pub fn translate(&self, delta: Vec2) -> Self {
        let mut next = self.clone();
        for point in &mut next.points {
            point.position += delta;
            point.handle_in += delta;
            point.handle_out += delta;
        }
        next
    }

    /// Punktmenge nach Anwendung der View-Transformation um den Zentroid.
    ///
    /// Reiner Lese-Transform für Rendering und Hit-Tests; die gespeicherten
    /// Punkte werden nie überschrieben.
    pub fn transformed_points(&self) -> Vec<ControlPoint> {
        if self.transform.is_identity() {
            return self.points.clone();
        }
        let center = self.centroid();
        let t = &self.transform;
        self.points
            .iter()
            .map(|p| ControlPoint {
                id: p.id.clone(),
                position: geometry::apply_rigid_transform(
                    p.position, center, t.rotation, t.scale_x, t.scale_y,
                ),
                handle_in: geometry::apply_rigid_transform(
                    p.handle_in, center, t.rotation, t.scale_x, t.scale_y,
                ),
                handle_out: geometry::apply_rigid_transform(
                    p.handle_out, center, t.rotation, t.scale_x, t.scale_y,
                ),
            })
            .collect()
    }

    /// Bounding-Box über die transformierten Anker und Handles.
    pub fn bounding_box(&self) -> Option<Rect> {
        let points = self.transformed_points();
        let mut iter = points
            .iter()
            .filter(|p| p.is_finite())
            .flat_map(|p| [p.position, p.handle_in, p.handle_out]);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (min.min(p), max.max(p))
        });
        Some(Rect { min, max })
    }

    /// Setzt den Stil einer Ebene; Lücken werden mit dem Hauptstil gefüllt.
    pub fn set_style(&self, layer: usize, style: CurveStyle) -> Self {
        let mut next = self.clone();
        let fallback = next.curve_config.style_for(0).clone();
        while next.curve_config.styles.len() <= layer {
            next.curve_config.styles.push(fallback.clone());
        }
        next.curve_config.styles[layer] = style;
        next
    }

    /// Setzt die Anzahl der Kurven-Ebenen (mindestens 1).
    pub fn set_parallel_count(&self, count: u32) -> Self {
        let mut next = self.clone();
        next.curve_config.parallel_count = count.max(1);
        next
    }

    /// Setzt den Ebenen-Abstand (nie negativ).
    pub fn set_spacing(&self, spacing: f32) -> Self {
        let mut next = self.clone();
        next.curve_config.spacing = spacing.max(0.0);
        next
    }

    /// Benennt das Objekt um.
    pub fn set_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Ersetzt die View-Transformation.
    pub fn set_transform(&self, transform: TransformSettings) -> Self {
        let mut next = self.clone();
        next.transform = transform;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn object_with_points(positions: &[Vec2]) -> BezierObject {
        let mut object = BezierObject::new("Test");
        for &p in positions {
            object = object.add_point(p);
        }
        object
    }

    #[test]
    fn add_point_sets_symmetric_default_handles() {
        let object = object_with_points(&[Vec2::new(10.0, 20.0)]);
        let point = &object.points[0];
        assert_relative_eq!(point.handle_in.x, 10.0 - DEFAULT_HANDLE_OFFSET);
        assert_relative_eq!(point.handle_out.x, 10.0 + DEFAULT_HANDLE_OFFSET);
        assert_relative_eq!(point.handle_in.y, 20.0);
        assert_relative_eq!(point.handle_out.y, 20.0);
    }

    #[test]
    fn point_ids_are_unique_within_object() {
        let object = object_with_points(&[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
        let mut ids: Vec<_> = object.points.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn move_main_shifts_both_handles_by_same_delta() {
        let object = object_with_points(&[Vec2::new(0.0, 0.0)]);
        let before = object.points[0].clone();

        let moved = object.move_point(0, PointKind::Main, Vec2::new(7.0, -3.0));
        let after = &moved.points[0];

        assert_relative_eq!(after.position.x, 7.0);
        assert_relative_eq!(after.position.y, -3.0);
        assert_relative_eq!(after.handle_in.x, before.handle_in.x + 7.0);
        assert_relative_eq!(after.handle_in.y, before.handle_in.y - 3.0);
        assert_relative_eq!(after.handle_out.x, before.handle_out.x + 7.0);
        assert_relative_eq!(after.handle_out.y, before.handle_out.y - 3.0);
    }

    #[test]
    fn move_handle_leaves_anchor_and_opposite_handle_untouched() {
        let object = object_with_points(&[Vec2::new(0.0, 0.0)]);
        let before = object.points[0].clone();

        let moved = object.move_point(0, PointKind::HandleIn, Vec2::new(-99.0, 12.0));
        let after = &moved.points[0];

        assert_relative_eq!(after.handle_in.x, -99.0);
        assert_relative_eq!(after.handle_in.y, 12.0);
        assert_eq!(after.position, before.position);
        assert_eq!(after.handle_out, before.handle_out);
    }

    #[test]
    fn move_point_does_not_mutate_original() {
        let object = object_with_points(&[Vec2::ZERO]);
        let _ = object.move_point(0, PointKind::Main, Vec2::new(5.0, 5.0));
        assert_eq!(object.points[0].position, Vec2::ZERO);
    }

    #[test]
    fn remove_point_rejected_below_two_points() {
        let two = object_with_points(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        assert!(two.remove_point(0).is_none());

        let three = two.add_point(Vec2::new(20.0, 0.0));
        let removed = three.remove_point(1).expect("drei Punkte → löschbar");
        assert_eq!(removed.points.len(), 2);
    }

    #[test]
    fn remove_point_rejects_out_of_range_index() {
        let object = object_with_points(&[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
        assert!(object.remove_point(7).is_none());
    }

    #[test]
    fn identity_transform_returns_stored_points() {
        let object = object_with_points(&[Vec2::ZERO, Vec2::new(100.0, 0.0)]);
        let transformed = object.transformed_points();
        assert_eq!(transformed[0].position, object.points[0].position);
        assert_eq!(transformed[1].handle_out, object.points[1].handle_out);
    }

    #[test]
    fn transformed_points_rotate_about_centroid() {
        let object = object_with_points(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)])
            .set_transform(TransformSettings {
                rotation: 180.0,
                scale_x: 1.0,
                scale_y: 1.0,
            });

        // Zentroid (50, 0): 180° tauscht die beiden Anker
        let transformed = object.transformed_points();
        assert_relative_eq!(transformed[0].position.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(transformed[1].position.x, 0.0, epsilon = 1e-3);
        // Gespeicherte Punkte bleiben unberührt
        assert_relative_eq!(object.points[0].position.x, 0.0);
    }

    #[test]
    fn translate_moves_anchors_and_handles() {
        let object = object_with_points(&[Vec2::ZERO]);
        let moved = object.translate(Vec2::new(5.0, 5.0));
        assert_relative_eq!(moved.points[0].position.x, 5.0);
        assert_relative_eq!(moved.points[0].handle_in.x, -DEFAULT_HANDLE_OFFSET + 5.0);
        assert_relative_eq!(moved.points[0].handle_out.x, DEFAULT_HANDLE_OFFSET + 5.0);
    }

    #[test]
    fn style_for_falls_back_to_main_style() {
        let config = CurveConfig {
            parallel_count: 3,
            spacing: 10.0,
            styles: vec![CurveStyle {
                color: [1.0, 0.0, 0.0, 1.0],
                width: 4.0,
            }],
        };
        assert_eq!(config.style_for(2).width, 4.0);
    }

    #[test]
    fn set_style_fills_gaps_with_main_style() {
        let object = object_with_points(&[Vec2::ZERO, Vec2::new(1.0, 0.0)]);
        let styled = object.set_style(
            2,
            CurveStyle {
                color: [0.0, 1.0, 0.0, 1.0],
                width: 1.0,
            },
        );
        assert_eq!(styled.curve_config.styles.len(), 3);
        assert_eq!(styled.curve_config.styles[1], object.curve_config.styles[0]);
        assert_relative_eq!(styled.curve_config.styles[2].width, 1.0);
    }

    #[test]
    fn parallel_count_is_clamped_to_one() {
        let object = object_with_points(&[Vec2::ZERO]);
        assert_eq!(object.set_parallel_count(0).curve_config.parallel_count, 1);
    }

    #[test]
    fn spacing_never_negative() {
        let object = object_with_points(&[Vec2::ZERO]);
        assert_relative_eq!(object.set_spacing(-5.0).curve_config.spacing, 0.0);
    }

    #[test]
    fn json_round_trip_preserves_point_shape() {
        let object = object_with_points(&[Vec2::new(1.5, 2.5), Vec2::new(3.0, 4.0)]);
        let json = serde_json::to_value(&object).expect("serialisierbar");

        // Vertragsform: camelCase-Felder, Punkte als {x, y}-Objekte
        assert!(json.get("curveConfig").is_some());
        let first = &json["points"][0];
        assert_relative_eq!(first["x"].as_f64().unwrap() as f32, 1.5);
        assert!(first.get("handleIn").is_some());
        assert!(first["handleIn"].get("x").is_some());

        let back: BezierObject = serde_json::from_value(json).expect("deserialisierbar");
        assert_eq!(back.points.len(), 2);
        assert_eq!(back.points[0].id, object.points[0].id);
    }
}
