//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: kann von `ui`, `render` und `app` importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen. Keinerlei Zustand.

use glam::Vec2;

/// Mindest-Abtastanzahl pro Segment für Hit-Tests und Stroke-Sampling.
pub const MIN_SEGMENT_SAMPLES: usize = 20;
/// Obergrenze der Abtastanzahl, damit sehr lange Segmente nicht explodieren.
pub const MAX_SEGMENT_SAMPLES: usize = 128;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·H0 + 3(1-t)t²·H1 + t³·P3
///
/// `t` außerhalb [0, 1] extrapoliert; Hit-Tests müssen selbst klemmen.
pub fn cubic_bezier(p0: Vec2, h0: Vec2, h1: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * h0 + 3.0 * inv * t2 * h1 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(H0-P0) + 6(1-t)t·(H1-H0) + 3t²·(P3-H1)
///
/// Tangentenvektor, nicht normalisiert.
pub fn cubic_bezier_derivative(p0: Vec2, h0: Vec2, h1: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (h0 - p0) + 6.0 * inv * t * (h1 - h0) + 3.0 * t * t * (p3 - h1)
}

/// Euklidische Distanz zweier Punkte.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// True wenn `a` höchstens `radius` von `b` entfernt ist.
pub fn is_near(a: Vec2, b: Vec2, radius: f32) -> bool {
    distance(a, b) <= radius
}

/// Lokale Tangente der Kurve bei `t` mit Fallback-Kaskade für entartete Fälle.
///
/// Die analytische Ableitung wird Null, wenn Handle und Anker zusammenfallen
/// (z.B. bei t=0 mit H0 == P0). Dann greift eine Vorwärtsdifferenz,
/// danach die Sehne zwischen den Handles. Liefert im komplett entarteten
/// Fall (P0 == H0 == H1 == P3) den Nullvektor.
fn curve_tangent(p0: Vec2, h0: Vec2, h1: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let derivative = cubic_bezier_derivative(p0, h0, h1, p3, t);
    if derivative.length_squared() > f32::EPSILON {
        return derivative;
    }

    let step = 1e-3;
    let ahead = cubic_bezier(p0, h0, h1, p3, (t + step).min(1.0));
    let behind = cubic_bezier(p0, h0, h1, p3, (t - step).max(0.0));
    let difference = ahead - behind;
    if difference.length_squared() > f32::EPSILON {
        return difference;
    }

    h1 - h0
}

/// Punkt auf der Parallel-Kurve im senkrechten Abstand `offset`.
///
/// Sampelt die Kurve bei `t`, dreht die Tangente um 90° und verschiebt
/// entlang der Normale. Approximation: echte Offset-Kurven sind im
/// Allgemeinen keine Béziers. `offset == 0` reproduziert die Hauptkurve
/// exakt; ohne bestimmbare Tangente wird der Basispunkt zurückgegeben.
pub fn offset_point_on_curve(
    p0: Vec2,
    h0: Vec2,
    h1: Vec2,
    p3: Vec2,
    t: f32,
    offset: f32,
) -> Vec2 {
    let base = cubic_bezier(p0, h0, h1, p3, t);
    if offset == 0.0 {
        return base;
    }

    let tangent = curve_tangent(p0, h0, h1, p3, t);
    let Some(direction) = tangent.try_normalize() else {
        return base;
    };
    let normal = Vec2::new(-direction.y, direction.x);
    base + normal * offset
}

/// Abtastanzahl für ein Segment, abhängig von der Kontrollpolygon-Länge.
///
/// Kurze Segmente bekommen die Mindestanzahl, lange proportional mehr.
pub fn segment_sample_count(p0: Vec2, h0: Vec2, h1: Vec2, p3: Vec2) -> usize {
    let hull_length = p0.distance(h0) + h0.distance(h1) + h1.distance(p3);
    ((hull_length / 10.0) as usize).clamp(MIN_SEGMENT_SAMPLES, MAX_SEGMENT_SAMPLES)
}

/// Prüft, ob `point` näher als `threshold` an irgendeinem Sample des Segments liegt.
///
/// `threshold` muss die halbe Strichbreite bereits enthalten, damit
/// sichtbar berührende Klicks als Treffer zählen.
pub fn is_point_on_curve_segment(
    p0: Vec2,
    h0: Vec2,
    h1: Vec2,
    p3: Vec2,
    point: Vec2,
    threshold: f32,
) -> bool {
    let samples = segment_sample_count(p0, h0, h1, p3);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        if is_near(cubic_bezier(p0, h0, h1, p3, t), point, threshold) {
            return true;
        }
    }
    false
}

/// Achsen-aligniertes Rechteck in logischen Koordinaten.
///
/// `from_corners` normalisiert, d.h. negative Breiten/Höhen einer
/// Drag-Selektion werden durch Ecken-Tausch aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Baut ein normalisiertes Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Baut ein Rechteck aus Startpunkt und (ggf. negativer) Ausdehnung.
    pub fn from_start_size(start: Vec2, size: Vec2) -> Self {
        Self::from_corners(start, start + size)
    }

    /// Normalisierung ist idempotent.
    pub fn normalized(self) -> Self {
        Self::from_corners(self.min, self.max)
    }

    /// True wenn der Punkt innerhalb liegt (Rand inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Punkt-in-Rechteck-Test; erwartet ein normalisiertes Rechteck.
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    rect.contains(point)
}

/// Rotiert und skaliert einen Punkt um ein Zentrum.
///
/// Reihenfolge: ins lokale System verschieben, im Uhrzeigersinn rotieren
/// (Grad → Radiant über π/180), Achsen unabhängig skalieren, zurück
/// verschieben. Bei y-nach-unten entspricht die Standard-Rotationsmatrix
/// der Uhrzeigersinn-Drehung auf dem Bildschirm.
pub fn apply_rigid_transform(
    point: Vec2,
    center: Vec2,
    rotation_deg: f32,
    scale_x: f32,
    scale_y: f32,
) -> Vec2 {
    let radians = rotation_deg.to_radians();
    let (sin, cos) = radians.sin_cos();
    let local = point - center;
    let rotated = Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos);
    Vec2::new(rotated.x * scale_x, rotated.y * scale_y) + center
}

/// Umkehrung von [`apply_rigid_transform`]: erst entskalieren, dann zurückrotieren.
///
/// Wird beim Draggen von Punkten transformierter Objekte gebraucht, um die
/// Cursor-Position in gespeicherte Koordinaten zurückzurechnen. Skalierung
/// nahe Null wird als 1.0 behandelt statt durch Null zu teilen.
pub fn inverse_rigid_transform(
    point: Vec2,
    center: Vec2,
    rotation_deg: f32,
    scale_x: f32,
    scale_y: f32,
) -> Vec2 {
    let safe_x = if scale_x.abs() > f32::EPSILON {
        scale_x
    } else {
        1.0
    };
    let safe_y = if scale_y.abs() > f32::EPSILON {
        scale_y
    } else {
        1.0
    };
    let local = point - center;
    let unscaled = Vec2::new(local.x / safe_x, local.y / safe_y);
    let radians = (-rotation_deg).to_radians();
    let (sin, cos) = radians.sin_cos();
    Vec2::new(
        unscaled.x * cos - unscaled.y * sin,
        unscaled.x * sin + unscaled.y * cos,
    ) + center
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degenerate_curve_is_a_point_for_all_t() {
        let p = Vec2::new(3.5, -7.25);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let result = cubic_bezier(p, p, p, p, t);
            assert_relative_eq!(result.x, p.x);
            assert_relative_eq!(result.y, p.y);
        }
    }

    #[test]
    fn cubic_bezier_hits_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(50.0, 0.0);
        let h1 = Vec2::new(50.0, 100.0);
        let p3 = Vec2::new(100.0, 100.0);
        assert_relative_eq!(cubic_bezier(p0, h0, h1, p3, 0.0).x, p0.x);
        assert_relative_eq!(cubic_bezier(p0, h0, h1, p3, 1.0).y, p3.y);
    }

    #[test]
    fn midpoint_of_straight_segment_lies_on_chord() {
        let p0 = Vec2::new(0.0, 0.0);
        let p3 = Vec2::new(100.0, 0.0);
        // Handles auf der Sehne → Kurve ist die Strecke selbst
        let mid = cubic_bezier(p0, Vec2::new(33.0, 0.0), Vec2::new(66.0, 0.0), p3, 0.5);
        assert_relative_eq!(mid.y, 0.0);
        assert!(mid.x > 40.0 && mid.x < 60.0);
    }

    #[test]
    fn derivative_matches_forward_difference() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(30.0, -40.0);
        let h1 = Vec2::new(70.0, 40.0);
        let p3 = Vec2::new(100.0, 0.0);
        let t = 0.4;
        let eps = 1e-3;
        let analytic = cubic_bezier_derivative(p0, h0, h1, p3, t);
        let numeric =
            (cubic_bezier(p0, h0, h1, p3, t + eps) - cubic_bezier(p0, h0, h1, p3, t - eps))
                / (2.0 * eps);
        assert_relative_eq!(analytic.x, numeric.x, epsilon = 0.05);
        assert_relative_eq!(analytic.y, numeric.y, epsilon = 0.05);
    }

    #[test]
    fn zero_offset_reproduces_base_curve() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(30.0, -40.0);
        let h1 = Vec2::new(70.0, 40.0);
        let p3 = Vec2::new(100.0, 0.0);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let base = cubic_bezier(p0, h0, h1, p3, t);
            let offset = offset_point_on_curve(p0, h0, h1, p3, t, 0.0);
            assert_relative_eq!(offset.x, base.x);
            assert_relative_eq!(offset.y, base.y);
        }
    }

    #[test]
    fn offset_displaces_perpendicular_to_straight_segment() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(25.0, 0.0);
        let h1 = Vec2::new(75.0, 0.0);
        let p3 = Vec2::new(100.0, 0.0);
        // Tangente zeigt nach +x → Normale nach +y (90° im Uhrzeigersinn bei y-unten)
        let shifted = offset_point_on_curve(p0, h0, h1, p3, 0.5, 10.0);
        assert_relative_eq!(shifted.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn offset_distance_is_constant_along_straight_segment() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(25.0, 0.0);
        let h1 = Vec2::new(75.0, 0.0);
        let p3 = Vec2::new(100.0, 0.0);
        for i in 1..20 {
            let t = i as f32 / 20.0;
            let base = cubic_bezier(p0, h0, h1, p3, t);
            let shifted = offset_point_on_curve(p0, h0, h1, p3, t, 7.5);
            assert_relative_eq!(base.distance(shifted), 7.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn offset_is_continuous_in_t() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(30.0, -40.0);
        let h1 = Vec2::new(70.0, 40.0);
        let p3 = Vec2::new(100.0, 0.0);
        let mut prev = offset_point_on_curve(p0, h0, h1, p3, 0.0, 12.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let current = offset_point_on_curve(p0, h0, h1, p3, t, 12.0);
            // Kein Sprung zwischen benachbarten Samples
            assert!(prev.distance(current) < 10.0);
            prev = current;
        }
    }

    #[test]
    fn zero_length_segment_offset_does_not_produce_nan() {
        let p = Vec2::new(5.0, 5.0);
        let result = offset_point_on_curve(p, p, p, p, 0.5, 10.0);
        assert!(result.x.is_finite());
        assert!(result.y.is_finite());
        // Komplett entartet → Identität
        assert_relative_eq!(result.x, p.x);
        assert_relative_eq!(result.y, p.y);
    }

    #[test]
    fn degenerate_derivative_falls_back_to_handle_chord() {
        // H0 == P0 → analytische Ableitung bei t=0 ist Null
        let p0 = Vec2::new(0.0, 0.0);
        let h1 = Vec2::new(50.0, 0.0);
        let p3 = Vec2::new(100.0, 0.0);
        let result = offset_point_on_curve(p0, p0, h1, p3, 0.0, 5.0);
        assert!(result.x.is_finite() && result.y.is_finite());
        assert_relative_eq!(result.distance(p0), 5.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_length_segment_with_distinct_handles_uses_handle_chord() {
        // P0 == P3, Handles auseinander → Sehne zwischen den Handles als Tangente
        let p = Vec2::new(10.0, 10.0);
        let h0 = Vec2::new(0.0, 10.0);
        let h1 = Vec2::new(20.0, 10.0);
        let result = offset_point_on_curve(p, h0, h1, p, 0.5, 4.0);
        assert!(result.x.is_finite() && result.y.is_finite());
    }

    #[test]
    fn hit_test_finds_point_on_curve() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(50.0, 0.0);
        let h1 = Vec2::new(50.0, 100.0);
        let p3 = Vec2::new(100.0, 100.0);
        let on_curve = cubic_bezier(p0, h0, h1, p3, 0.37);
        assert!(is_point_on_curve_segment(p0, h0, h1, p3, on_curve, 1.0));
    }

    #[test]
    fn hit_test_rejects_distant_point() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(50.0, 0.0);
        let h1 = Vec2::new(50.0, 100.0);
        let p3 = Vec2::new(100.0, 100.0);
        assert!(!is_point_on_curve_segment(
            p0,
            h0,
            h1,
            p3,
            Vec2::new(-200.0, -200.0),
            5.0
        ));
    }

    #[test]
    fn sample_count_grows_with_segment_length() {
        let short = segment_sample_count(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        );
        let long = segment_sample_count(
            Vec2::ZERO,
            Vec2::new(500.0, 0.0),
            Vec2::new(1000.0, 0.0),
            Vec2::new(1500.0, 0.0),
        );
        assert_eq!(short, MIN_SEGMENT_SAMPLES);
        assert!(long > short);
        assert!(long <= MAX_SEGMENT_SAMPLES);
    }

    #[test]
    fn rect_from_negative_extents_equals_swapped_corners() {
        let a = Rect::from_start_size(Vec2::new(100.0, 80.0), Vec2::new(-100.0, -80.0));
        let b = Rect::from_corners(Vec2::ZERO, Vec2::new(100.0, 80.0));
        assert_eq!(a, b);
    }

    #[test]
    fn rect_normalization_is_idempotent() {
        let rect = Rect::from_corners(Vec2::new(10.0, 20.0), Vec2::new(-5.0, -8.0));
        assert_eq!(rect, rect.normalized());
        assert_eq!(rect, rect.normalized().normalized());
    }

    #[test]
    fn point_in_rect_includes_boundary() {
        let rect = Rect::from_corners(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(point_in_rect(Vec2::new(0.0, 0.0), &rect));
        assert!(point_in_rect(Vec2::new(10.0, 10.0), &rect));
        assert!(point_in_rect(Vec2::new(5.0, 5.0), &rect));
        assert!(!point_in_rect(Vec2::new(10.01, 5.0), &rect));
    }

    #[test]
    fn identity_transform_returns_point_unchanged() {
        let point = Vec2::new(12.0, -7.0);
        let center = Vec2::new(3.0, 4.0);
        let result = apply_rigid_transform(point, center, 0.0, 1.0, 1.0);
        assert_relative_eq!(result.x, point.x);
        assert_relative_eq!(result.y, point.y);
    }

    #[test]
    fn rotation_90_degrees_clockwise() {
        // Punkt rechts vom Zentrum wandert bei 90° Uhrzeigersinn nach unten (+y)
        let result = apply_rigid_transform(Vec2::new(10.0, 0.0), Vec2::ZERO, 90.0, 1.0, 1.0);
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(result.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn non_uniform_scale_applies_per_axis() {
        let result = apply_rigid_transform(Vec2::new(10.0, 10.0), Vec2::ZERO, 0.0, 2.0, 0.5);
        assert_relative_eq!(result.x, 20.0);
        assert_relative_eq!(result.y, 5.0);
    }

    #[test]
    fn inverse_transform_round_trips() {
        let point = Vec2::new(17.0, -3.0);
        let center = Vec2::new(5.0, 5.0);
        let transformed = apply_rigid_transform(point, center, 33.0, 1.5, 0.75);
        let back = inverse_rigid_transform(transformed, center, 33.0, 1.5, 0.75);
        assert_relative_eq!(back.x, point.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, point.y, epsilon = 1e-3);
    }

    #[test]
    fn inverse_transform_survives_zero_scale() {
        let result = inverse_rigid_transform(Vec2::new(1.0, 2.0), Vec2::ZERO, 0.0, 0.0, 0.0);
        assert!(result.x.is_finite());
        assert!(result.y.is_finite());
    }
}
