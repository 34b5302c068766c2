//! Zeichnet Kurvenzüge: Hauptkurve plus parallele Offset-Ebenen.

use super::to_screen;
use crate::core::{geometry, BezierObject, Camera2D, ControlPoint};
use crate::shared::color32;

/// Zeichnet alle Kurven-Ebenen eines Objekts.
///
/// Offset-Ebenen (1..N-1) werden zuerst gezeichnet, die Hauptkurve
/// (Ebene 0) zuletzt, damit ihr Strich zuoberst liegt. Ebene `k` liegt
/// im senkrechten Abstand `spacing · k` zur Hauptkurve.
pub fn draw_object(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    object: &BezierObject,
) {
    let points = object.transformed_points();
    if points.len() < 2 {
        return;
    }

    let config = &object.curve_config;
    for layer in layer_order(config.parallel_count) {
        let style = config.style_for(layer);
        let offset = config.spacing * layer as f32;
        let stroke = egui::Stroke::new(
            (style.width * camera.zoom).max(0.5),
            color32(style.color),
        );
        draw_layer(painter, rect, camera, object, &points, offset, stroke);
    }
}

/// Zeichenreihenfolge der Ebenen: Offsets (N-1..1) zuerst, Hauptkurve (0)
/// zuletzt, damit ihr Strich zuoberst liegt.
fn layer_order(parallel_count: u32) -> impl Iterator<Item = usize> {
    (0..parallel_count as usize).rev()
}

/// Zeichnet eine einzelne Ebene als Folge abgetasteter Segment-Polylinien.
fn draw_layer(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    object: &BezierObject,
    points: &[ControlPoint],
    offset: f32,
    stroke: egui::Stroke,
) {
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if !a.is_finite() || !b.is_finite() {
            log::warn!(
                "Renderer: nicht-endliches Segment in Objekt '{}' übersprungen",
                object.name
            );
            continue;
        }

        let (p0, h0, h1, p3) = (a.position, a.handle_out, b.handle_in, b.position);
        let samples = geometry::segment_sample_count(p0, h0, h1, p3);
        let mut polyline = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let logical = if offset == 0.0 {
                geometry::cubic_bezier(p0, h0, h1, p3, t)
            } else {
                geometry::offset_point_on_curve(p0, h0, h1, p3, t, offset)
            };
            if !logical.is_finite() {
                log::warn!(
                    "Renderer: nicht-endliches Sample in Objekt '{}' übersprungen",
                    object.name
                );
                continue;
            }
            polyline.push(to_screen(rect, camera, logical));
        }

        if polyline.len() >= 2 {
            painter.add(egui::Shape::line(polyline, stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::layer_order;
    use crate::core::{CurveConfig, CurveStyle};

    #[test]
    fn offsets_are_drawn_before_the_main_curve() {
        let order: Vec<usize> = layer_order(3).collect();
        assert_eq!(order, vec![2, 1, 0]);
        // Hauptkurve als letzter Pass → liegt zuoberst
        assert_eq!(order.last(), Some(&0));
    }

    #[test]
    fn three_layers_use_three_distinct_styles() {
        let blue = CurveStyle {
            color: [0.0, 0.0, 1.0, 1.0],
            width: 2.0,
        };
        let red = CurveStyle {
            color: [1.0, 0.0, 0.0, 1.0],
            width: 2.0,
        };
        let green = CurveStyle {
            color: [0.0, 1.0, 0.0, 1.0],
            width: 2.0,
        };
        let config = CurveConfig {
            parallel_count: 3,
            spacing: 10.0,
            styles: vec![blue.clone(), red.clone(), green.clone()],
        };

        let passes: Vec<&CurveStyle> = layer_order(config.parallel_count)
            .map(|layer| config.style_for(layer))
            .collect();

        assert_eq!(passes, vec![&green, &red, &blue]);
        // Letzter Pass ist die blaue Hauptkurve
        assert_eq!(passes.last().map(|s| s.color), Some(blue.color));
    }
}

