//! Eigenschaften-Panel für das selektierte Objekt.

use crate::app::{AppIntent, AppState};
use crate::core::{BezierObject, TransformSettings};

/// Rendert das Eigenschaften-Panel am rechten Rand.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let selected: Vec<&BezierObject> = state
                .selection
                .selected_object_ids
                .iter()
                .filter_map(|id| state.sketch.object(id))
                .collect();

            match selected.as_slice() {
                [] => {
                    ui.label("Kein Objekt selektiert.");
                    if state.editor.is_drawing() {
                        ui.label("Zeichnung läuft — Enter schließt ab.");
                    }
                }
                [object] => {
                    show_single_object(ui, object, &mut events);
                }
                many => {
                    ui.label(format!("{} Objekte selektiert", many.len()));
                    if ui.button("Auswahl löschen").clicked() {
                        events.push(AppIntent::DeleteSelectedRequested);
                    }
                }
            }
        });

    events
}

fn show_single_object(ui: &mut egui::Ui, object: &BezierObject, events: &mut Vec<AppIntent>) {
    let object_id = object.id.clone();

    // ── Name ──
    let mut name = object.name.clone();
    ui.horizontal(|ui| {
        ui.label("Name:");
        if ui.text_edit_singleline(&mut name).changed() {
            events.push(AppIntent::SetObjectNameRequested {
                object_id: object_id.clone(),
                name: name.clone(),
            });
        }
    });
    ui.label(format!("Punkte: {}", object.points.len()));

    ui.separator();
    ui.label("Kurven-Ebenen");

    let mut parallel_count = object.curve_config.parallel_count;
    if ui
        .add(
            egui::DragValue::new(&mut parallel_count)
                .range(1..=8)
                .prefix("Anzahl: "),
        )
        .changed()
    {
        events.push(AppIntent::SetParallelCountRequested {
            object_id: object_id.clone(),
            count: parallel_count,
        });
    }

    if object.curve_config.parallel_count > 1 {
        let mut spacing = object.curve_config.spacing;
        if ui
            .add(
                egui::DragValue::new(&mut spacing)
                    .speed(0.5)
                    .range(0.0..=500.0)
                    .prefix("Abstand: "),
            )
            .changed()
        {
            events.push(AppIntent::SetSpacingRequested {
                object_id: object_id.clone(),
                spacing,
            });
        }
    }

    for layer in 0..object.curve_config.parallel_count as usize {
        let mut style = object.curve_config.style_for(layer).clone();
        let label = if layer == 0 {
            "Hauptkurve".to_string()
        } else {
            format!("Offset {}", layer)
        };
        ui.horizontal(|ui| {
            ui.label(label);
            let mut changed = ui
                .color_edit_button_rgba_unmultiplied(&mut style.color)
                .changed();
            changed |= ui
                .add(
                    egui::DragValue::new(&mut style.width)
                        .speed(0.1)
                        .range(0.1..=50.0)
                        .suffix(" px"),
                )
                .changed();
            if changed {
                events.push(AppIntent::SetStyleRequested {
                    object_id: object_id.clone(),
                    layer,
                    style: style.clone(),
                });
            }
        });
    }

    ui.separator();
    ui.label("Transformation");

    let mut transform = object.transform.clone();
    let mut changed = false;
    changed |= ui
        .add(
            egui::DragValue::new(&mut transform.rotation)
                .speed(1.0)
                .suffix("°")
                .prefix("Rotation: "),
        )
        .changed();
    changed |= ui
        .add(
            egui::DragValue::new(&mut transform.scale_x)
                .speed(0.01)
                .range(0.05..=20.0)
                .prefix("Skalierung X: "),
        )
        .changed();
    changed |= ui
        .add(
            egui::DragValue::new(&mut transform.scale_y)
                .speed(0.01)
                .range(0.05..=20.0)
                .prefix("Skalierung Y: "),
        )
        .changed();
    if changed {
        events.push(AppIntent::SetTransformRequested {
            object_id: object_id.clone(),
            transform,
        });
    }
    if !object.transform.is_identity() && ui.button("Transformation zurücksetzen").clicked() {
        events.push(AppIntent::SetTransformRequested {
            object_id,
            transform: TransformSettings::default(),
        });
    }
}
