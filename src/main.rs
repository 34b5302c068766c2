//! Bezier Curve Studio.
//!
//! Interaktive Zeichenfläche für stückweise kubische Bézier-Kurven mit
//! parallelen Offset-Kurven, Multi-Objekt-Selektion und Undo/Redo.

use bezier_curve_studio::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Curve Studio v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bezier Curve Studio"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Curve Studio",
            options,
            Box::new(|_cc| Ok(Box::new(StudioApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct StudioApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl StudioApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_background_upload(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl StudioApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.sketch,
                    &self.state.selection,
                    self.state.editor.active_tool,
                    self.state.editor.drawing.as_ref(),
                    &self.state.options,
                ));

                // Cursorposition für Führungslinie und Koordinaten-Overlay
                let pointer_logical = response.hover_pos().map(|pos| {
                    let local = pos - rect.min;
                    self.state
                        .view
                        .camera
                        .screen_to_logical(glam::Vec2::new(local.x, local.y))
                });

                let scene =
                    self.controller
                        .build_render_scene(&self.state, viewport_size, pointer_logical);

                let painter = ui.painter_at(rect);
                self.renderer.draw_scene(&painter, rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_background_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        if let Some(image) = self.state.view.background_image.as_deref() {
            self.renderer.set_background(ctx, image);
            log::info!("Hintergrundbild in Renderer hochgeladen");
        } else {
            self.renderer.clear_background();
            log::info!("Hintergrundbild aus Renderer entfernt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        // Explizites markDirty/renderIfDirty: neu zeichnen nur bei echten
        // Events oder bewegtem Cursor (Führungslinie), kein Poll-Loop
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
