//! Application-Layer: Controller, State, Events, Handler und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Objekte, View, Werkzeuge).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, SelectionState, UiState, ViewState};
