//! Bezier Curve Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use crate::app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, SelectionState,
    UiState, ViewState,
};
pub use crate::core::{
    BackgroundImage, BezierObject, Camera2D, ControlPoint, CurveConfig, CurveStyle, PointKind,
    Rect, SelectedPoint, Sketch, TransformSettings,
};
pub use crate::shared::{EditorOptions, RenderScene};
