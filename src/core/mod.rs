//! Domänen-Kern: Geometrie, Objektmodell, Kamera, Hintergrundbild.

pub mod background_image;
pub mod camera;
pub mod geometry;
pub mod object;
pub mod sketch;

pub use background_image::BackgroundImage;
pub use camera::Camera2D;
pub use geometry::Rect;
pub use object::{
    BezierObject, ControlPoint, CurveConfig, CurveStyle, PointKind, SelectedPoint,
    TransformSettings, DEFAULT_HANDLE_OFFSET,
};
pub use sketch::Sketch;
