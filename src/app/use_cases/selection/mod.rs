//! Use-Cases der Selektionslogik.

pub mod helpers;
pub mod move_objects;
pub mod pick;
pub mod rect;

pub use helpers::clear_selection;
pub use move_objects::move_selected_objects;
pub use pick::select_object_at;
pub use rect::{select_all, select_objects_in_rect};
