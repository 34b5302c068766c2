//! Use-Cases der Objekt- und Punktbearbeitung.

pub mod objects;
pub mod points;
