// src/math/types/mod.rs
pub mod point;

pub use point::*;

// Re-export des externen Vektortyps
pub use glam::DVec2;

// Einheitlicher Punkttyp für das gesamte Modul (doppelte Genauigkeit)
pub type Point2D = DVec2;
