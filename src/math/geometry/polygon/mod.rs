// src/math/geometry/polygon/mod.rs

pub mod builder;
pub mod core; // Polygon-Struktur, Eigenschaften und Validierung

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::builder::PolygonBuilder;
pub use self::core::{
    Polygon, PolygonProperties, PolygonType, PolygonValidator, QuickValidation, ValidationLevel,
};
