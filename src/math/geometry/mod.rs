// src/math/geometry/mod.rs
pub mod polygon;

pub use self::polygon::{
    Polygon, PolygonBuilder, PolygonProperties, PolygonType, PolygonValidator, QuickValidation,
    ValidationLevel,
};
