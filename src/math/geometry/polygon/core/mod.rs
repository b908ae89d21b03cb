// src/math/geometry/polygon/core/mod.rs
pub mod polygon;
pub mod properties;
pub mod validation;

pub use polygon::Polygon;
pub use properties::{PolygonProperties, PolygonType};
pub use validation::{PolygonValidator, QuickValidation, ValidationLevel};
