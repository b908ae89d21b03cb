// ./src/lib.rs
pub mod math;

pub use math::prelude;
pub use math::{MathError, MathResult, Point2D};
pub use math::geometry::{Polygon, PolygonBuilder, PolygonProperties, PolygonType};
