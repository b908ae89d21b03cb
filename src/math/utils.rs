// src/math/utils.rs

/// Konstanten für Polygone
pub mod constants {
    /// Mindestanzahl an Vertices eines Polygons
    pub const MIN_VERTICES: usize = 3;
    /// Koordinaten pro Vertex (x, y)
    pub const COORDINATES_PER_VERTEX: usize = 2;
}

/// Einfache Geometrie-Hilfsfunktionen
pub mod simple_geometry {
    use crate::math::types::Point2D;

    /// Distanz zwischen zwei Punkten
    pub fn distance(p1: Point2D, p2: Point2D) -> f64 {
        p1.distance(p2)
    }

    /// Kreuzprodukt der Ortsvektoren (Shoelace-Term)
    pub fn cross_product_2d(a: Point2D, b: Point2D) -> f64 {
        a.x * b.y - b.x * a.y
    }
}
