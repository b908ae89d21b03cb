// src/math/geometry/polygon/core/properties.rs

use super::polygon::Polygon;
use crate::math::utils::simple_geometry::{cross_product_2d, distance};
use std::fmt;

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Berechnet die Fläche des Polygons (Shoelace-Formel)
    fn area(&self) -> f64;

    /// Berechnet den Umfang des Polygons (geschlossener Kantenzug)
    fn perimeter(&self) -> f64;

    /// Bezeichnung anhand der Vertex-Anzahl
    fn polygon_type(&self) -> PolygonType;

    fn determine_polygon_type(&self) -> String {
        self.polygon_type().to_string()
    }
}

/// Einteilung nur nach Vertex-Anzahl, nicht nach der tatsächlichen Form.
/// Jedes Viereck heißt `Square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonType {
    Triangle,
    Square,
    NGon(usize),
}

impl PolygonType {
    pub fn from_vertex_count(count: usize) -> Self {
        match count {
            3 => PolygonType::Triangle,
            4 => PolygonType::Square,
            n => PolygonType::NGon(n),
        }
    }
}

impl fmt::Display for PolygonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonType::Triangle => write!(f, "Triangle"),
            PolygonType::Square => write!(f, "Square"),
            PolygonType::NGon(n) => write!(f, "{}-gon", n),
        }
    }
}

impl PolygonProperties for Polygon {
    fn area(&self) -> f64 {
        let vertices = self.vertices();
        let n = vertices.len();

        let mut area: f64 = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += cross_product_2d(vertices[i], vertices[j]);
        }

        area.abs() / 2.0
    }

    fn perimeter(&self) -> f64 {
        let vertices = self.vertices();
        let n = vertices.len();

        (0..n)
            .map(|i| distance(vertices[i], vertices[(i + 1) % n]))
            .sum()
    }

    fn polygon_type(&self) -> PolygonType {
        PolygonType::from_vertex_count(self.vertex_count())
    }
}
