// src/math/geometry/polygon/builder.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::core::Polygon;
use crate::math::types::Point2D;
use std::f64::consts::TAU;

/// Builder für die schrittweise Polygon-Erstellung.
/// Validiert wird erst in `build()`, dort gelten dieselben Regeln wie für `Polygon::from_points`.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Point2D>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, x: f64, y: f64) -> Self {
        self.vertices.push(Point2D::new(x, y));
        self
    }

    pub fn add_vertex(mut self, vertex: Point2D) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_vertices(mut self, vertices: impl IntoIterator<Item = Point2D>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Fügt ein achsenparalleles Rechteck hinzu (gegen den Uhrzeigersinn)
    pub fn rectangle(mut self, min: Point2D, max: Point2D) -> Self {
        self.vertices.extend([
            Point2D::new(min.x, min.y),
            Point2D::new(max.x, min.y),
            Point2D::new(max.x, max.y),
            Point2D::new(min.x, max.y),
        ]);
        self
    }

    /// Fügt ein regelmäßiges Polygon hinzu, erster Vertex auf der positiven x-Achse
    pub fn regular_polygon(mut self, center: Point2D, radius: f64, sides: usize) -> Self {
        self.vertices.extend((0..sides).map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            center + Point2D::new(angle.cos(), angle.sin()) * radius
        }));
        self
    }

    pub fn translate(mut self, offset: Point2D) -> Self {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        for vertex in &mut self.vertices {
            *vertex *= factor;
        }
        self
    }

    pub fn build(self) -> MathResult<Polygon> {
        Polygon::from_points(self.vertices)
    }
}
