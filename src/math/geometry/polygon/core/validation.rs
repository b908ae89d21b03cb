// src/math/geometry/polygon/core/validation.rs

use super::polygon::Polygon;
use crate::math::{error::*, types::*, utils::constants::MIN_VERTICES};

/// Verschiedene Validierungsebenen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationLevel {
    /// Nur Vertex-Anzahl und Koordinaten pro Vertex
    Basic,
    /// Zusätzlich: keine zwei Vertices mit identischen Koordinaten
    #[default]
    Standard,
}

/// Polygon-Validator
///
/// Die Prüfungen laufen immer in derselben Reihenfolge: Anzahl der Zeilen,
/// Koordinaten pro Zeile, dann paarweise Eindeutigkeit. Der erste Verstoß
/// wird als Fehler zurückgegeben.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonValidator {
    level: ValidationLevel,
}

impl PolygonValidator {
    pub fn new(level: ValidationLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    /// Prüft eine gewünschte Vertex-Anzahl
    pub fn validate_vertex_count(&self, count: usize) -> MathResult<()> {
        if count < MIN_VERTICES {
            return Err(MathError::InsufficientVertices {
                expected: MIN_VERTICES,
                actual: count,
            });
        }
        Ok(())
    }

    /// Prüft eine Koordinatentabelle und liefert die Punkte zurück
    pub fn validate_table<R: AsRef<[f64]>>(&self, rows: &[R]) -> MathResult<Vec<Point2D>> {
        self.validate_vertex_count(rows.len())?;

        let points = rows
            .iter()
            .enumerate()
            .map(|(index, row)| point_from_row(index, row.as_ref()))
            .collect::<MathResult<Vec<_>>>()?;

        if self.level == ValidationLevel::Standard {
            reject_duplicates(&points)?;
        }
        Ok(points)
    }

    /// Prüft bereits umgewandelte Punkte
    pub fn validate_points(&self, points: &[Point2D]) -> MathResult<()> {
        self.validate_vertex_count(points.len())?;
        if self.level == ValidationLevel::Standard {
            reject_duplicates(points)?;
        }
        Ok(())
    }

    /// Prüft ein bestehendes Polygon (z.B. nach `add_vertex`)
    pub fn validate(&self, polygon: &Polygon) -> MathResult<()> {
        self.validate_points(polygon.vertices())
    }
}

fn reject_duplicates(points: &[Point2D]) -> MathResult<()> {
    match find_duplicates(points).into_iter().next() {
        Some((first, second)) => Err(MathError::DuplicateVertex { first, second }),
        None => Ok(()),
    }
}

/// Paarweiser Vergleich aller Vertices, O(n²)
fn find_duplicates(points: &[Point2D]) -> Vec<(usize, usize)> {
    let mut duplicates = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if same_coordinates(points[i], points[j]) {
                duplicates.push((i, j));
            }
        }
    }
    duplicates
}

/// Schnelle Validierungsfunktionen für häufige Fälle
pub struct QuickValidation;

impl QuickValidation {
    /// Erfüllt das Polygon die Invarianten (>= 3 Vertices, keine Duplikate)?
    pub fn is_valid(polygon: &Polygon) -> bool {
        PolygonValidator::default().validate(polygon).is_ok()
    }

    /// Indexpaare von Vertices mit identischen Koordinaten
    pub fn duplicate_vertices(polygon: &Polygon) -> Vec<(usize, usize)> {
        find_duplicates(polygon.vertices())
    }
}
