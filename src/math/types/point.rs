// src/math/types/point.rs
use super::Point2D;
use crate::math::error::{MathError, MathResult};
use crate::math::utils::constants::COORDINATES_PER_VERTEX;

/// Wandelt eine Koordinatenzeile `[x, y]` in einen Punkt um.
/// `index` wird nur für die Fehlermeldung verwendet.
pub fn point_from_row(index: usize, row: &[f64]) -> MathResult<Point2D> {
    match row {
        [x, y] => Ok(Point2D::new(*x, *y)),
        _ => Err(MathError::InvalidCoordinateCount {
            index,
            actual: row.len(),
        }),
    }
}

/// Punkt als Koordinatenzeile.
pub fn point_to_row(point: Point2D) -> [f64; COORDINATES_PER_VERTEX] {
    [point.x, point.y]
}

/// Numerischer Koordinatenvergleich, wie er bei der Duplikatprüfung gilt.
/// `0.0` und `-0.0` gelten als gleich, `NaN` ist niemals ein Duplikat.
pub fn same_coordinates(a: Point2D, b: Point2D) -> bool {
    a.x == b.x && a.y == b.y
}

/// Bitmuster der Koordinaten; Grundlage für exakte Gleichheit und Hashing.
pub fn point_bits(point: Point2D) -> (u64, u64) {
    (point.x.to_bits(), point.y.to_bits())
}
