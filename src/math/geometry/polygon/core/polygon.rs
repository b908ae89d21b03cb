// src/math/geometry/polygon/core/polygon.rs

use super::validation::{PolygonValidator, QuickValidation};
use crate::math::{error::*, types::*, utils::constants::*};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};

/// Polygon als geordnete Folge von 2D-Vertices.
///
/// Die Vertex-Anzahl wird immer aus der Länge der Vertex-Liste abgeleitet,
/// beide Werte können also nicht auseinanderlaufen. Mutationen laufen nur
/// über die validierenden Setter und `add_vertex`; ein abgelehnter Aufruf
/// lässt das Polygon unverändert.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Standard-Polygon: drei Vertices im Ursprung
    pub fn new() -> Self {
        Self::default()
    }

    /// Polygon mit `count` Vertices im Ursprung
    pub fn with_vertex_count(count: usize) -> MathResult<Self> {
        PolygonValidator::default().validate_vertex_count(count)?;
        Ok(Self {
            vertices: vec![Point2D::ZERO; count],
        })
    }

    /// Erstellt ein Polygon aus Vertex-Anzahl und Koordinatentabelle.
    /// Die Anzahl der Zeilen muss `vertex_count` entsprechen.
    pub fn from_table<R: AsRef<[f64]>>(vertex_count: usize, rows: &[R]) -> MathResult<Self> {
        let validator = PolygonValidator::default();
        validator.validate_vertex_count(vertex_count)?;
        if rows.len() != vertex_count {
            return Err(MathError::VertexCountMismatch {
                expected: vertex_count,
                actual: rows.len(),
            });
        }

        let vertices = validator.validate_table(rows)?;
        Ok(Self { vertices })
    }

    /// Erstellt ein Polygon aus Punkten (mind. 3, keine Duplikate)
    pub fn from_points(vertices: Vec<Point2D>) -> MathResult<Self> {
        PolygonValidator::default().validate_points(&vertices)?;
        Ok(Self { vertices })
    }

    /// Anzahl der Vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Setzt die Vertex-Anzahl.
    /// Überzählige Vertices werden entfernt, fehlende im Ursprung ergänzt.
    ///
    /// Wie bei `add_vertex` gibt es keine Duplikatprüfung: Ergänzte Vertices im
    /// Ursprung können mit einem vorhandenen Vertex im Ursprung oder miteinander
    /// zusammenfallen. Das wird nur per `warn!` gemeldet, `is_valid()` ist danach `false`.
    pub fn set_vertex_count(&mut self, count: usize) -> MathResult<()> {
        PolygonValidator::default().validate_vertex_count(count)?;

        let previous = self.vertices.len();
        if count != previous {
            debug!(from = previous, to = count, "resizing polygon vertex table");
            self.vertices.resize(count, Point2D::ZERO);
        }

        if count > previous {
            let duplicates: Vec<_> = QuickValidation::duplicate_vertices(self)
                .into_iter()
                .filter(|&(_, second)| second >= previous)
                .collect();
            if !duplicates.is_empty() {
                warn!(
                    padded = count - previous,
                    ?duplicates,
                    "padding vertices at the origin duplicate existing coordinates"
                );
            }
        }
        Ok(())
    }

    /// Zugriff auf Vertices (nur lesend)
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<Point2D> {
        self.vertices.get(index).copied()
    }

    /// Kopie der Vertices als Koordinatentabelle
    pub fn to_table(&self) -> Vec<[f64; COORDINATES_PER_VERTEX]> {
        self.vertices.iter().copied().map(point_to_row).collect()
    }

    /// Ersetzt alle Vertices.
    ///
    /// Geprüft wird in dieser Reihenfolge: mindestens drei Zeilen, genau zwei
    /// Koordinaten pro Zeile, keine zwei Zeilen mit identischen Koordinaten.
    pub fn set_vertices<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> MathResult<()> {
        let vertices = PolygonValidator::default().validate_table(rows)?;
        debug!(count = vertices.len(), "replacing polygon vertices");
        self.vertices = vertices;
        Ok(())
    }

    /// Hängt einen Vertex an.
    /// Bei vollem Speicher wächst die Vertex-Liste um genau einen Platz.
    /// Anders als `set_vertices` findet hier keine Duplikatprüfung statt.
    pub fn add_vertex(&mut self, x: f64, y: f64) {
        if self.vertices.len() == self.vertices.capacity() {
            trace!(
                capacity = self.vertices.capacity(),
                "growing polygon storage by one vertex"
            );
            self.vertices.reserve_exact(1);
        }

        let vertex = Point2D::new(x, y);
        if let Some(index) = self
            .vertices
            .iter()
            .position(|&v| same_coordinates(v, vertex))
        {
            warn!(
                index,
                x, y, "added vertex duplicates the coordinates of an existing vertex"
            );
        }

        self.vertices.push(vertex);
        trace!(count = self.vertices.len(), x, y, "vertex added");
    }

    /// Erfüllt das Polygon aktuell alle Invarianten?
    pub fn is_valid(&self) -> bool {
        QuickValidation::is_valid(self)
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            vertices: vec![Point2D::ZERO; MIN_VERTICES],
        }
    }
}

/// Exakte Gleichheit: gleiche Anzahl und bitweise gleiche Koordinaten in gleicher Reihenfolge.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(&a, &b)| point_bits(a) == point_bits(b))
    }
}

impl Eq for Polygon {}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.len().hash(state);
        for &vertex in &self.vertices {
            point_bits(vertex).hash(state);
        }
    }
}

/// Koordinaten werden mit Rusts `{}` für `f64` formatiert (kürzeste exakte Dezimaldarstellung,
/// ohne Exponent, z.B. `1e-7` als `0.0000001`).
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Polygon with {} vertices:", self.vertices.len())?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            writeln!(f, "Vertex {}: ({}, {})", i + 1, vertex.x, vertex.y)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = MathError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::from_points(vertices)
    }
}

impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    fn triangle() -> Polygon {
        Polygon::from_table(3, &[[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]]).unwrap()
    }

    fn hash_of(polygon: &Polygon) -> u64 {
        let mut hasher = DefaultHasher::new();
        polygon.hash(&mut hasher);
        hasher.finish()
    }

    fn random_polygon(rng: &mut StdRng) -> Polygon {
        let count = rng.random_range(3..12);
        // Unterschiedliche x-Koordinaten halten die Vertices eindeutig
        let rows: Vec<[f64; 2]> = (0..count)
            .map(|i| [i as f64 + rng.random::<f64>() * 0.5, rng.random_range(-100.0..100.0)])
            .collect();
        Polygon::from_table(count, &rows).unwrap()
    }

    #[test]
    fn test_default_polygon() {
        let polygon = Polygon::new();
        assert_eq!(polygon.vertex_count(), 3);
        assert!(polygon.vertices().iter().all(|&v| v == Point2D::ZERO));
    }

    #[test]
    fn test_with_vertex_count() {
        let polygon = Polygon::with_vertex_count(6).unwrap();
        assert_eq!(polygon.vertex_count(), 6);
        assert!(matches!(
            Polygon::with_vertex_count(2),
            Err(MathError::InsufficientVertices { actual: 2, .. })
        ));
    }

    #[test]
    fn test_set_vertex_count_rejects_small_values() {
        let mut polygon = triangle();
        for n in 0..3 {
            let err = polygon.set_vertex_count(n).unwrap_err();
            assert!(err.is_out_of_range());
        }
        assert_eq!(polygon, triangle());
    }

    #[test]
    fn test_set_vertex_count_resizes() {
        let mut polygon = triangle();
        polygon.set_vertex_count(5).unwrap();
        assert_eq!(polygon.vertex_count(), 5);
        assert_eq!(polygon.vertex(2), Some(Point2D::new(0.0, 4.0)));
        assert_eq!(polygon.vertex(4), Some(Point2D::ZERO));

        polygon.set_vertex_count(3).unwrap();
        assert_eq!(polygon, triangle());
    }

    #[test]
    fn test_set_vertex_count_padding_may_duplicate() {
        // Ergänzte Vertices im Ursprung fallen mit (0, 0) und miteinander zusammen
        let mut polygon = triangle();
        polygon.set_vertex_count(5).unwrap();

        assert!(!polygon.is_valid());
        assert_eq!(
            QuickValidation::duplicate_vertices(&polygon),
            vec![(0, 3), (0, 4), (3, 4)]
        );

        // Ein einzelner ergänzter Vertex ohne Vertex im Ursprung bleibt gültig
        let mut shifted = Polygon::from_table(3, &[[1.0, 1.0], [4.0, 1.0], [1.0, 5.0]]).unwrap();
        shifted.set_vertex_count(4).unwrap();
        assert!(shifted.is_valid());
    }

    #[test]
    fn test_set_vertex_count_matching_table_is_noop() {
        let mut polygon = Polygon::new();
        polygon
            .set_vertices(&[[-1.0, -1.0], [-5.0, -1.0], [-5.0, -5.0], [-1.0, -5.0]])
            .unwrap();
        let before = polygon.clone();
        polygon.set_vertex_count(4).unwrap();
        assert_eq!(polygon, before);
    }

    #[test]
    fn test_set_vertices_replaces_table() {
        let mut polygon = Polygon::new();
        let rows = [[0.0, 0.0], [3.0, 0.0], [0.0, 4.0], [-2.0, 1.0]];
        polygon.set_vertices(&rows).unwrap();

        assert_eq!(polygon.vertex_count(), 4);
        assert_eq!(polygon.to_table(), rows.to_vec());
    }

    #[test]
    fn test_rejected_set_vertices_leaves_state_unchanged() {
        let mut polygon = triangle();

        assert!(polygon.set_vertices(&[[0.0, 0.0], [1.0, 1.0]]).is_err());
        assert!(
            polygon
                .set_vertices(&[[0.0, 0.0], [0.0, 0.0], [2.0, 5.0], [2.0, 5.0]])
                .is_err()
        );
        let ragged: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0], vec![2.0, 2.0]];
        assert!(polygon.set_vertices(&ragged).is_err());

        assert_eq!(polygon, triangle());
    }

    #[test]
    fn test_from_table_count_mismatch() {
        let empty: [[f64; 2]; 0] = [];
        assert!(matches!(
            Polygon::from_table(0, &empty),
            Err(MathError::InsufficientVertices { .. })
        ));
        assert_eq!(
            Polygon::from_table(4, &[[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]]),
            Err(MathError::VertexCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 4.0),
        ];
        let polygon = Polygon::try_from(points.clone()).unwrap();
        assert_eq!(polygon, triangle());
        assert_eq!(Vec::from(polygon), points);

        assert!(Polygon::from_points(vec![Point2D::ZERO, Point2D::X, Point2D::ZERO]).is_err());
    }

    #[test]
    fn test_add_vertex_grows_default_polygon() {
        let mut polygon = Polygon::new();
        polygon.add_vertex(3.5, 4.2);

        assert_eq!(polygon.vertex_count(), 4);
        assert_eq!(polygon.vertex(3), Some(Point2D::new(3.5, 4.2)));
    }

    #[test]
    fn test_add_vertex_allows_duplicates() {
        let mut polygon = triangle();
        polygon.add_vertex(0.0, 0.0);
        assert_eq!(polygon.vertex_count(), 4);
        assert!(!polygon.is_valid());
    }

    #[test]
    fn test_add_vertex_preserves_prior_vertices() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut polygon = random_polygon(&mut rng);
            let before = polygon.vertices().to_vec();
            let (x, y) = (rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));

            polygon.add_vertex(x, y);

            assert_eq!(polygon.vertex_count(), before.len() + 1);
            assert_eq!(&polygon.vertices()[..before.len()], before.as_slice());
            assert_eq!(polygon.vertices().last(), Some(&Point2D::new(x, y)));
        }
    }

    #[test]
    fn test_equality() {
        let a = triangle();
        let b = triangle();
        assert_eq!(a, a);
        assert_eq!(a, b);

        let c = Polygon::from_table(3, &[[0.0, 0.0], [3.0, 0.0], [0.0, 4.5]]).unwrap();
        assert_ne!(a, c);

        let mut d = triangle();
        d.add_vertex(1.0, 1.0);
        assert_ne!(a, d);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let rotated = Polygon::from_table(3, &[[3.0, 0.0], [0.0, 4.0], [0.0, 0.0]]).unwrap();
        assert_ne!(triangle(), rotated);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Polygon::from_table(3, &[[0.1 + 0.2, 0.0], [3.0, 0.0], [0.0, 4.0]]).unwrap();
        let b = Polygon::from_table(3, &[[0.3, 0.0], [3.0, 0.0], [0.0, 4.0]]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let polygon = random_polygon(&mut rng);
            let copy = polygon.clone();
            assert_eq!(polygon, copy);
            assert_eq!(hash_of(&polygon), hash_of(&copy));
        }

        let set: HashSet<Polygon> = [triangle(), triangle(), Polygon::new()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            triangle().to_string(),
            "Polygon with 3 vertices:\nVertex 1: (0, 0)\nVertex 2: (3, 0)\nVertex 3: (0, 4)\n"
        );

        let mut polygon = triangle();
        polygon.add_vertex(-1.5, 2.25);
        assert!(polygon.to_string().ends_with("Vertex 4: (-1.5, 2.25)\n"));
    }

    #[test]
    fn test_iteration() {
        let polygon = triangle();
        let xs: Vec<f64> = (&polygon).into_iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 0.0]);
    }
}
