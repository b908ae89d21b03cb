// src/math/error.rs
use thiserror::Error;

/// Validierungsfehler für Polygon-Mutationen.
/// Jede Variante ist ein "Argument außerhalb des gültigen Bereichs"-Fehler des Aufrufers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Polygon must have at least {expected} vertices, got {actual}")]
    InsufficientVertices { expected: usize, actual: usize },

    #[error("Vertex {index} must have exactly two coordinates (x, y), got {actual}")]
    InvalidCoordinateCount { index: usize, actual: usize },

    #[error("Vertices {first} and {second} have the same coordinates")]
    DuplicateVertex { first: usize, second: usize },

    #[error("Vertex table has {actual} rows but the polygon expects {expected}")]
    VertexCountMismatch { expected: usize, actual: usize },
}

impl MathError {
    /// Alle Varianten melden einen Wert außerhalb des zulässigen Bereichs.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            MathError::InsufficientVertices { .. }
                | MathError::InvalidCoordinateCount { .. }
                | MathError::DuplicateVertex { .. }
                | MathError::VertexCountMismatch { .. }
        )
    }
}

pub type MathResult<T> = Result<T, MathError>;
