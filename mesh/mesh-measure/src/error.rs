//! Error types for measurement operations.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
///
/// Degenerate or empty cross-sections are not errors; they are reported
/// as missing measurements by the callers that aggregate sections.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    /// Input mesh has no vertices or no faces, so its extent is undefined.
    #[error("input mesh is empty ({vertices} vertices, {faces} faces)")]
    EmptyMesh {
        /// Number of vertices in the mesh.
        vertices: usize,
        /// Number of faces in the mesh.
        faces: usize,
    },

    /// A face references a vertex index past the end of the vertex list.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidFaceIndex {
        /// Offending face.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Offending vertex.
        vertex: usize,
    },

    /// Invalid measurement parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl MeasureError {
    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeasureError::EmptyMesh {
            vertices: 0,
            faces: 3,
        };
        assert!(format!("{err}").contains("empty"));

        let err = MeasureError::InvalidFaceIndex {
            face: 4,
            index: 99,
            vertex_count: 8,
        };
        let msg = format!("{err}");
        assert!(msg.contains("face 4"));
        assert!(msg.contains("99"));

        let err = MeasureError::invalid_params("bad value");
        assert!(format!("{err}").contains("bad value"));
    }
}
