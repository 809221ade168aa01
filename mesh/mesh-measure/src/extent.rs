//! Mesh validation and extent along an axis.

use mesh_types::{Axis, IndexedMesh, MeshBounds, MeshTopology};

use crate::error::{MeasureError, MeasureResult};

/// Vertex extent of a mesh along one axis.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_measure::axis_extent;
///
/// let extent = axis_extent(&unit_cube(), Axis::Y).unwrap();
/// assert_eq!(extent.length(), 1.0);
/// assert_eq!(extent.height_at(0.5), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisExtent {
    /// Axis the extent was measured along.
    pub axis: Axis,
    /// Smallest vertex coordinate along the axis.
    pub min: f64,
    /// Largest vertex coordinate along the axis.
    pub max: f64,
}

impl AxisExtent {
    /// `max - min`, never negative.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    /// Absolute coordinate at a fraction of the extent.
    ///
    /// `min + length * fraction`. Fractions outside `[0, 1]` are allowed
    /// and resolve to heights outside the mesh.
    #[inline]
    #[must_use]
    pub fn height_at(&self, fraction: f64) -> f64 {
        self.min + self.length() * fraction
    }
}

/// Check that a mesh can be measured.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`] if the mesh has no vertices or no faces
/// - [`MeasureError::InvalidFaceIndex`] if a face points past the vertex list
/// - [`MeasureError::NonFiniteVertex`] if a vertex has a NaN or infinite coordinate
pub fn validate_mesh(mesh: &IndexedMesh) -> MeasureResult<()> {
    if mesh.is_empty() {
        return Err(MeasureError::EmptyMesh {
            vertices: mesh.vertex_count(),
            faces: mesh.face_count(),
        });
    }

    if let Some((face, index)) = mesh.invalid_face_index() {
        return Err(MeasureError::InvalidFaceIndex {
            face,
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    if let Some(vertex) = mesh
        .vertices
        .iter()
        .position(|v| !v.position.iter().all(|c| c.is_finite()))
    {
        return Err(MeasureError::NonFiniteVertex { vertex });
    }

    Ok(())
}

/// Compute the extent of a mesh along `axis`.
///
/// The mesh is validated first, so the returned extent is always finite.
///
/// # Errors
///
/// Same as [`validate_mesh`].
pub fn axis_extent(mesh: &IndexedMesh, axis: Axis) -> MeasureResult<AxisExtent> {
    validate_mesh(mesh)?;

    let (min, max) = mesh
        .axis_range(axis)
        .ok_or_else(|| MeasureError::EmptyMesh {
            vertices: mesh.vertex_count(),
            faces: mesh.face_count(),
        })?;

    Ok(AxisExtent { axis, min, max })
}
