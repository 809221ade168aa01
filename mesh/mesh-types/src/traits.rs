//! Traits for mesh types.

use crate::{Aabb, Axis};

/// Trait for types that provide mesh topology information.
///
/// This is the minimal read-only interface the measurement code relies on.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if the mesh has no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }

    /// `(min, max)` vertex coordinates along `axis`, `None` without vertices.
    fn axis_range(&self, axis: Axis) -> Option<(f64, f64)> {
        self.bounds_opt().map(|b| b.range(axis))
    }
}
