//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Vertex};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. This is the input of every measurement operation; the
/// measurement code only ever borrows it immutably.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// Index validity is not enforced on construction; see
/// [`invalid_face_index`](Self::invalid_face_index).
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Find the first face that references a vertex that does not exist.
    ///
    /// Returns `(face_index, vertex_index)` for the offending reference, or
    /// `None` when every face index is in range.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex};
    ///
    /// let mut mesh = IndexedMesh::new();
    /// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.faces.push([0, 0, 3]);
    /// assert_eq!(mesh.invalid_face_index(), Some((0, 3)));
    /// ```
    #[must_use]
    pub fn invalid_face_index(&self) -> Option<(usize, u32)> {
        let count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face, indices)| {
            indices
                .iter()
                .find(|&&i| i as usize >= count)
                .map(|&i| (face, i))
        })
    }

    /// Translate mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Append another mesh, offsetting its face indices.
    ///
    /// Meshes with more than `u32::MAX` vertices are not supported.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Create a closed box mesh spanning `min` to `max`.
///
/// Eight vertices and twelve triangles with outward-facing (CCW) winding.
///
/// # Example
///
/// ```
/// use mesh_types::{axis_aligned_box, Axis, MeshBounds, Point3};
///
/// let body = axis_aligned_box(Point3::new(-0.2, 0.0, -0.1), Point3::new(0.2, 1.8, 0.1));
/// assert_eq!(body.axis_range(Axis::Y), Some((0.0, 1.8)));
/// ```
#[must_use]
pub fn axis_aligned_box(min: Point3<f64>, max: Point3<f64>) -> IndexedMesh {
    let b = Aabb::new(min, max);
    let (lo, hi) = (b.min, b.max);

    let vertices = vec![
        Vertex::from_coords(lo.x, lo.y, lo.z), // 0
        Vertex::from_coords(hi.x, lo.y, lo.z), // 1
        Vertex::from_coords(hi.x, hi.y, lo.z), // 2
        Vertex::from_coords(lo.x, hi.y, lo.z), // 3
        Vertex::from_coords(lo.x, lo.y, hi.z), // 4
        Vertex::from_coords(hi.x, lo.y, hi.z), // 5
        Vertex::from_coords(hi.x, hi.y, hi.z), // 6
        Vertex::from_coords(lo.x, hi.y, hi.z), // 7
    ];

    let faces = vec![
        // -Z
        [0, 2, 1],
        [0, 3, 2],
        // +Z
        [4, 5, 6],
        [4, 6, 7],
        // -Y
        [0, 1, 5],
        [0, 5, 4],
        // +Y
        [3, 7, 6],
        [3, 6, 2],
        // -X
        [0, 4, 7],
        [0, 7, 3],
        // +X
        [1, 2, 6],
        [1, 6, 5],
    ];

    IndexedMesh::from_parts(vertices, faces)
}

/// Create a unit cube mesh from (0,0,0) to (1,1,1).
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    axis_aligned_box(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}
