//! Exact-position vertex welding.
//!
//! Section extraction identifies crossing points by vertex and edge index,
//! so a surface must reference each position through a single vertex.
//! Formats that repeat positions (STL triangle soup, OBJ groups renumbered
//! by `tobj`) are welded here on load.

use std::collections::HashMap;

use mesh_types::{IndexedMesh, Point3, Vertex};

use crate::error::{IoError, IoResult};

/// Builds an indexed mesh, merging vertices with identical coordinates.
pub(crate) struct Welder {
    mesh: IndexedMesh,
    index_of: HashMap<[u64; 3], u32>,
}

impl Welder {
    pub(crate) fn with_capacity(faces: usize) -> Self {
        Self {
            mesh: IndexedMesh::with_capacity(faces / 2, faces),
            index_of: HashMap::with_capacity(faces / 2),
        }
    }

    /// Add a triangle given by its corner positions.
    pub(crate) fn push_triangle(&mut self, corners: [Point3<f64>; 3]) -> IoResult<()> {
        let mut face = [0u32; 3];
        for (slot, corner) in face.iter_mut().zip(corners) {
            *slot = self.vertex_index(corner)?;
        }
        self.mesh.faces.push(face);
        Ok(())
    }

    /// Add a triangle whose corners were already returned by
    /// [`Welder::vertex_index`].
    pub(crate) fn push_face(&mut self, face: [u32; 3]) {
        self.mesh.faces.push(face);
    }

    /// Index of the vertex at `p`, adding it if no vertex is there yet.
    pub(crate) fn vertex_index(&mut self, p: Point3<f64>) -> IoResult<u32> {
        // +0.0 folds -0.0 so both signs weld together.
        let key = [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()];
        if let Some(&index) = self.index_of.get(&key) {
            return Ok(index);
        }
        let index = u32::try_from(self.mesh.vertices.len())
            .map_err(|_| IoError::invalid_content("too many vertices for u32 indices"))?;
        self.mesh.vertices.push(Vertex::new(p));
        self.index_of.insert(key, index);
        Ok(index)
    }

    pub(crate) fn finish(self) -> IndexedMesh {
        self.mesh
    }
}
