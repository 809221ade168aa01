//! Wavefront OBJ support.
//!
//! Parsing is delegated to `tobj`. Polygons are triangulated, points and
//! lines are dropped, and all objects/groups in the file are merged into
//! one mesh with vertices at identical positions welded. Materials, normals and texture coordinates are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::{IndexedMesh, Point3};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::weld::Welder;

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid OBJ.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_obj;
///
/// let body = load_obj("scan.obj").unwrap();
/// println!("Loaded {} faces", body.faces.len());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let mesh = read_obj(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Loaded OBJ"
    );
    Ok(mesh)
}

/// Parse OBJ content from a reader.
///
/// Material libraries referenced by the content are not loaded.
///
/// # Errors
///
/// Returns an error if the content is not valid OBJ.
///
/// # Example
///
/// ```
/// use mesh_io::read_obj;
///
/// let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
/// let mesh = read_obj(obj.as_bytes()).unwrap();
/// assert_eq!(mesh.vertices.len(), 4);
/// assert_eq!(mesh.faces.len(), 2);
/// ```
pub fn read_obj<R: BufRead>(mut reader: R) -> IoResult<IndexedMesh> {
    let options = tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };
    let (models, _materials) =
        tobj::load_obj_buf(&mut reader, &options, |_| Err(tobj::LoadError::OpenFileFailed))?;

    let face_total = models.iter().map(|m| m.mesh.indices.len() / 3).sum();
    let mut welder = Welder::with_capacity(face_total);

    for model in models {
        let positions = &model.mesh.positions;
        if positions.len() % 3 != 0 {
            return Err(IoError::invalid_content(format!(
                "object '{}' has {} coordinates, not a multiple of 3",
                model.name,
                positions.len()
            )));
        }

        // tobj numbers positions per object, so a vertex shared by two
        // groups arrives twice.
        let welded = positions
            .chunks_exact(3)
            .map(|c| welder.vertex_index(Point3::new(c[0], c[1], c[2])))
            .collect::<IoResult<Vec<u32>>>()?;

        for (face, corners) in model.mesh.indices.chunks_exact(3).enumerate() {
            let mut indices = [0u32; 3];
            for (slot, &local) in indices.iter_mut().zip(corners) {
                *slot = *welded.get(local as usize).ok_or_else(|| {
                    IoError::invalid_content(format!(
                        "object '{}' face {face} references missing vertex {local}",
                        model.name
                    ))
                })?;
            }
            welder.push_face(indices);
        }
    }

    Ok(welder.finish())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_triangulated() {
        let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = read_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.invalid_face_index(), None);
    }

    #[test]
    fn objects_are_merged_with_offsets() {
        let obj = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o second
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
        let mesh = read_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.faces.len(), 2);
        let second = mesh.faces[1];
        // No positions are shared, so nothing is welded.
        assert!(second.iter().all(|&i| i >= 3));
        assert!((mesh.vertices[second[0] as usize].position.z - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn groups_sharing_vertices_are_welded() {
        let obj = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
g lower
f 1 2 3
g upper
f 1 3 4
";
        let mesh = read_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.faces[0][0], mesh.faces[1][0]);
        assert_eq!(mesh.faces[0][2], mesh.faces[1][1]);
    }

    #[test]
    fn normals_and_texcoords_are_ignored() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vt 0 0
f 1/1/1 2/1/1 3/1/1
";
        let mesh = read_obj(obj.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = load_obj("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
