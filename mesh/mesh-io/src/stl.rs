//! STL (Stereolithography) file format support.
//!
//! Both ASCII and binary STL store every triangle with its own three
//! corners. Corners with identical coordinates are welded into one vertex
//! on load so neighbouring triangles share indices, which section
//! extraction relies on to emit each crossing point once.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count
//! end
//! ```

use std::path::Path;

use mesh_types::{IndexedMesh, Point3};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::weld::Welder;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
const TRIANGLE_SIZE: usize = 50;

/// Load a mesh from an STL file.
///
/// Detects ASCII vs binary content automatically.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid STL.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let body = load_stl("scan.stl").unwrap();
/// println!("Loaded {} faces", body.faces.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| IoError::from_open(e, path))?;
    let mesh = parse_stl(&bytes)?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Loaded STL"
    );
    Ok(mesh)
}

/// Parse STL content held in memory.
///
/// Content is treated as binary when its length matches the triangle count
/// in the header exactly; otherwise it must be ASCII starting with `solid`.
///
/// # Errors
///
/// Returns an error if the content is neither valid binary nor ASCII STL.
///
/// # Example
///
/// ```
/// use mesh_io::parse_stl;
///
/// let stl = "solid t
/// facet normal 0 0 1
///   outer loop
///     vertex 0 0 0
///     vertex 1 0 0
///     vertex 0 1 0
///   endloop
/// endfacet
/// endsolid t
/// ";
/// let mesh = parse_stl(stl.as_bytes()).unwrap();
/// assert_eq!(mesh.faces.len(), 1);
/// ```
pub fn parse_stl(bytes: &[u8]) -> IoResult<IndexedMesh> {
    if is_binary(bytes) {
        return parse_binary(bytes);
    }

    let starts_with_solid = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .is_some_and(|start| bytes[start..].starts_with(b"solid"));

    if starts_with_solid {
        let text = String::from_utf8_lossy(bytes);
        parse_ascii(&text)
    } else {
        // Not ASCII, so report what is wrong with it as binary.
        parse_binary(bytes)
    }
}

/// Check whether the byte length agrees with a binary header's face count.
fn is_binary(bytes: &[u8]) -> bool {
    if bytes.len() < HEADER_SIZE + 4 {
        return false;
    }
    let count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);
    (count as usize)
        .checked_mul(TRIANGLE_SIZE)
        .and_then(|body| body.checked_add(HEADER_SIZE + 4))
        == Some(bytes.len())
}

fn parse_binary(bytes: &[u8]) -> IoResult<IndexedMesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(IoError::InvalidHeader {
            expected: HEADER_SIZE + 4,
            got: bytes.len(),
        });
    }

    let face_count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let records = bytes[HEADER_SIZE + 4..].chunks_exact(TRIANGLE_SIZE);
    #[allow(clippy::cast_possible_truncation)]
    // Bounded by face_count below, which is a u32.
    let available = records.len().min(face_count as usize) as u32;
    if available < face_count {
        return Err(IoError::InvalidFaceCount {
            expected: face_count,
            got: available,
        });
    }

    let mut welder = Welder::with_capacity(face_count as usize);
    for record in records.take(face_count as usize) {
        // Skip the 12-byte normal.
        let corners = [
            read_point(&record[12..24]),
            read_point(&record[24..36]),
            read_point(&record[36..48]),
        ];
        welder.push_triangle(corners)?;
    }

    Ok(welder.finish())
}

/// Read three little-endian f32 coordinates.
fn read_point(buf: &[u8]) -> Point3<f64> {
    let coord = |i: usize| {
        f64::from(f32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]))
    };
    Point3::new(coord(0), coord(4), coord(8))
}

fn parse_ascii(text: &str) -> IoResult<IndexedMesh> {
    let mut welder = Welder::with_capacity(0);
    let mut corners: Vec<Point3<f64>> = Vec::with_capacity(3);
    let mut in_loop = false;

    for (line_no, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "outer" => {
                in_loop = true;
                corners.clear();
            }
            "vertex" if in_loop => {
                let coords: Vec<&str> = parts.collect();
                if coords.len() < 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: vertex needs 3 coordinates",
                        line_no + 1
                    )));
                }
                corners.push(Point3::new(
                    coords[0].parse::<f64>()?,
                    coords[1].parse::<f64>()?,
                    coords[2].parse::<f64>()?,
                ));
            }
            "endloop" => {
                in_loop = false;
                if let [a, b, c] = corners[..] {
                    welder.push_triangle([a, b, c])?;
                } else {
                    return Err(IoError::invalid_content(format!(
                        "line {}: facet has {} vertices, expected 3",
                        line_no + 1,
                        corners.len()
                    )));
                }
            }
            "endsolid" => break,
            _ => {}
        }
    }

    Ok(welder.finish())
}
