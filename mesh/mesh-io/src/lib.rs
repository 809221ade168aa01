//! Body mesh loading.
//!
//! Reads triangle meshes from the formats body scanners commonly export:
//!
//! - **OBJ** (Wavefront) - parsed with `tobj`, polygons triangulated
//! - **STL** (Stereolithography) - binary and ASCII, corners welded
//!
//! # Format Detection
//!
//! [`load_mesh`] picks a loader from the file extension:
//!
//! ```no_run
//! use mesh_io::load_mesh;
//!
//! // Format detected from .obj extension
//! let body = load_mesh("scan.obj").unwrap();
//! println!("{} vertices", body.vertices.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;
mod stl;
mod weld;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, read_obj};
pub use stl::{load_stl, parse_stl};

use std::fmt;
use std::path::Path;

use mesh_types::IndexedMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// OBJ (Wavefront) format.
    Obj,
    /// STL (Stereolithography) format.
    /// Supports binary and ASCII variants.
    Stl,
}

impl MeshFormat {
    /// Detect format from file extension, ignoring case.
    ///
    /// Returns `None` if the extension is missing or not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Stl => "stl",
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Load a mesh from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_mesh;
///
/// let body = load_mesh("scan.stl").unwrap();
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        MeshFormat::Obj => load_obj(path),
        MeshFormat::Stl => load_stl(path),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_stl() {
        assert_eq!(MeshFormat::from_path("model.stl"), Some(MeshFormat::Stl));
        assert_eq!(MeshFormat::from_path("model.STL"), Some(MeshFormat::Stl));
        assert_eq!(
            MeshFormat::from_path("/path/to/model.stl"),
            Some(MeshFormat::Stl)
        );
    }

    #[test]
    fn format_from_path_obj() {
        assert_eq!(MeshFormat::from_path("model.obj"), Some(MeshFormat::Obj));
        assert_eq!(MeshFormat::from_path("model.OBJ"), Some(MeshFormat::Obj));
    }

    #[test]
    fn format_from_path_unknown() {
        assert_eq!(MeshFormat::from_path("model.ply"), None);
        assert_eq!(MeshFormat::from_path("model"), None);
        assert_eq!(MeshFormat::from_path(""), None);
    }

    #[test]
    fn format_extension_and_display() {
        assert_eq!(MeshFormat::Stl.extension(), "stl");
        assert_eq!(MeshFormat::Obj.to_string(), "obj");
    }

    #[test]
    fn unknown_extension_is_reported() {
        let err = load_mesh("scan.ply").unwrap_err();
        assert!(matches!(err, IoError::UnknownFormat { ref extension } if extension == "ply"));

        let err = load_mesh("scan").unwrap_err();
        assert_eq!(err.to_string(), "unknown file format: .(none)");
    }
}
