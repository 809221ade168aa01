//! Core mesh types for body measurement.
//!
//! This crate provides the foundational types shared by the loaders and
//! the measurement crates:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Axis`] - The vertical axis along which a body is sliced
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Body scans produced by reconstruction pipelines are usually in metres.
//!
//! # Coordinate System
//!
//! Body meshes are expected upright along one coordinate axis, which is
//! [`Axis::Y`] by default (the convention of most reconstruction outputs).
//! A section perpendicular to an axis is described by the two remaining
//! coordinates, see [`Axis::plane_axes`].
//!
//! # Example
//!
//! ```
//! use mesh_types::{Axis, IndexedMesh, MeshBounds, MeshTopology, Point3, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.axis_range(Axis::Y), Some((0.0, 1.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod bounds;
mod mesh;
mod traits;
mod vertex;

pub use axis::{Axis, ParseAxisError};
pub use bounds::Aabb;
pub use mesh::{IndexedMesh, axis_aligned_box, unit_cube};
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
