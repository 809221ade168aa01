//! Cross-section measurement of triangle meshes.
//!
//! This crate slices a mesh with planes perpendicular to a coordinate axis
//! and derives planar measurements from each slice.
//!
//! # Features
//!
//! - **Slicing**: [`slice`] intersects a mesh with an axis-perpendicular plane
//! - **Circumference**: convex hull perimeter of a section ([`circumference`])
//! - **Width / depth**: axis-aligned extents of a section ([`width`], [`depth`])
//! - **Extent**: mesh validation and extent along an axis ([`axis_extent`])
//! - **SVG**: render a section with its hull and centroid ([`export_section_svg`])
//!
//! # Example
//!
//! ```
//! use mesh_types::{unit_cube, Axis};
//! use mesh_measure::{axis_extent, circumference, depth, slice, width};
//!
//! let cube = unit_cube();
//! let extent = axis_extent(&cube, Axis::Y).unwrap();
//!
//! let section = slice(&cube, extent.height_at(0.5), Axis::Y);
//! assert!((circumference(&section) - 4.0).abs() < 1e-12);
//! assert!((width(&section) - 1.0).abs() < 1e-12);
//! assert!((depth(&section) - 1.0).abs() < 1e-12);
//! ```
//!
//! # Approximations
//!
//! Circumference is the perimeter of the section's convex hull. Concave
//! parts of a body outline are bridged, not followed. Width and depth are
//! bounding-box extents in the mesh frame, so the mesh must be upright and
//! facing a fixed direction for them to mean anything anatomically.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cross_section;
mod error;
mod export;
mod extent;
mod hull;

pub use cross_section::{CrossSection, MIN_SECTION_POINTS, circumference, depth, slice, width};
pub use error::{MeasureError, MeasureResult};
pub use export::{SvgExportParams, export_section_svg};
pub use extent::{AxisExtent, axis_extent, validate_mesh};
pub use hull::{convex_hull, hull_perimeter};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3};
