//! Anthropometric measurements from a 3D body mesh.
//!
//! A body mesh is cut by planes perpendicular to its vertical axis at a
//! table of anatomical landmarks (neck, chest, waist, ...). Each section is
//! reduced to a circumference, a width, a depth and a centroid, and the
//! results are collected into a [`MeasurementReport`].
//!
//! # Example
//!
//! ```
//! use body_measure::{build_report, MeasureParams};
//! use mesh_types::{axis_aligned_box, Point3};
//!
//! // A 0.4 x 1.8 x 0.2 block standing on the Y axis.
//! let body = axis_aligned_box(Point3::new(0.0, 0.0, 0.0), Point3::new(0.4, 1.8, 0.2));
//! let report = build_report(&body, &MeasureParams::default()).unwrap();
//!
//! assert!((report.height - 1.8).abs() < 1e-12);
//! assert!((report.arm_length - 0.63).abs() < 1e-12);
//!
//! let chest = report.get("chest").unwrap();
//! assert!((chest.circumference - 1.2).abs() < 1e-12);
//! ```
//!
//! # Approximations
//!
//! - Circumference is the convex hull perimeter of the section, so it
//!   bridges concave parts of the outline
//! - Width and depth are extents along the mesh's own in-plane axes
//! - Arm length is a fixed proportion of height ([`ARM_LENGTH_RATIO`])
//!
//! # Features
//!
//! - `serde`: serialize reports, load [`MeasureParams`] from config files
//! - `parallel`: slice landmarks concurrently with `rayon`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod landmark;
mod measurer;
mod params;
mod report;

pub use landmark::{Landmark, LandmarkTable};
pub use measurer::build_report;
pub use params::MeasureParams;
pub use report::{
    ARM_LENGTH_RATIO, LandmarkMeasurement, MeasurementReport, ReportText, ResolvedLandmark,
    SHOULDER_LABEL,
};

// Re-export the error type so callers need not depend on mesh-measure.
pub use mesh_measure::{MeasureError, MeasureResult};
