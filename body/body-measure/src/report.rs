//! Measurement report types.

use std::fmt;

use mesh_types::{Axis, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arm length as a fraction of body height.
///
/// A proportion, not a measurement: no section is taken for it.
pub const ARM_LENGTH_RATIO: f64 = 0.35;

/// Label whose section width is reported as shoulder width.
pub const SHOULDER_LABEL: &str = "shoulder";

/// Measurements of one landmark's cross-section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandmarkMeasurement {
    /// Landmark label.
    pub label: String,
    /// Landmark position as a fraction of body height.
    pub fraction: f64,
    /// Absolute coordinate of the section plane along the report axis.
    pub height: f64,
    /// Mean of the section points, placed on the section plane.
    pub centroid: Point3<f64>,
    /// Convex hull perimeter of the section.
    pub circumference: f64,
    /// Extent along the first in-plane axis.
    pub width: f64,
    /// Extent along the second in-plane axis.
    pub depth: f64,
    /// Number of distinct section points.
    pub point_count: usize,
}

/// A landmark whose section had too few points to measure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedLandmark {
    /// Landmark label.
    pub label: String,
    /// Landmark position as a fraction of body height.
    pub fraction: f64,
    /// Absolute coordinate the section was taken at.
    pub height: f64,
}

/// Body measurements derived from one mesh.
///
/// Landmarks appear in table order, each either in `measurements` or in
/// `missing`. A missing landmark means no data, not a zero measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementReport {
    /// Vertical axis the body was measured along.
    pub axis: Axis,
    /// Lowest vertex coordinate along `axis`.
    pub min_extent: f64,
    /// Total body height along `axis`.
    pub height: f64,
    /// Width of the shoulder section, or `0.0` if it was not measured.
    pub shoulder_width: f64,
    /// [`ARM_LENGTH_RATIO`] times `height`.
    pub arm_length: f64,
    /// Measured landmarks.
    pub measurements: Vec<LandmarkMeasurement>,
    /// Landmarks whose sections could not be measured.
    pub missing: Vec<ResolvedLandmark>,
}

impl MeasurementReport {
    /// Look up a measured landmark by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LandmarkMeasurement> {
        self.measurements.iter().find(|m| m.label == label)
    }

    /// Check whether a landmark was measured.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Check whether a landmark was requested but not measured.
    #[must_use]
    pub fn is_missing(&self, label: &str) -> bool {
        self.missing.iter().any(|m| m.label == label)
    }

    /// Iterate over measured landmarks in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, LandmarkMeasurement> {
        self.measurements.iter()
    }

    /// Render the report as text with lengths multiplied by `scale`.
    ///
    /// # Example
    ///
    /// ```
    /// use body_measure::{build_report, MeasureParams};
    /// use mesh_types::unit_cube;
    ///
    /// let report = build_report(&unit_cube(), &MeasureParams::default()).unwrap();
    /// let text = report.display_scaled(100.0, "cm").to_string();
    /// assert!(text.contains("Height: 100.0 cm"));
    /// ```
    #[must_use]
    pub fn display_scaled<'a>(&'a self, scale: f64, unit: &'a str) -> ReportText<'a> {
        ReportText {
            report: self,
            scale,
            unit,
        }
    }
}

/// Text rendering of a [`MeasurementReport`], see
/// [`MeasurementReport::display_scaled`].
#[derive(Debug, Clone, Copy)]
pub struct ReportText<'a> {
    report: &'a MeasurementReport,
    scale: f64,
    unit: &'a str,
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            report,
            scale,
            unit,
        } = *self;

        writeln!(f, "===== BODY MEASUREMENTS =====")?;
        writeln!(f, "Height: {:.1} {unit}", report.height * scale)?;

        for m in &report.measurements {
            writeln!(f)?;
            writeln!(f, "{}:", capitalize(&m.label))?;
            writeln!(f, "  - Circumference: {:.1} {unit}", m.circumference * scale)?;
            writeln!(f, "  - Width: {:.1} {unit}", m.width * scale)?;
            writeln!(f, "  - Depth: {:.1} {unit}", m.depth * scale)?;
        }

        writeln!(f)?;
        writeln!(f, "Shoulder width: {:.1} {unit}", report.shoulder_width * scale)?;
        writeln!(f, "Arm length (approx.): {:.1} {unit}", report.arm_length * scale)?;

        if !report.missing.is_empty() {
            let labels: Vec<&str> = report.missing.iter().map(|m| m.label.as_str()).collect();
            writeln!(f, "Missing: {}", labels.join(", "))?;
        }
        Ok(())
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
