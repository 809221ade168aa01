//! Measurement parameters and presets.

use mesh_types::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::landmark::LandmarkTable;

/// Parameters for building a measurement report.
///
/// With the `serde` feature this is the shape of a measurement config file;
/// omitted fields keep their defaults:
///
/// ```toml
/// axis = "Z"
///
/// [[landmarks]]
/// label = "waist"
/// fraction = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeasureParams {
    /// Vertical axis of the body. Heights are measured along it.
    pub axis: Axis,

    /// Landmarks to measure, in report order.
    pub landmarks: LandmarkTable,
}

impl MeasureParams {
    /// Parameters for meshes exported Z-up (CAD tools, most STL scans).
    #[must_use]
    pub fn z_up() -> Self {
        Self {
            axis: Axis::Z,
            ..Default::default()
        }
    }

    /// Set the vertical axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Replace the landmark table.
    #[must_use]
    pub fn with_landmarks(mut self, landmarks: LandmarkTable) -> Self {
        self.landmarks = landmarks;
        self
    }
}
