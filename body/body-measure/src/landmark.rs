//! Anatomical landmarks and the table that orders them.

use std::collections::HashSet;

use mesh_measure::{MeasureError, MeasureResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named height on the body, as a fraction of total height.
///
/// `0.0` is the lowest vertex along the measurement axis and `1.0` the
/// highest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Landmark {
    /// Name the measurement is reported under (e.g. `"waist"`).
    pub label: String,
    /// Position along the body, from the bottom.
    pub fraction: f64,
}

impl Landmark {
    /// Create a landmark.
    #[must_use]
    pub fn new(label: impl Into<String>, fraction: f64) -> Self {
        Self {
            label: label.into(),
            fraction,
        }
    }
}

/// Landmarks of the default table, top to bottom.
const DEFAULT_LANDMARKS: [(&str, f64); 8] = [
    ("neck", 0.85),
    ("shoulder", 0.80),
    ("chest", 0.70),
    ("waist", 0.50),
    ("hip", 0.40),
    ("thigh", 0.30),
    ("knee", 0.20),
    ("ankle", 0.05),
];

/// Ordered list of landmarks to measure.
///
/// Reports list measurements in table order.
///
/// # Example
///
/// ```
/// use body_measure::{Landmark, LandmarkTable};
///
/// let table = LandmarkTable::default();
/// assert_eq!(table.len(), 8);
/// assert_eq!(table.get("waist").map(|l| l.fraction), Some(0.5));
///
/// let custom: LandmarkTable = [Landmark::new("bust", 0.72)].into_iter().collect();
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LandmarkTable {
    landmarks: Vec<Landmark>,
}

impl Default for LandmarkTable {
    /// Neck, shoulder, chest, waist, hip, thigh, knee and ankle.
    fn default() -> Self {
        DEFAULT_LANDMARKS
            .iter()
            .map(|&(label, fraction)| Landmark::new(label, fraction))
            .collect()
    }
}

impl LandmarkTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landmarks: Vec::new(),
        }
    }

    /// Append a landmark.
    pub fn push(&mut self, landmark: Landmark) {
        self.landmarks.push(landmark);
    }

    /// Append a landmark, builder style.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, fraction: f64) -> Self {
        self.push(Landmark::new(label, fraction));
        self
    }

    /// Number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Check if the table has no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Look up a landmark by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.label == label)
    }

    /// Iterate over landmarks in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    /// Landmarks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Check that every landmark can be measured and reported.
    ///
    /// An empty table is valid and produces a report with no measurements.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] if a label is empty or
    /// repeated, or a fraction is NaN or infinite.
    pub fn validate(&self) -> MeasureResult<()> {
        let mut seen = HashSet::with_capacity(self.landmarks.len());
        for landmark in &self.landmarks {
            if landmark.label.trim().is_empty() {
                return Err(MeasureError::invalid_params("landmark label is empty"));
            }
            if !landmark.fraction.is_finite() {
                return Err(MeasureError::invalid_params(format!(
                    "landmark '{}' has non-finite fraction {}",
                    landmark.label, landmark.fraction
                )));
            }
            if !seen.insert(landmark.label.as_str()) {
                return Err(MeasureError::invalid_params(format!(
                    "landmark '{}' appears more than once",
                    landmark.label
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<Landmark> for LandmarkTable {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LandmarkTable {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}

impl IntoIterator for LandmarkTable {
    type Item = Landmark;
    type IntoIter = std::vec::IntoIter<Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_table_order() {
        let labels: Vec<_> = LandmarkTable::default()
            .iter()
            .map(|l| l.label.clone())
            .collect();
        assert_eq!(
            labels,
            ["neck", "shoulder", "chest", "waist", "hip", "thigh", "knee", "ankle"]
        );
    }

    #[test]
    fn default_fractions_descend() {
        let table = LandmarkTable::default();
        assert!(table.validate().is_ok());
        assert!(
            table
                .as_slice()
                .windows(2)
                .all(|w| w[0].fraction > w[1].fraction)
        );
        assert_eq!(table.get("shoulder").unwrap().fraction, 0.80);
        assert!(table.get("elbow").is_none());
    }

    #[test]
    fn duplicate_label_rejected() {
        let table = LandmarkTable::new().with("waist", 0.5).with("waist", 0.45);
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn blank_label_rejected() {
        let table = LandmarkTable::new().with("  ", 0.5);
        assert!(matches!(
            table.validate(),
            Err(MeasureError::InvalidParams(_))
        ));
    }

    #[test]
    fn non_finite_fraction_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let table = LandmarkTable::new().with("waist", bad);
            assert!(table.validate().is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn out_of_range_fraction_allowed() {
        let table = LandmarkTable::new().with("above", 1.5).with("below", -0.2);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn empty_table_is_valid() {
        let table = LandmarkTable::new();
        assert!(table.is_empty());
        assert!(table.validate().is_ok());
    }
}
