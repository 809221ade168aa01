//! Report construction.

use mesh_measure::{
    AxisExtent, CrossSection, MIN_SECTION_POINTS, MeasureResult, axis_extent, slice,
};
use mesh_types::{IndexedMesh, MeshTopology};
use tracing::{debug, info};

use crate::landmark::Landmark;
use crate::params::MeasureParams;
use crate::report::{
    ARM_LENGTH_RATIO, LandmarkMeasurement, MeasurementReport, ResolvedLandmark, SHOULDER_LABEL,
};

/// Measure a body mesh at every landmark of the parameter table.
///
/// Each landmark is sliced at `min + height * fraction` along
/// `params.axis`. Sections with fewer than
/// [`MIN_SECTION_POINTS`](mesh_measure::MIN_SECTION_POINTS) points are
/// listed in [`MeasurementReport::missing`] instead of being measured.
///
/// The result depends only on the mesh and the parameters; calling this
/// twice gives equal reports.
///
/// # Errors
///
/// Returns [`MeasureError`](mesh_measure::MeasureError) if the mesh is
/// empty, has a face index past the vertex list or a non-finite vertex, or
/// if the landmark table is invalid (see
/// [`LandmarkTable::validate`](crate::LandmarkTable::validate)).
///
/// # Example
///
/// ```
/// use body_measure::{build_report, MeasureParams};
/// use mesh_types::unit_cube;
///
/// let report = build_report(&unit_cube(), &MeasureParams::default()).unwrap();
/// assert_eq!(report.height, 1.0);
///
/// let waist = report.get("waist").unwrap();
/// assert!((waist.circumference - 4.0).abs() < 1e-12);
/// ```
pub fn build_report(mesh: &IndexedMesh, params: &MeasureParams) -> MeasureResult<MeasurementReport> {
    params.landmarks.validate()?;
    let extent = axis_extent(mesh, params.axis)?;

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        axis = %params.axis,
        landmarks = params.landmarks.len(),
        "Starting body measurement"
    );

    let outcomes = measure_landmarks(mesh, &extent, params.landmarks.as_slice());

    let mut measurements = Vec::new();
    let mut missing = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(measurement) => measurements.push(measurement),
            Err(resolved) => missing.push(resolved),
        }
    }

    let height = extent.length();
    let shoulder_width = measurements
        .iter()
        .find(|m| m.label == SHOULDER_LABEL)
        .map_or(0.0, |m| m.width);

    info!(
        height = format!("{height:.4}"),
        measured = measurements.len(),
        missing = missing.len(),
        "Body measurement complete"
    );

    Ok(MeasurementReport {
        axis: params.axis,
        min_extent: extent.min,
        height,
        shoulder_width,
        arm_length: height * ARM_LENGTH_RATIO,
        measurements,
        missing,
    })
}

/// Slice one landmark and measure its section.
///
/// Returns the resolved landmark as the error when the section is too
/// small to measure.
fn measure_landmark(
    mesh: &IndexedMesh,
    extent: &AxisExtent,
    landmark: &Landmark,
) -> Result<LandmarkMeasurement, ResolvedLandmark> {
    let height = extent.height_at(landmark.fraction);
    let section = slice(mesh, height, extent.axis);

    debug!(
        label = %landmark.label,
        height = format!("{height:.4}"),
        points = section.len(),
        "Sliced landmark"
    );

    measurement_from_section(landmark, &section).ok_or_else(|| ResolvedLandmark {
        label: landmark.label.clone(),
        fraction: landmark.fraction,
        height,
    })
}

fn measurement_from_section(
    landmark: &Landmark,
    section: &CrossSection,
) -> Option<LandmarkMeasurement> {
    if section.len() < MIN_SECTION_POINTS {
        return None;
    }
    Some(LandmarkMeasurement {
        label: landmark.label.clone(),
        fraction: landmark.fraction,
        height: section.height,
        centroid: section.centroid()?,
        circumference: section.circumference(),
        width: section.width(),
        depth: section.depth(),
        point_count: section.len(),
    })
}

type Outcome = Result<LandmarkMeasurement, ResolvedLandmark>;

#[cfg(feature = "parallel")]
fn measure_landmarks(mesh: &IndexedMesh, extent: &AxisExtent, landmarks: &[Landmark]) -> Vec<Outcome> {
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
    landmarks
        .par_iter()
        .map(|landmark| measure_landmark(mesh, extent, landmark))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn measure_landmarks(mesh: &IndexedMesh, extent: &AxisExtent, landmarks: &[Landmark]) -> Vec<Outcome> {
    landmarks
        .iter()
        .map(|landmark| measure_landmark(mesh, extent, landmark))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::LandmarkTable;
    use approx::assert_relative_eq;
    use mesh_measure::MeasureError;
    use mesh_types::{Axis, Point3, axis_aligned_box, unit_cube};

    #[test]
    fn cube_landmarks_all_measured() {
        let report = build_report(&unit_cube(), &MeasureParams::default()).unwrap();
        assert_eq!(report.measurements.len(), 8);
        assert!(report.missing.is_empty());
        for m in &report.measurements {
            assert_relative_eq!(m.circumference, 4.0, epsilon = 1e-12);
            assert_relative_eq!(m.width, 1.0, epsilon = 1e-12);
            assert_relative_eq!(m.depth, 1.0, epsilon = 1e-12);
            assert_relative_eq!(m.height, m.fraction, epsilon = 1e-12);
            assert_relative_eq!(m.centroid.y, m.height);
        }
        assert_relative_eq!(report.shoulder_width, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn table_order_preserved() {
        let params = MeasureParams::default()
            .with_landmarks(LandmarkTable::new().with("low", 0.1).with("high", 0.9));
        let report = build_report(&unit_cube(), &params).unwrap();
        let labels: Vec<_> = report.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["low", "high"]);
    }

    #[test]
    fn z_up_box_uses_z_extent() {
        let body = axis_aligned_box(Point3::new(0.0, 0.0, 0.0), Point3::new(0.4, 0.2, 1.8));
        let report = build_report(&body, &MeasureParams::z_up()).unwrap();
        assert_eq!(report.axis, Axis::Z);
        assert_relative_eq!(report.height, 1.8);

        let waist = report.get("waist").unwrap();
        assert_relative_eq!(waist.height, 0.9, epsilon = 1e-12);
        assert_relative_eq!(waist.width, 0.4, epsilon = 1e-12);
        assert_relative_eq!(waist.depth, 0.2, epsilon = 1e-12);
        assert_relative_eq!(waist.circumference, 1.2, epsilon = 1e-12);
        assert_relative_eq!(waist.centroid.z, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn missing_shoulder_gives_zero_width() {
        let params =
            MeasureParams::default().with_landmarks(LandmarkTable::new().with(SHOULDER_LABEL, 2.0));
        let report = build_report(&unit_cube(), &params).unwrap();
        assert!(report.is_missing(SHOULDER_LABEL));
        assert_eq!(report.shoulder_width, 0.0);
        assert_relative_eq!(report.missing[0].height, 2.0);
    }

    #[test]
    fn empty_mesh_rejected() {
        let err = build_report(&IndexedMesh::new(), &MeasureParams::default()).unwrap_err();
        assert!(matches!(err, MeasureError::EmptyMesh { .. }));
    }

    #[test]
    fn bad_face_index_rejected() {
        let mut mesh = unit_cube();
        mesh.faces.push([0, 1, 99]);
        let err = build_report(&mesh, &MeasureParams::default()).unwrap_err();
        assert!(matches!(err, MeasureError::InvalidFaceIndex { index: 99, .. }));
    }

    #[test]
    fn invalid_table_rejected_before_slicing() {
        let params =
            MeasureParams::default().with_landmarks(LandmarkTable::new().with("waist", f64::NAN));
        let err = build_report(&IndexedMesh::new(), &params).unwrap_err();
        assert!(matches!(err, MeasureError::InvalidParams(_)));
    }

    #[test]
    fn empty_table_reports_proportions_only() {
        let params = MeasureParams::default().with_landmarks(LandmarkTable::new());
        let report = build_report(&unit_cube(), &params).unwrap();
        assert!(report.measurements.is_empty());
        assert!(report.missing.is_empty());
        assert_relative_eq!(report.arm_length, 0.35);
    }

    /// Landmark outcomes come back in table order with the same values
    /// whether or not slicing runs on the thread pool.
    #[test]
    fn measure_landmarks_matches_sequential() {
        let mut body = axis_aligned_box(Point3::new(0.0, 0.0, 0.0), Point3::new(0.3, 0.4, 0.2));
        body.merge(&axis_aligned_box(
            Point3::new(-0.1, 0.6, -0.05),
            Point3::new(0.5, 1.7, 0.3),
        ));
        let extent = axis_extent(&body, Axis::Y).unwrap();

        let table = (0..=40).fold(LandmarkTable::new(), |table, i| {
            table.with(format!("level-{i}"), f64::from(i) / 40.0)
        });
        let landmarks = table.as_slice();

        let sequential: Vec<Outcome> = landmarks
            .iter()
            .map(|landmark| measure_landmark(&body, &extent, landmark))
            .collect();
        let batched = measure_landmarks(&body, &extent, landmarks);

        assert_eq!(batched.len(), landmarks.len());
        for (i, (b, s)) in batched.iter().zip(&sequential).enumerate() {
            assert_eq!(b, s, "landmark {i} differs");
        }
        assert!(sequential.iter().any(Result::is_err));
        assert!(sequential.iter().any(Result::is_ok));
    }
}
