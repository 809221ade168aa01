//! Cross-section extraction from meshes.
//!
//! Intersects a mesh with a plane perpendicular to one coordinate axis and
//! keeps the intersection as a planar point set plus the segments joining
//! those points.

// Point counts stay far below 2^52.
#![allow(clippy::cast_precision_loss)]

use std::collections::{HashMap, HashSet};

use mesh_types::{Axis, IndexedMesh, Point2, Point3};

use crate::hull::{convex_hull, hull_perimeter};

/// Minimum number of points for a section to have a usable outline.
pub const MIN_SECTION_POINTS: usize = 3;

/// Planar intersection of a mesh with an axis-perpendicular plane.
///
/// `points` are in the plane's own coordinates, ordered as
/// [`Axis::plane_axes`]: for the default `Y` axis, `x` holds the mesh X
/// coordinate and `y` holds the mesh Z coordinate.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_measure::slice;
///
/// let section = slice(&unit_cube(), 0.5, Axis::Z);
///
/// assert!(!section.is_degenerate());
/// assert!((section.circumference() - 4.0).abs() < 1e-12);
/// assert!((section.width() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossSection {
    /// Axis perpendicular to the cutting plane.
    pub axis: Axis,
    /// Coordinate of the cutting plane along `axis`.
    pub height: f64,
    /// Unique intersection points, projected onto the plane.
    pub points: Vec<Point2<f64>>,
    /// Intersection segments as index pairs into `points`.
    pub segments: Vec<[usize; 2]>,
}

impl CrossSection {
    /// A section with no points.
    #[must_use]
    pub const fn empty(axis: Axis, height: f64) -> Self {
        Self {
            axis,
            height,
            points: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Check if the plane missed the mesh.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of section points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the section has too few points to measure.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_SECTION_POINTS
    }

    /// Convex hull perimeter. See [`circumference`].
    #[must_use]
    pub fn circumference(&self) -> f64 {
        circumference(self)
    }

    /// Extent along the first in-plane axis. See [`width`].
    #[must_use]
    pub fn width(&self) -> f64 {
        width(self)
    }

    /// Extent along the second in-plane axis. See [`depth`].
    #[must_use]
    pub fn depth(&self) -> f64 {
        depth(self)
    }

    /// Convex hull of the section points, counter-clockwise.
    #[must_use]
    pub fn hull(&self) -> Vec<Point2<f64>> {
        convex_hull(&self.points)
    }

    /// Arithmetic mean of the section points in plane coordinates.
    #[must_use]
    pub fn centroid_2d(&self) -> Option<Point2<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
        Some(Point2::from(sum / self.points.len() as f64))
    }

    /// Mean of the section points placed back in 3D at the section height.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{unit_cube, Axis, Point3};
    /// use mesh_measure::slice;
    ///
    /// let centroid = slice(&unit_cube(), 0.5, Axis::Y).centroid().unwrap();
    /// assert!((centroid - Point3::new(0.5, 0.5, 0.5)).norm() < 1e-12);
    /// ```
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        self.centroid_2d()
            .map(|c| self.axis.embed(&c, self.height))
    }

    /// `(min, max)` corners of the section's planar bounding box.
    #[must_use]
    pub fn bounds_2d(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Identity of an intersection point on the mesh.
///
/// Shared edges and vertices resolve to the same key from every adjacent
/// face, so each intersection point is emitted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PointKey {
    /// A mesh vertex lying on the plane.
    Vertex(u32),
    /// A mesh edge crossing the plane, lower vertex index first.
    Edge(u32, u32),
}

/// Intersect a mesh with the plane perpendicular to `axis` at `height`.
///
/// Faces strictly on one side of the plane, and faces lying in it,
/// contribute nothing. A face touching the plane at a single vertex
/// contributes nothing either. Every other face contributes one segment.
///
/// Edge crossings are interpolated from the endpoint with the lower
/// vertex index, so the result is deterministic and shared edges yield
/// identical points. Points are kept in first-seen face order.
///
/// Heights outside the mesh return an empty section. Faces referencing
/// missing vertices are skipped.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_measure::slice;
///
/// let inside = slice(&unit_cube(), 0.5, Axis::Y);
/// assert_eq!(inside.height, 0.5);
/// assert!(!inside.is_empty());
///
/// let above = slice(&unit_cube(), 2.0, Axis::Y);
/// assert!(above.is_empty());
/// ```
#[must_use]
pub fn slice(mesh: &IndexedMesh, height: f64, axis: Axis) -> CrossSection {
    let mut section = CrossSection::empty(axis, height);
    if !height.is_finite() {
        return section;
    }

    let mut lookup: HashMap<PointKey, usize> = HashMap::new();
    let mut seen_segments: HashSet<[usize; 2]> = HashSet::new();

    for face in &mesh.faces {
        let Some(hits) = face_plane_hits(mesh, *face, height, axis) else {
            continue;
        };

        let mut ends = [0usize; 2];
        for (slot, (key, point)) in ends.iter_mut().zip(hits) {
            *slot = *lookup.entry(key).or_insert_with(|| {
                section.points.push(axis.project(&point));
                section.points.len() - 1
            });
        }

        let canonical = [ends[0].min(ends[1]), ends[0].max(ends[1])];
        if seen_segments.insert(canonical) {
            section.segments.push(ends);
        }
    }

    section
}

/// Circumference of a section, approximated by its convex hull perimeter.
///
/// Concave parts of the outline are bridged by the hull, so the value
/// never exceeds the true outline length of a single closed contour.
///
/// Returns 0.0 for sections with fewer than [`MIN_SECTION_POINTS`] points
/// and for sections whose points are all collinear.
#[must_use]
pub fn circumference(section: &CrossSection) -> f64 {
    if section.is_degenerate() {
        return 0.0;
    }
    hull_perimeter(&section.points)
}

/// `max - min` of the first in-plane coordinate.
///
/// Returns 0.0 for sections with fewer than two points.
#[must_use]
pub fn width(section: &CrossSection) -> f64 {
    span(section.points.iter().map(|p| p.x), section.len())
}

/// `max - min` of the second in-plane coordinate.
///
/// Returns 0.0 for sections with fewer than two points.
#[must_use]
pub fn depth(section: &CrossSection) -> f64 {
    span(section.points.iter().map(|p| p.y), section.len())
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn span(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    max - min
}

/// The two distinct intersection points of one face with the plane, if the
/// face crosses it along a segment.
fn face_plane_hits(
    mesh: &IndexedMesh,
    face: [u32; 3],
    height: f64,
    axis: Axis,
) -> Option<[(PointKey, Point3<f64>); 2]> {
    let mut corners = [Point3::origin(); 3];
    for (corner, &index) in corners.iter_mut().zip(&face) {
        *corner = mesh.vertices.get(index as usize)?.position;
    }
    let dist = corners.map(|p| axis.component(&p) - height);

    if dist.iter().all(|&d| d > 0.0) || dist.iter().all(|&d| d < 0.0) {
        return None;
    }
    if dist.iter().all(|&d| d == 0.0) {
        // Coplanar face: its boundary comes from the neighbouring faces.
        return None;
    }

    let mut hits: Vec<(PointKey, Point3<f64>)> = Vec::with_capacity(3);
    let mut push = |key: PointKey, point: Point3<f64>| {
        if !hits.iter().any(|(k, _)| *k == key) {
            hits.push((key, point));
        }
    };

    for i in 0..3 {
        if dist[i] == 0.0 {
            push(PointKey::Vertex(face[i]), corners[i]);
        }
    }

    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let crosses = (dist[i] < 0.0 && dist[j] > 0.0) || (dist[i] > 0.0 && dist[j] < 0.0);
        if !crosses {
            continue;
        }
        let (lo, hi) = if face[i] <= face[j] { (i, j) } else { (j, i) };
        let t = dist[lo] / (dist[lo] - dist[hi]);
        let point = corners[lo] + (corners[hi] - corners[lo]) * t;
        push(PointKey::Edge(face[lo], face[hi]), point);
    }

    match hits.as_slice() {
        [a, b] => Some([*a, *b]),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{Vertex, Vector3, axis_aligned_box, unit_cube};

    fn tetrahedron() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(5.0, 10.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(5.0, 5.0, 10.0));
        mesh.faces.push([0, 1, 3]);
        mesh.faces.push([1, 2, 3]);
        mesh.faces.push([2, 0, 3]);
        mesh.faces.push([0, 2, 1]);
        mesh
    }

    #[test]
    fn unit_cube_section_along_each_axis() {
        let cube = unit_cube();
        for axis in Axis::ALL {
            for height in [0.01, 0.25, 0.5, 0.99] {
                let section = slice(&cube, height, axis);
                assert!(!section.is_degenerate(), "{axis} at {height}");
                assert_relative_eq!(section.width(), 1.0, epsilon = 1e-12);
                assert_relative_eq!(section.depth(), 1.0, epsilon = 1e-12);
                assert_relative_eq!(section.circumference(), 4.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn shared_edges_are_emitted_once() {
        // Four vertical edges plus one diagonal per side face.
        let section = slice(&unit_cube(), 0.5, Axis::Y);
        assert_eq!(section.len(), 8);
        assert_eq!(section.segments.len(), 8);
    }

    #[test]
    fn segments_form_closed_loop() {
        let section = slice(&unit_cube(), 0.3, Axis::Z);
        let mut degree = vec![0usize; section.len()];
        for [a, b] in &section.segments {
            degree[*a] += 1;
            degree[*b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 2));
    }

    #[test]
    fn section_outside_mesh_is_empty() {
        let cube = unit_cube();
        for height in [-0.5, 1.5, f64::NAN, f64::INFINITY] {
            let section = slice(&cube, height, Axis::Y);
            assert!(section.is_empty());
            assert_relative_eq!(section.circumference(), 0.0);
            assert_relative_eq!(section.width(), 0.0);
            assert_relative_eq!(section.depth(), 0.0);
            assert!(section.centroid().is_none());
        }
    }

    #[test]
    fn section_at_top_face_follows_side_edges() {
        // The coplanar top triangles are skipped, the side faces supply the rim.
        let section = slice(&unit_cube(), 1.0, Axis::Z);
        assert_eq!(section.len(), 4);
        assert_relative_eq!(section.circumference(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn single_touching_vertex_is_ignored() {
        let section = slice(&tetrahedron(), 10.0, Axis::Z);
        assert!(section.is_empty());
    }

    #[test]
    fn tetrahedron_mid_section_is_triangle() {
        let section = slice(&tetrahedron(), 5.0, Axis::Z);
        assert_eq!(section.len(), 3);
        assert_eq!(section.hull().len(), 3);
        assert!(section.circumference() > 0.0);

        // Halfway up, the section is the base scaled by 0.5 around the apex.
        assert_relative_eq!(section.width(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(section.depth(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_embeds_height_on_axis() {
        let body = axis_aligned_box(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 4.0, 3.0));
        let section = slice(&body, 1.5, Axis::Y);
        let centroid = section.centroid().unwrap();
        let planar = section.centroid_2d().unwrap();

        assert_relative_eq!(centroid.y, 1.5);
        assert_relative_eq!(centroid.x, planar.x);
        assert_relative_eq!(centroid.z, planar.y);

        // Mean of the four corners and the four face-diagonal crossings.
        assert_relative_eq!(centroid.x, -0.0625, epsilon = 1e-12);
        assert_relative_eq!(centroid.z, 2.468_75, epsilon = 1e-12);
    }

    #[test]
    fn projection_drops_sliced_axis() {
        let body = axis_aligned_box(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 5.0));

        let y = slice(&body, 1.0, Axis::Y);
        assert_relative_eq!(y.width(), 2.0, epsilon = 1e-12); // X
        assert_relative_eq!(y.depth(), 5.0, epsilon = 1e-12); // Z

        let z = slice(&body, 1.0, Axis::Z);
        assert_relative_eq!(z.width(), 2.0, epsilon = 1e-12); // X
        assert_relative_eq!(z.depth(), 3.0, epsilon = 1e-12); // Y

        let x = slice(&body, 1.0, Axis::X);
        assert_relative_eq!(x.width(), 3.0, epsilon = 1e-12); // Y
        assert_relative_eq!(x.depth(), 5.0, epsilon = 1e-12); // Z
    }

    #[test]
    fn slicing_is_deterministic() {
        let mut body = unit_cube();
        body.merge(&{
            let mut other = unit_cube();
            other.translate(Vector3::new(3.0, 0.0, 0.0));
            other
        });
        let a = slice(&body, 0.42, Axis::Y);
        let b = slice(&body, 0.42, Axis::Y);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn two_point_section_measures_width_only() {
        let section = CrossSection {
            axis: Axis::Y,
            height: 0.0,
            points: vec![Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)],
            segments: vec![[0, 1]],
        };
        assert!(section.is_degenerate());
        assert_relative_eq!(circumference(&section), 0.0);
        assert_relative_eq!(width(&section), 2.0);
        assert_relative_eq!(depth(&section), 1.0);
    }

    #[test]
    fn faces_with_missing_vertices_are_skipped() {
        let mut cube = unit_cube();
        cube.faces.push([0, 6, 100]);
        let section = slice(&cube, 0.5, Axis::Y);
        assert_eq!(section.len(), 8);
    }

    #[test]
    fn bounds_2d_matches_extents() {
        let section = slice(&unit_cube(), 0.5, Axis::X);
        let (lo, hi) = section.bounds_2d().unwrap();
        assert_relative_eq!(hi.x - lo.x, section.width());
        assert_relative_eq!(hi.y - lo.y, section.depth());
        assert!(CrossSection::empty(Axis::X, 0.0).bounds_2d().is_none());
    }
}
