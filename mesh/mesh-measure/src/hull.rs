//! Planar convex hull and its perimeter.

use mesh_types::Point2;

/// Convex hull of a planar point set.
///
/// Andrew's monotone chain. Points are ordered with [`f64::total_cmp`] so
/// the result does not depend on input order. The hull is returned
/// counter-clockwise without repeating the first point; collinear points
/// on hull edges are dropped.
///
/// Collinear or coincident inputs yield fewer than three points (the two
/// extremes, or the single distinct point).
///
/// # Example
///
/// ```
/// use mesh_measure::convex_hull;
/// use mesh_types::Point2;
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.2),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(convex_hull(&points).len(), 4);
/// ```
#[must_use]
pub fn convex_hull(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    // +0.0 folds -0.0, which total_cmp would otherwise order before 0.0.
    let mut sorted: Vec<Point2<f64>> = points
        .iter()
        .map(|p| Point2::new(p.x + 0.0, p.y + 0.0))
        .collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // Last point of each chain is the first of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Perimeter of the convex hull of a planar point set.
///
/// Returns 0.0 when the hull has fewer than three vertices, which covers
/// empty, single-point, coincident and collinear inputs alike.
#[must_use]
pub fn hull_perimeter(points: &[Point2<f64>]) -> f64 {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return 0.0;
    }
    polygon_perimeter(&hull)
}

/// Length of a closed polygon, including the closing edge.
fn polygon_perimeter(vertices: &[Point2<f64>]) -> f64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| (b - a).norm())
        .sum()
}

/// Z component of `(b - a) x (c - a)`; positive for a left turn.
fn cross(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x).mul_add(c.y - a.y, -((b.y - a.y) * (c.x - a.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_with_interior() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.5, 0.5),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0), // on an edge
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.2, 0.7),
        ]
    }

    #[test]
    fn hull_of_square_drops_interior_and_edge_points() {
        let hull = convex_hull(&square_with_interior());
        assert_eq!(
            hull,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn hull_is_independent_of_input_order() {
        let mut points = square_with_interior();
        let forward = convex_hull(&points);
        points.reverse();
        assert_eq!(forward, convex_hull(&points));
    }

    #[test]
    fn perimeter_of_square() {
        assert_relative_eq!(hull_perimeter(&square_with_interior()), 4.0);
    }

    #[test]
    fn perimeter_follows_convex_envelope_not_concavity() {
        // L-shape: hull perimeter is shorter than the true outline (8.0).
        let l_shape = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let expected = 2.0 + 1.0 + 2.0_f64.sqrt() + 1.0 + 2.0;
        assert_relative_eq!(hull_perimeter(&l_shape), expected, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_have_zero_perimeter() {
        let line = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ];
        assert_eq!(convex_hull(&line).len(), 2);
        assert_relative_eq!(hull_perimeter(&line), 0.0);
    }

    #[test]
    fn coincident_points_have_zero_perimeter() {
        let same = [Point2::new(1.0, 2.0); 5];
        assert_eq!(convex_hull(&same), vec![Point2::new(1.0, 2.0)]);
        assert_relative_eq!(hull_perimeter(&same), 0.0);
        assert_relative_eq!(hull_perimeter(&[]), 0.0);
    }

    #[test]
    fn negative_zero_sorts_with_zero() {
        let signed = [
            Point2::new(-0.0, 2.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, -2.0),
        ];
        // (0, 1) lies on the x = 0 edge, leaving a triangle.
        let expected = 4.0 + 2.0_f64.sqrt() + 10.0_f64.sqrt();
        assert_relative_eq!(hull_perimeter(&signed), expected, epsilon = 1e-12);
        assert_eq!(convex_hull(&signed).len(), 3);
    }

    #[test]
    fn negative_zero_with_duplicates() {
        let points = [
            Point2::new(-0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let expected = 2.0 + 2.0 * 2.0_f64.sqrt();
        assert_relative_eq!(hull_perimeter(&points), expected, epsilon = 1e-12);
    }

    #[test]
    fn triangle_perimeter() {
        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        assert_relative_eq!(hull_perimeter(&tri), 12.0);
    }
}
