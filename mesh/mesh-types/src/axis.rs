//! Coordinate axes.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Point2, Point3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
///
/// Used to select the vertical direction of a body mesh. Heights are
/// measured along this axis and cross-sections are taken perpendicular
/// to it.
///
/// # Example
///
/// ```
/// use mesh_types::{Axis, Point3};
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.component(&p), 2.0);
/// assert_eq!(Axis::default(), Axis::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis.
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    X,
    /// The Y axis (default vertical axis).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    Y,
    /// The Z axis.
    #[cfg_attr(feature = "serde", serde(alias = "z"))]
    Z,
}

impl Axis {
    /// All three axes in coordinate order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis into a coordinate triple.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The two in-plane axes of a section perpendicular to this axis.
    ///
    /// The first entry is the "width" direction, the second the "depth"
    /// direction:
    ///
    /// | Axis | Plane axes |
    /// |------|------------|
    /// | `X`  | `(Y, Z)`   |
    /// | `Y`  | `(X, Z)`   |
    /// | `Z`  | `(X, Y)`   |
    #[inline]
    #[must_use]
    pub const fn plane_axes(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    #[must_use]
    pub fn component(self, point: &Point3<f64>) -> f64 {
        point[self.index()]
    }

    /// Project a point onto the plane perpendicular to this axis.
    ///
    /// The coordinate along the axis is discarded; the remaining two are
    /// returned in [`plane_axes`](Self::plane_axes) order.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Axis, Point2, Point3};
    ///
    /// let p = Point3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Axis::Y.project(&p), Point2::new(1.0, 3.0));
    /// assert_eq!(Axis::X.project(&p), Point2::new(2.0, 3.0));
    /// ```
    #[must_use]
    pub fn project(self, point: &Point3<f64>) -> Point2<f64> {
        let (u, v) = self.plane_axes();
        Point2::new(point[u.index()], point[v.index()])
    }

    /// Inverse of [`project`](Self::project): place an in-plane point back
    /// into 3D at the given height along this axis.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Axis, Point2, Point3};
    ///
    /// let p = Axis::Y.embed(&Point2::new(1.0, 3.0), 2.0);
    /// assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn embed(self, point: &Point2<f64>, height: f64) -> Point3<f64> {
        let (u, v) = self.plane_axes();
        let mut coords = [0.0; 3];
        coords[self.index()] = height;
        coords[u.index()] = point.x;
        coords[v.index()] = point.y;
        Point3::new(coords[0], coords[1], coords[2])
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an [`Axis`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown axis '{0}', expected one of x, y, z")]
pub struct ParseAxisError(pub String);

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            "z" | "Z" => Ok(Self::Z),
            other => Err(ParseAxisError(other.to_string())),
        }
    }
}
