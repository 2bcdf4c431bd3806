//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector, WorldMatrix};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point,
    /// The triangle second point.
    pub b: Point,
    /// The triangle third point.
    pub c: Point,
}

impl From<[Point; 3]> for Triangle {
    fn from(arr: [Point; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: `b - a`, `c - b` and `a - c`.
    #[inline]
    pub fn edges(&self) -> [Vector; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// The non-normalized normal `(b - a) × (c - b)` of this triangle.
    ///
    /// This is zero if the triangle is degenerate.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        let [ab, bc, _] = self.edges();
        ab.cross(&bc)
    }

    /// The normalized normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<na::Unit<Vector>> {
        na::Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() / 2.0
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// This triangle with every vertex transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &WorldMatrix) -> Self {
        Self::from(self.vertices().map(|pt| m.transform_point(&pt)))
    }

    /// This triangle with every vertex translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector) -> Self {
        Self::new(self.a + shift, self.b + shift, self.c + shift)
    }
}
