//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, Obb};
use crate::math::{Point, Real, Vector, WorldMatrix};
use crate::shape::{Mesh, Triangle};
use crate::utils::Interval;

/// Computes the smallest [`Aabb`] enclosing all of `pts`.
///
/// Returns an invalid `Aabb` (see [`Aabb::new_invalid`]) if `pts` is empty.
pub fn point_cloud_aabb<'a>(pts: impl IntoIterator<Item = &'a Point>) -> Aabb {
    let mut result = Aabb::new_invalid();

    for pt in pts {
        result.take_point(*pt);
    }

    result
}

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// Its faces are always parallel to the world axes, which makes it cheap to test but loose
/// around rotated objects.
///
/// Intersection and containment tests on AABBs are inclusive: two boxes sharing a face
/// intersect.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin())
    }
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Is this `Aabb` non-empty, i.e. are its `mins` smaller or equal to its `maxs`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) / 2.0
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The range covered by this `Aabb` along the world axis `i`.
    #[inline]
    pub fn interval(&self, i: usize) -> Interval {
        Interval::new(self.mins[i], self.maxs[i])
    }

    /// Does this `Aabb` contain the given point? Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point) -> bool {
        (0..3).all(|i| self.interval(i).contains(point[i]))
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// The smallest `Aabb` containing this one transformed by `m`.
    ///
    /// The eight corners are transformed so the result also encloses rotated boxes.
    pub fn transform_by(&self, m: &WorldMatrix) -> Self {
        point_cloud_aabb(&self.vertices().map(|pt| m.transform_point(&pt)))
    }

    /// The world-space `Aabb` of `mesh` placed by `world`.
    #[inline]
    pub fn from_mesh(mesh: &Mesh, world: &WorldMatrix) -> Self {
        mesh.local_aabb().transform_by(world)
    }

    /// Recomputes this `Aabb` so it bounds `mesh` placed by `world`.
    #[inline]
    pub fn compute_data(&mut self, mesh: &Mesh, world: &WorldMatrix) {
        *self = Self::from_mesh(mesh, world);
    }

    /// The world-space `Aabb` enclosing the oriented box `obb`.
    #[inline]
    pub fn from_obb(obb: &Obb) -> Self {
        point_cloud_aabb(&obb.vertices())
    }

    /// The `Aabb` of the three vertices of `triangle`.
    #[inline]
    pub fn from_triangle(triangle: &Triangle) -> Self {
        point_cloud_aabb(&triangle.vertices())
    }

    /// Enlarges this `Aabb` so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest `Aabb` containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// The `Aabb` enclosing `sphere`.
    #[inline]
    pub fn from_sphere(sphere: &BoundingSphere) -> Self {
        Self::from_half_extents(sphere.center, Vector::repeat(sphere.radius))
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.interval(i).overlaps(&other.interval(i)))
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }
}
