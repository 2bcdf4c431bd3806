//! Bounding sphere.

use crate::bounding_volume::{BoundingVolume, Obb};
use crate::math::{Point, Real, WorldMatrix};
use crate::query::details::intersection_test_sphere_sphere;
use crate::shape::{Mesh, Triangle};
use crate::utils;

/// Computes the radius of the smallest sphere centered at `center` enclosing all of `pts`.
#[inline]
pub fn point_cloud_bounding_sphere_with_center<'a>(
    pts: impl IntoIterator<Item = &'a Point>,
    center: Point,
) -> BoundingSphere {
    let mut sqradius: Real = 0.0;

    for pt in pts {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    BoundingSphere::new(center, sqradius.sqrt())
}

/// A bounding sphere.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point,
    /// The radius of the sphere.
    pub radius: Real,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The world-space bounding sphere of `mesh` placed by `world`.
    ///
    /// The local bounding sphere of the mesh is moved by `world` and its radius is multiplied
    /// by the largest scale factor of `world`, so the result encloses the mesh even under
    /// non-uniform scaling.
    pub fn from_mesh(mesh: &Mesh, world: &WorldMatrix) -> Self {
        let local = mesh.local_bounding_sphere();
        BoundingSphere::new(
            world.transform_point(&local.center),
            local.radius * utils::max_scale(world),
        )
    }

    /// Recomputes this sphere so it bounds `mesh` placed by `world`.
    #[inline]
    pub fn compute_data(&mut self, mesh: &Mesh, world: &WorldMatrix) {
        *self = Self::from_mesh(mesh, world);
    }

    /// The sphere enclosing the world-space oriented box `obb`.
    pub fn from_obb(obb: &Obb) -> Self {
        BoundingSphere::new(
            *obb.world_center(),
            obb.half_diagonal().norm() * obb.scale_squared().sqrt(),
        )
    }

    /// The sphere centered at the centroid of `triangle` that passes by its farthest vertex.
    pub fn from_triangle(triangle: &Triangle) -> Self {
        point_cloud_bounding_sphere_with_center(&triangle.vertices(), triangle.center())
    }

    /// Is `pt` inside of this sphere? Points exactly on the boundary are inside.
    #[inline]
    pub fn contains_point(&self, pt: &Point) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        intersection_test_sphere_sphere(self, other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }
}
