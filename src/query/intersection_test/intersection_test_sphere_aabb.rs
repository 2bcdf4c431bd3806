use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::utils;

/// Intersection test between a sphere and an axis-aligned box.
///
/// The point of the box closest to the sphere center must be strictly inside the sphere.
#[inline]
pub fn intersection_test_sphere_aabb(sphere1: &BoundingSphere, aabb2: &Aabb) -> bool {
    let closest = utils::clamp_point(&sphere1.center, &aabb2.mins, &aabb2.maxs);
    na::distance_squared(&closest, &sphere1.center) < sphere1.radius * sphere1.radius
}

/// Intersection test between an axis-aligned box and a sphere.
#[inline]
pub fn intersection_test_aabb_sphere(aabb1: &Aabb, sphere2: &BoundingSphere) -> bool {
    intersection_test_sphere_aabb(sphere2, aabb1)
}
