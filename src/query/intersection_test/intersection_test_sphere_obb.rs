use crate::bounding_volume::{BoundingSphere, Obb};

/// Intersection test between a sphere and an oriented box.
///
/// The sphere center is clamped into the box in the box local space, and the resulting
/// point, brought back to world space, must be strictly inside the sphere.
#[inline]
pub fn intersection_test_sphere_obb(sphere1: &BoundingSphere, obb2: &Obb) -> bool {
    let closest = obb2.clamp_point(&sphere1.center);
    na::distance_squared(&closest, &sphere1.center) < sphere1.radius * sphere1.radius
}

/// Intersection test between an oriented box and a sphere.
#[inline]
pub fn intersection_test_obb_sphere(obb1: &Obb, sphere2: &BoundingSphere) -> bool {
    intersection_test_sphere_obb(sphere2, obb1)
}
