use crate::bounding_volume::{Aabb, Obb};
use crate::query::sat;

/// Intersection test between an axis-aligned box and an oriented box.
///
/// The axis-aligned box takes part in the separating axis test as a box with the world axes
/// and a unit scale.
#[inline]
pub fn intersection_test_aabb_obb(aabb1: &Aabb, obb2: &Obb) -> bool {
    sat::box_box_find_separating_axis(aabb1, obb2).is_none()
}

/// Intersection test between an oriented box and an axis-aligned box.
#[inline]
pub fn intersection_test_obb_aabb(obb1: &Obb, aabb2: &Aabb) -> bool {
    intersection_test_aabb_obb(aabb2, obb1)
}

/// Intersection test between oriented boxes.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    sat::box_box_find_separating_axis(obb1, obb2).is_none()
}
