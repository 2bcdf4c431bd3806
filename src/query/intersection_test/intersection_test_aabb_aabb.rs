use crate::bounding_volume::{Aabb, BoundingVolume};

/// Intersection test between axis-aligned boxes.
///
/// Boxes sharing a face, an edge or a corner intersect.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.intersects(aabb2)
}
