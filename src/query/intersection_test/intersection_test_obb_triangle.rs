use crate::bounding_volume::Obb;
use crate::query::sat;
use crate::shape::Triangle;

/// Intersection test between an oriented box and a world-space triangle.
///
/// The triangle is brought to the local frame of the box, relative to the box center, where
/// the box is aligned with the coordinate axes.
#[inline]
pub fn intersection_test_obb_triangle(obb1: &Obb, triangle2: &Triangle) -> bool {
    let local_triangle = triangle2
        .transformed(obb1.inverse_world_matrix())
        .translated(&-obb1.local_center().coords);
    sat::aligned_box_triangle_find_separating_axis(obb1.half_diagonal(), &local_triangle)
        .is_none()
}

/// Intersection test between a world-space triangle and an oriented box.
#[inline]
pub fn intersection_test_triangle_obb(triangle1: &Triangle, obb2: &Obb) -> bool {
    intersection_test_obb_triangle(obb2, triangle1)
}
