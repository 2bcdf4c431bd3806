use crate::math::{Real, Vector};
use crate::shape::Triangle;
use crate::utils::Interval;
use arrayvec::ArrayVec;

/// The maximum number of candidate separating axes between a box and a triangle.
pub const MAX_BOX_TRIANGLE_SAT_AXES: usize = 13;

/// The non-degenerate, normalized candidate separating axes between a box aligned with the
/// coordinate axes and `triangle`.
///
/// These are the nine cross products of a coordinate axis with a triangle edge, the three
/// coordinate axes, and the triangle normal. Only cross products and normals that cannot be
/// normalized at all are dropped, so the axes of very small triangles are kept.
pub fn aligned_box_triangle_sat_axes(
    triangle: &Triangle,
) -> ArrayVec<Vector, MAX_BOX_TRIANGLE_SAT_AXES> {
    let mut result = ArrayVec::new();
    let mut push_normalized = |axis: Vector| {
        if let Some(axis) = axis.try_normalize(Real::MIN_POSITIVE) {
            result.push(axis);
        }
    };

    let unit_axes = [Vector::x(), Vector::y(), Vector::z()];

    for axis in &unit_axes {
        for edge in &triangle.edges() {
            push_normalized(axis.cross(edge));
        }
    }

    for axis in unit_axes {
        push_normalized(axis);
    }

    push_normalized(triangle.scaled_normal());
    result
}

/// Is `axis` separating the box `[-half_extents, half_extents]` from `triangle`?
///
/// The box and the triangle must be expressed in the same frame, where the box is centered at
/// the origin and aligned with the coordinate axes. `axis` must be normalized.
#[inline]
pub fn aligned_box_triangle_separated_on_axis(
    half_extents: &Vector,
    triangle: &Triangle,
    axis: &Vector,
) -> bool {
    let projection = Interval::from_values(triangle.vertices().map(|pt| pt.coords.dot(axis)));
    let radius: Real = axis.abs().dot(half_extents);

    (-projection.end).max(projection.start) > radius
}

/// Finds an axis separating the box `[-half_extents, half_extents]` from `triangle`, if any.
///
/// The triangle must be expressed in the local frame of the box, relative to its center.
pub fn aligned_box_triangle_find_separating_axis(
    half_extents: &Vector,
    triangle: &Triangle,
) -> Option<Vector> {
    aligned_box_triangle_sat_axes(triangle)
        .into_iter()
        .find(|axis| aligned_box_triangle_separated_on_axis(half_extents, triangle, axis))
}
