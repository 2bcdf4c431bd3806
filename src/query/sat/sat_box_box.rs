use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;
use arrayvec::ArrayVec;

/// The maximum number of candidate separating axes between two boxes.
pub const MAX_BOX_BOX_SAT_AXES: usize = 15;

/// A box that can take part in a box-box separating axis test.
pub trait SatBox {
    /// The three world-space directions of the box faces. They need not be normalized.
    fn sat_axes(&self) -> [Vector; 3];

    /// The world-space center of the box.
    fn sat_center(&self) -> Point;

    /// Half the length of the projection of the box on `axis`.
    ///
    /// `axis` must not be zero.
    fn max_projection_length(&self, axis: &Vector) -> Real;
}

impl SatBox for Aabb {
    #[inline]
    fn sat_axes(&self) -> [Vector; 3] {
        [Vector::x(), Vector::y(), Vector::z()]
    }

    #[inline]
    fn sat_center(&self) -> Point {
        self.center()
    }

    #[inline]
    fn max_projection_length(&self, axis: &Vector) -> Real {
        axis.abs().dot(&self.half_extents()) / axis.norm()
    }
}

impl SatBox for Obb {
    #[inline]
    fn sat_axes(&self) -> [Vector; 3] {
        self.axes()
    }

    #[inline]
    fn sat_center(&self) -> Point {
        *self.world_center()
    }

    /// The axis is brought to the local space of the box, where the projection of the
    /// half-diagonal is computed, then rescaled by the squared scale of the world matrix.
    #[inline]
    fn max_projection_length(&self, axis: &Vector) -> Real {
        let local_axis = utils::linear_part(self.inverse_world_matrix()) * axis;
        local_axis.abs().dot(self.half_diagonal()) / axis.norm() * self.scale_squared()
    }
}

/// The non-degenerate candidate separating axes of two boxes.
///
/// These are the three face directions of each box followed by the nine cross products of a
/// face direction of `box1` with a face direction of `box2`. Axes with a squared length
/// smaller than [`DEFAULT_EPSILON`] are dropped.
pub fn box_box_sat_axes(
    box1: &impl SatBox,
    box2: &impl SatBox,
) -> ArrayVec<Vector, MAX_BOX_BOX_SAT_AXES> {
    let axes1 = box1.sat_axes();
    let axes2 = box2.sat_axes();
    let mut result = ArrayVec::new();

    let mut push = |axis: Vector| {
        if axis.norm_squared() > DEFAULT_EPSILON {
            result.push(axis);
        }
    };

    for axis in axes1.iter().chain(axes2.iter()) {
        push(*axis);
    }

    for a1 in &axes1 {
        for a2 in &axes2 {
            push(a1.cross(a2));
        }
    }

    result
}

/// Do the projections of `box1` and `box2` on `axis` overlap?
///
/// Projections touching at a single point overlap.
#[inline]
pub fn box_box_overlap_on_axis(box1: &impl SatBox, box2: &impl SatBox, axis: &Vector) -> bool {
    let center_distance = utils::projection_length(&(box2.sat_center() - box1.sat_center()), axis);
    let radii = box1.max_projection_length(axis) + box2.max_projection_length(axis);
    center_distance.abs() <= radii
}

/// Finds an axis separating `box1` and `box2`, if there is one.
pub fn box_box_find_separating_axis(box1: &impl SatBox, box2: &impl SatBox) -> Option<Vector> {
    box_box_sat_axes(box1, box2)
        .into_iter()
        .find(|axis| !box_box_overlap_on_axis(box1, box2, axis))
}
