use crate::math::{Matrix, Real, UnitVector, Vector, WorldMatrix, DEFAULT_EPSILON};

/// The upper-left 3x3 block of `m`: its rotation and scale, without translation.
#[inline]
pub fn linear_part(m: &WorldMatrix) -> Matrix {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

/// The scale factors of `m` along each of its local axes.
///
/// Each component is the norm of the corresponding column of the linear part of `m`.
#[inline]
pub fn extract_scale(m: &WorldMatrix) -> Vector {
    let linear = linear_part(m);
    Vector::new(
        linear.column(0).norm(),
        linear.column(1).norm(),
        linear.column(2).norm(),
    )
}

/// A pure scaling matrix with the scale factors of `m`.
#[inline]
pub fn extract_scale_matrix(m: &WorldMatrix) -> WorldMatrix {
    WorldMatrix::new_nonuniform_scaling(&extract_scale(m))
}

/// The largest scale factor of `m`.
#[inline]
pub fn max_scale(m: &WorldMatrix) -> Real {
    extract_scale(m).max()
}

/// The squared norm of the first column of `m`.
///
/// This is the squared scale factor of `m` if its scaling is uniform.
#[inline]
pub fn uniform_scale_squared(m: &WorldMatrix) -> Real {
    m.fixed_view::<3, 1>(0, 0).norm_squared()
}

/// The translational part of `m`.
#[inline]
pub fn extract_translation(m: &WorldMatrix) -> Vector {
    m.fixed_view::<3, 1>(0, 3).into_owned()
}

/// A pure translation matrix with the translation of `m`.
#[inline]
pub fn extract_translation_matrix(m: &WorldMatrix) -> WorldMatrix {
    WorldMatrix::new_translation(&extract_translation(m))
}

/// The rotation that turns the direction `current` toward the direction `target`.
///
/// Returns the identity if either vector is zero or if they point the same way. Opposite
/// directions give a half turn about an axis orthogonal to `current`.
pub fn rotation_from_towards(current: &Vector, target: &Vector) -> WorldMatrix {
    let denom = current.norm() * target.norm();

    if denom <= DEFAULT_EPSILON {
        return WorldMatrix::identity();
    }

    let Some(axis) = UnitVector::try_new(current.cross(target), DEFAULT_EPSILON) else {
        if current.dot(target) >= 0.0 {
            return WorldMatrix::identity();
        }

        return WorldMatrix::from_axis_angle(&orthogonal_axis(current), core::f32::consts::PI);
    };

    let angle = (current.dot(target) / denom).clamp(-1.0, 1.0).acos();
    WorldMatrix::from_axis_angle(&axis, angle)
}

// A unit vector orthogonal to the non-zero vector `v`.
fn orthogonal_axis(v: &Vector) -> UnitVector {
    UnitVector::new_normalize(v.cross(&Vector::ith(v.iamin(), 1.0)))
}
