use crate::math::{Point, Real, Vector};

/// Clamps each coordinate of `pt` into the box `[mins, maxs]`.
///
/// This is the point of the box closest to `pt`.
#[inline]
pub fn clamp_point(pt: &Point, mins: &Point, maxs: &Point) -> Point {
    pt.sup(mins).inf(maxs)
}

/// Is `value` between `a` and `b`? The bounds may be given in any order and are inclusive.
#[inline]
pub fn is_in_range(value: Real, a: Real, b: Real) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= value && value <= hi
}

/// Is each coordinate of `pt` between the corresponding coordinates of `a` and `b`?
#[inline]
pub fn is_point_in_range(pt: &Point, a: &Point, b: &Point) -> bool {
    (0..3).all(|i| is_in_range(pt[i], a[i], b[i]))
}

/// The component-wise minimum of `a` and `b`.
#[inline]
pub fn component_min(a: &Point, b: &Point) -> Point {
    a.inf(b)
}

/// The component-wise maximum of `a` and `b`.
#[inline]
pub fn component_max(a: &Point, b: &Point) -> Point {
    a.sup(b)
}

/// The projection of `v` on the line directed by `onto`.
///
/// Returns the zero vector if `onto` is zero.
#[inline]
pub fn projection(v: &Vector, onto: &Vector) -> Vector {
    let sq_norm = onto.norm_squared();

    if sq_norm == 0.0 {
        Vector::zeros()
    } else {
        *onto * (v.dot(onto) / sq_norm)
    }
}

/// The signed length of the projection of `v` on the line directed by `onto`.
#[inline]
pub fn projection_length(v: &Vector, onto: &Vector) -> Real {
    let norm = onto.norm();

    if norm == 0.0 {
        0.0
    } else {
        v.dot(onto) / norm
    }
}
