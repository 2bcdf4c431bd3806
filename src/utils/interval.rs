use crate::math::Real;

/// A closed interval `[start, end]` of the real line.
///
/// Intervals are mostly used as the projection of a shape on an axis, in which case two
/// shapes are separated along that axis iff their intervals do not overlap.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// The lower bound of the interval.
    pub start: Real,
    /// The upper bound of the interval.
    pub end: Real,
}

impl Interval {
    /// Creates the interval `[start, end]`.
    #[inline]
    pub fn new(start: Real, end: Real) -> Self {
        Self { start, end }
    }

    /// The interval `[center - radius, center + radius]`.
    #[inline]
    pub fn from_center_radius(center: Real, radius: Real) -> Self {
        Self::new(center - radius, center + radius)
    }

    /// The smallest interval containing all the given values.
    ///
    /// The result is empty, with `start > end`, if there is no value.
    #[inline]
    pub fn from_values<const N: usize>(values: [Real; N]) -> Self {
        values
            .into_iter()
            .fold(Self::new(Real::MAX, -Real::MAX), |acc, v| {
                Self::new(acc.start.min(v), acc.end.max(v))
            })
    }

    /// The length of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.end - self.start
    }

    /// Does this interval contain `value`? Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, value: Real) -> bool {
        self.start <= value && value <= self.end
    }

    /// Do `self` and `other` share at least one value?
    ///
    /// Both intervals are closed, so intervals touching at a single bound overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}
