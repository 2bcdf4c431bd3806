use crate::math::Point;

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. They usually have constant time
/// intersection and inclusion tests.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point;

    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;
}
