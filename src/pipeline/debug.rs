use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::shape::Volume;

/// The role of a volume shown to a [`DebugSink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebugColor {
    /// The volume is about to be tested.
    Tested,
    /// The volume intersects the volume it was tested against.
    Hit,
    /// The volume does not intersect the volume it was tested against.
    Miss,
}

/// A side channel receiving the volumes tested by the collision pipeline, e.g. for drawing.
///
/// Every method does nothing by default. Sinks never affect intersection results.
pub trait DebugSink {
    /// Shows a proxy sphere.
    fn show_sphere(&mut self, _sphere: &BoundingSphere, _color: DebugColor) {}

    /// Shows the box enclosing a group of bodies.
    fn show_aabb(&mut self, _aabb: &Aabb, _color: DebugColor) {}

    /// Shows the exact collision volume of a body.
    fn show_volume(&mut self, _volume: &Volume, _color: DebugColor) {}
}

impl DebugSink for () {}
