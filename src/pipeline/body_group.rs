use super::{BodyHandle, BodySet};
use crate::bounding_volume::Aabb;

/// The index of a [`BodyGroup`] inside of a [`CollisionManager`](super::CollisionManager).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u32);

impl GroupId {
    /// The index of this group.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A set of bodies of the same category, with an axis-aligned box enclosing all of them.
///
/// The order of the bodies inside of a group is irrelevant. A group does not own its bodies:
/// they live in a [`BodySet`].
#[derive(Clone, Debug)]
pub struct BodyGroup {
    bodies: Vec<BodyHandle>,
    group_aabb: Aabb,
}

impl Default for BodyGroup {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            group_aabb: Aabb::new_invalid(),
        }
    }
}

impl BodyGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body to this group. Does nothing if the body is already part of it.
    pub fn insert(&mut self, handle: BodyHandle) {
        if !self.contains(handle) {
            self.bodies.push(handle);
        }
    }

    /// Removes a body from this group.
    ///
    /// Returns `false` if the body was not part of this group.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        if let Some(pos) = self.bodies.iter().position(|h| *h == handle) {
            let _ = self.bodies.swap_remove(pos);
            true
        } else {
            false
        }
    }

    /// Is the given body part of this group?
    #[inline]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(&handle)
    }

    /// The bodies of this group.
    #[inline]
    pub fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    /// The number of bodies in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Does this group have no body?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The axis-aligned box enclosing the proxy spheres of all the bodies of this group, as of
    /// the last call to [`Self::update_group_aabb`].
    ///
    /// This is an invalid box (see [`Aabb::new_invalid`]) for empty groups.
    #[inline]
    pub fn group_aabb(&self) -> &Aabb {
        &self.group_aabb
    }

    /// Recomputes the box enclosing the proxy spheres of all the bodies of this group.
    pub fn update_group_aabb(&mut self, bodies: &BodySet) {
        self.group_aabb = self
            .bodies
            .iter()
            .map(|handle| Aabb::from_sphere(bodies[*handle].proxy_sphere()))
            .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(&aabb));
    }
}
