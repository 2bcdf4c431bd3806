use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::WorldMatrix;
use crate::partitioning::Octree;
use crate::query;
use crate::shape::Mesh;

/// Enum representing the type of a collision volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeType {
    /// A bounding sphere.
    Sphere,
    /// A world axis-aligned bounding box.
    Aabb,
    /// An oriented bounding box.
    Obb,
    /// An octree of oriented bounding boxes.
    Octree,
}

/// A collision volume approximating a mesh placed in the world.
///
/// Each variant is refreshed from the mesh and its world matrix by [`Volume::compute_data`],
/// and any two volumes can be tested against each other with [`Volume::intersects`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Volume {
    /// A bounding sphere.
    Sphere(BoundingSphere),
    /// A world axis-aligned bounding box.
    Aabb(Aabb),
    /// An oriented bounding box.
    Obb(Obb),
    /// An octree of oriented bounding boxes.
    Octree(Octree),
}

impl Volume {
    /// The type of this volume.
    pub fn volume_type(&self) -> VolumeType {
        match self {
            Volume::Sphere(_) => VolumeType::Sphere,
            Volume::Aabb(_) => VolumeType::Aabb,
            Volume::Obb(_) => VolumeType::Obb,
            Volume::Octree(_) => VolumeType::Octree,
        }
    }

    /// Recomputes this volume so it bounds `mesh` placed by `world`.
    ///
    /// An octree keeps the subdivision built for its mesh and only moves its boxes.
    pub fn compute_data(&mut self, mesh: &Mesh, world: &WorldMatrix) {
        match self {
            Volume::Sphere(s) => s.compute_data(mesh, world),
            Volume::Aabb(b) => b.compute_data(mesh, world),
            Volume::Obb(b) => b.compute_data(mesh, world),
            Volume::Octree(o) => o.compute_data(world),
        }
    }

    /// Exact intersection test between two volumes of any type.
    #[inline]
    pub fn intersects(&self, other: &Volume) -> bool {
        query::intersection_test(self, other)
    }

    /// The deepest level of a volume hierarchy, or zero for single volumes.
    pub fn max_depth(&self) -> usize {
        match self {
            Volume::Octree(o) => o.max_depth(),
            _ => 0,
        }
    }

    /// Converts this volume to a bounding sphere if it is one.
    pub fn as_sphere(&self) -> Option<&BoundingSphere> {
        match self {
            Volume::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this volume to an axis-aligned box if it is one.
    pub fn as_aabb(&self) -> Option<&Aabb> {
        match self {
            Volume::Aabb(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this volume to an oriented box if it is one.
    pub fn as_obb(&self) -> Option<&Obb> {
        match self {
            Volume::Obb(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this volume to an octree if it is one.
    pub fn as_octree(&self) -> Option<&Octree> {
        match self {
            Volume::Octree(o) => Some(o),
            _ => None,
        }
    }
}

impl From<BoundingSphere> for Volume {
    fn from(s: BoundingSphere) -> Self {
        Volume::Sphere(s)
    }
}

impl From<Aabb> for Volume {
    fn from(b: Aabb) -> Self {
        Volume::Aabb(b)
    }
}

impl From<Obb> for Volume {
    fn from(b: Obb) -> Self {
        Volume::Obb(b)
    }
}

impl From<Octree> for Volume {
    fn from(o: Octree) -> Self {
        Volume::Octree(o)
    }
}
