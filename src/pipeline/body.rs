use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::WorldMatrix;
use crate::partitioning::{Octree, OctreeModelCache};
use crate::shape::{Mesh, Volume};
use slab::Slab;
use std::sync::Arc;

/// The single bounding volumes a body can use as its exact collision volume.
///
/// Octrees need a subdivision depth and a cache, see [`Body::with_octree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ColliderVolume {
    /// A bounding sphere.
    Sphere,
    /// A world axis-aligned bounding box.
    Aabb,
    /// An oriented bounding box.
    Obb,
}

/// A participant of the collision pipeline.
///
/// A body owns one exact collision volume and one proxy sphere, both bounding the same mesh
/// placed by the same world matrix. They are always recomputed together, so the proxy sphere
/// can safely be used to reject pairs before the exact volumes are tested.
#[derive(Clone, Debug)]
pub struct Body {
    mesh: Arc<Mesh>,
    volume: Volume,
    proxy: BoundingSphere,
    world: WorldMatrix,
    /// User-defined data associated to this body.
    pub user_data: u128,
}

impl Body {
    /// Creates a body with the world matrix set to identity and `volume` as its collision
    /// volume around `mesh`.
    pub fn new(mesh: Arc<Mesh>, volume: ColliderVolume) -> Self {
        let world = WorldMatrix::identity();
        Self {
            proxy: BoundingSphere::from_mesh(&mesh, &world),
            volume: single_volume(&mesh, &world, volume),
            mesh,
            world,
            user_data: 0,
        }
    }

    /// Creates a body with the world matrix set to identity and an octree of `depth` levels
    /// taken from `cache` as its collision volume around `mesh`.
    pub fn with_octree(mesh: Arc<Mesh>, depth: usize, cache: &mut OctreeModelCache) -> Self {
        let world = WorldMatrix::identity();
        Self {
            proxy: BoundingSphere::from_mesh(&mesh, &world),
            volume: Volume::Octree(Octree::from_mesh(cache, &mesh, &world, depth)),
            mesh,
            world,
            user_data: 0,
        }
    }

    /// Sets the user data of this body.
    pub fn with_user_data(mut self, user_data: u128) -> Self {
        self.user_data = user_data;
        self
    }

    /// Replaces the mesh and the collision volume of this body.
    ///
    /// The new volume and the proxy sphere are computed right away from the current world
    /// matrix of the body.
    pub fn set_collider(&mut self, mesh: Arc<Mesh>, volume: ColliderVolume) {
        self.volume = single_volume(&mesh, &self.world, volume);
        self.proxy = BoundingSphere::from_mesh(&mesh, &self.world);
        self.mesh = mesh;
    }

    /// Replaces the mesh of this body and uses an octree of `depth` levels taken from `cache`
    /// as its collision volume.
    ///
    /// The new volume and the proxy sphere are computed right away from the current world
    /// matrix of the body.
    pub fn set_collider_octree(
        &mut self,
        mesh: Arc<Mesh>,
        depth: usize,
        cache: &mut OctreeModelCache,
    ) {
        self.volume = Volume::Octree(Octree::from_mesh(cache, &mesh, &self.world, depth));
        self.proxy = BoundingSphere::from_mesh(&mesh, &self.world);
        self.mesh = mesh;
    }

    /// Moves this body, recomputing both its collision volume and its proxy sphere.
    pub fn update_collision_data(&mut self, world: &WorldMatrix) {
        self.world = *world;
        self.volume.compute_data(&self.mesh, world);
        self.proxy.compute_data(&self.mesh, world);
    }

    /// The mesh of this body.
    #[inline]
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// The exact collision volume of this body.
    #[inline]
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// The proxy sphere of this body.
    #[inline]
    pub fn proxy_sphere(&self) -> &BoundingSphere {
        &self.proxy
    }

    /// The world matrix this body was last moved to.
    #[inline]
    pub fn world_matrix(&self) -> &WorldMatrix {
        &self.world
    }
}

fn single_volume(mesh: &Mesh, world: &WorldMatrix, volume: ColliderVolume) -> Volume {
    match volume {
        ColliderVolume::Sphere => Volume::Sphere(BoundingSphere::from_mesh(mesh, world)),
        ColliderVolume::Aabb => Volume::Aabb(Aabb::from_mesh(mesh, world)),
        ColliderVolume::Obb => Volume::Obb(Obb::from_mesh(mesh, world)),
    }
}

/// The unique handle of a body added to a [`BodySet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// The raw index of this handle.
    #[inline]
    pub fn into_raw(self) -> u32 {
        self.0
    }
}

/// A set of bodies, addressed by handles that stay stable until the body is removed.
#[derive(Clone, Debug, Default)]
pub struct BodySet {
    bodies: Slab<Body>,
}

impl BodySet {
    /// Creates an empty set of bodies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body to this set.
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        BodyHandle(self.bodies.insert(body) as u32)
    }

    /// Removes a body from this set.
    ///
    /// The body must also be removed from the groups it was added to.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        self.bodies.try_remove(handle.0 as usize)
    }

    /// The body with the given handle.
    #[inline]
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0 as usize)
    }

    /// The body with the given handle.
    #[inline]
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0 as usize)
    }

    /// The number of bodies in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates through all the bodies of this set.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies
            .iter()
            .map(|(id, body)| (BodyHandle(id as u32), body))
    }
}

impl core::ops::Index<BodyHandle> for BodySet {
    type Output = Body;

    #[inline]
    fn index(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0 as usize]
    }
}

impl core::ops::IndexMut<BodyHandle> for BodySet {
    #[inline]
    fn index_mut(&mut self, handle: BodyHandle) -> &mut Body {
        &mut self.bodies[handle.0 as usize]
    }
}
