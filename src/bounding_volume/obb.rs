//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, WorldMatrix};
use crate::shape::Mesh;
use crate::utils;

/// An Oriented Bounding Box (OBB).
///
/// The box is described by an axis-aligned box in its local space and by the world matrix
/// placing that local space in the world. Every derived quantity (inverse matrix, world
/// center, squared scale) is refreshed by [`Obb::set_world_matrix`].
///
/// The squared scale is read from the first column of the world matrix, so projections of
/// the box are exact only for uniform scaling.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    local_aabb: Aabb,
    half_diagonal: Vector,
    world: WorldMatrix,
    inverse_world: WorldMatrix,
    world_center: Point,
    scale_squared: Real,
}

impl Default for Obb {
    fn default() -> Self {
        Self::new(Aabb::default(), WorldMatrix::identity())
    }
}

impl Obb {
    /// Creates the oriented box obtained by placing `local_aabb` in the world with `world`.
    pub fn new(local_aabb: Aabb, world: WorldMatrix) -> Self {
        let mut result = Obb {
            local_aabb,
            half_diagonal: local_aabb.half_extents(),
            world: WorldMatrix::identity(),
            inverse_world: WorldMatrix::identity(),
            world_center: local_aabb.center(),
            scale_squared: 1.0,
        };
        result.set_world_matrix(&world);
        result
    }

    /// The oriented box enclosing `mesh` placed by `world`.
    #[inline]
    pub fn from_mesh(mesh: &Mesh, world: &WorldMatrix) -> Self {
        Self::new(*mesh.local_aabb(), *world)
    }

    /// Recomputes this box so it bounds `mesh` placed by `world`.
    pub fn compute_data(&mut self, mesh: &Mesh, world: &WorldMatrix) {
        self.set_local_aabb(*mesh.local_aabb());
        self.set_world_matrix(world);
    }

    /// Replaces the local-space bounds of this box, keeping its world matrix.
    pub fn set_local_aabb(&mut self, local_aabb: Aabb) {
        self.local_aabb = local_aabb;
        self.half_diagonal = local_aabb.half_extents();
        self.world_center = self.world.transform_point(&local_aabb.center());
    }

    /// Moves this box by setting its world matrix.
    ///
    /// A non-invertible matrix (e.g. with a zero scale) is accepted but leaves the box with
    /// an identity inverse, which makes the exact tests on it meaningless.
    pub fn set_world_matrix(&mut self, world: &WorldMatrix) {
        self.world = *world;
        self.inverse_world = world.try_inverse().unwrap_or_else(|| {
            log::debug!("Non-invertible world matrix given to an oriented box: {:?}", world);
            WorldMatrix::identity()
        });
        self.world_center = world.transform_point(&self.local_aabb.center());
        self.scale_squared = utils::uniform_scale_squared(world);
    }

    /// The local-space axis-aligned bounds of this box.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The local-space corner with the smallest coordinates.
    #[inline]
    pub fn local_mins(&self) -> &Point {
        &self.local_aabb.mins
    }

    /// The local-space corner with the largest coordinates.
    #[inline]
    pub fn local_maxs(&self) -> &Point {
        &self.local_aabb.maxs
    }

    /// The local-space center of this box.
    #[inline]
    pub fn local_center(&self) -> Point {
        self.local_aabb.center()
    }

    /// Half of the local-space diagonal of this box, i.e. its local half-extents.
    #[inline]
    pub fn half_diagonal(&self) -> &Vector {
        &self.half_diagonal
    }

    /// The matrix placing this box in the world.
    #[inline]
    pub fn world_matrix(&self) -> &WorldMatrix {
        &self.world
    }

    /// The inverse of [`Self::world_matrix`].
    #[inline]
    pub fn inverse_world_matrix(&self) -> &WorldMatrix {
        &self.inverse_world
    }

    /// The world-space center of this box.
    #[inline]
    pub fn world_center(&self) -> &Point {
        &self.world_center
    }

    /// The squared scale factor of the world matrix.
    #[inline]
    pub fn scale_squared(&self) -> Real {
        self.scale_squared
    }

    /// The `i`-th world-space axis of this box, scaled by the world matrix.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector {
        self.world.fixed_view::<3, 1>(0, i).into_owned()
    }

    /// The three world-space axes of this box.
    #[inline]
    pub fn axes(&self) -> [Vector; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// The world-space corners of this box, in the same order as [`Aabb::vertices`].
    pub fn vertices(&self) -> [Point; 8] {
        self.local_aabb
            .vertices()
            .map(|pt| self.world.transform_point(&pt))
    }

    /// Does this box contain the world-space point `pt`? Points on the boundary are contained.
    pub fn contains_point(&self, pt: &Point) -> bool {
        self.local_aabb
            .contains_local_point(&self.inverse_world.transform_point(pt))
    }

    /// The world-space point of this box closest to the world-space point `pt`.
    pub fn clamp_point(&self, pt: &Point) -> Point {
        let local = self.inverse_world.transform_point(pt);
        let clamped = utils::clamp_point(&local, &self.local_aabb.mins, &self.local_aabb.maxs);
        self.world.transform_point(&clamped)
    }
}
