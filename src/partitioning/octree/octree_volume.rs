use super::{OctreeModelCache, OctreeNode, OctreeNodes};
use crate::math::WorldMatrix;
use crate::shape::Mesh;

/// A collision volume made of an octree of oriented boxes tightly covering a mesh.
///
/// Only the nodes touching the mesh are kept, so an octree intersects another volume iff one
/// of its leaves, i.e. a small box around a part of the mesh surface, does.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Octree {
    nodes: OctreeNodes,
    build_depth: usize,
}

impl Octree {
    /// Creates the octree of `mesh` subdivided into `depth` levels, taken from `cache`.
    ///
    /// The octree starts in the mesh local space, i.e. with an identity world matrix.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn new(cache: &mut OctreeModelCache, mesh: &Mesh, depth: usize) -> Self {
        Self {
            nodes: cache.checkout(mesh, depth),
            build_depth: depth,
        }
    }

    /// Creates the octree of `mesh` subdivided into `depth` levels, placed by `world`.
    pub fn from_mesh(
        cache: &mut OctreeModelCache,
        mesh: &Mesh,
        world: &WorldMatrix,
        depth: usize,
    ) -> Self {
        let mut result = Self::new(cache, mesh, depth);
        result.compute_data(world);
        result
    }

    /// Moves every box of this octree to the world matrix `world`.
    #[inline]
    pub fn compute_data(&mut self, world: &WorldMatrix) {
        self.nodes.set_world_matrix(world);
    }

    /// The nodes of this octree.
    #[inline]
    pub fn nodes(&self) -> &OctreeNodes {
        &self.nodes
    }

    /// The root node of this octree.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        self.nodes.root()
    }

    /// The number of levels this octree was built with.
    #[inline]
    pub fn build_depth(&self) -> usize {
        self.build_depth
    }

    /// The depth of the deepest nodes of this octree. The root has a depth of zero.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.build_depth - 1
    }

    /// All the nodes of this octree with the given depth.
    pub fn nodes_at_depth(&self, depth: usize) -> impl Iterator<Item = &OctreeNode> + '_ {
        self.nodes
            .iter()
            .filter(move |node| node.depth() as usize == depth)
    }

    /// All the nodes of this octree, parents first.
    #[inline]
    pub fn all_nodes(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
        self.nodes.iter()
    }

    /// All the leaves of this octree.
    pub fn leaves(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
        self.nodes.iter().filter(|node| node.is_leaf())
    }
}
