//! Spatial partitioning tools.

pub use self::octree::{
    max_number_of_leaf_nodes, Octree, OctreeBuilder, OctreeModelCache, OctreeNode, OctreeNodes,
    NUM_CHILDREN,
};

mod octree;
