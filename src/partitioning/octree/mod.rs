pub use octree_build::{max_number_of_leaf_nodes, OctreeBuilder};
pub use octree_cache::OctreeModelCache;
pub use octree_tree::{OctreeNode, OctreeNodes, NUM_CHILDREN};
pub use octree_volume::Octree;

mod octree_build;
mod octree_cache;
mod octree_tree;
mod octree_validation;
mod octree_volume;
