use super::{OctreeNodes, NUM_CHILDREN};
use crate::bounding_volume::BoundingVolume;

impl OctreeNodes {
    /// Panics if the octree isn’t well-formed.
    ///
    /// The octree is well-formed if it is topologically correct (parent and child indices agree
    /// and every node is reachable from the root), if each child box lies inside its parent box,
    /// and if the validity flags and sizes agree with each other.
    ///
    /// This is mostly a utility for debugging.
    pub fn assert_well_formed(&self) {
        if self.is_empty() {
            return;
        }

        let root = self.root();
        assert!(root.parent().is_none());
        assert_eq!(root.depth(), 0);

        let mut reached = vec![false; self.len()];
        let mut stack = vec![self.root_id()];

        while let Some(id) = stack.pop() {
            assert!(!reached[id as usize], "Node {} reached twice.", id);
            reached[id as usize] = true;

            let node = &self[id];
            let mut expected_size = 0;
            let mut has_valid_child = false;

            for octant in 0..NUM_CHILDREN {
                let Some(child_id) = node.child(octant) else {
                    continue;
                };

                assert!(child_id > id, "Child {} stored before its parent {}.", child_id, id);
                let child = &self[child_id];
                assert_eq!(child.parent(), Some(id));
                assert_eq!(child.depth(), node.depth() + 1);
                assert!(
                    node.obb().local_aabb().contains(child.obb().local_aabb()),
                    "Child {} is not enclosed by its parent {}.",
                    child_id,
                    id
                );

                if child.is_valid() {
                    has_valid_child = true;
                    expected_size += child.size() + 1;
                }

                stack.push(child_id);
            }

            assert_eq!(node.size(), expected_size, "Wrong size for node {}.", id);

            if has_valid_child {
                assert!(node.is_valid(), "Node {} has valid children but is invalid.", id);
            }
        }

        assert!(reached.iter().all(|r| *r), "Some nodes are unreachable.");
    }
}
