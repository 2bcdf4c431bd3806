use crate::bounding_volume::Obb;
use crate::partitioning::{Octree, OctreeNode};
use crate::query::details::{
    intersection_test_aabb_obb, intersection_test_obb_obb, intersection_test_sphere_obb,
};
use crate::shape::Volume;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Counters collected while traversing two octrees against each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OctreeTraversalStats {
    /// The number of node pairs whose boxes were tested.
    pub num_pair_tests: usize,
    /// The largest number of node pairs waiting on the traversal stack.
    pub max_stack_len: usize,
}

/// Intersection test between a volume of any type and an octree.
///
/// The octree is traversed depth-first: the children of a node are only visited if the node
/// box intersects `volume1`, and the test succeeds as soon as a leaf box does.
pub fn intersection_test_volume_octree(volume1: &Volume, octree2: &Octree) -> bool {
    match volume1 {
        Volume::Sphere(s) => {
            octree_intersects_with(octree2, |obb| intersection_test_sphere_obb(s, obb))
        }
        Volume::Aabb(b) => {
            octree_intersects_with(octree2, |obb| intersection_test_aabb_obb(b, obb))
        }
        Volume::Obb(b) => octree_intersects_with(octree2, |obb| intersection_test_obb_obb(b, obb)),
        Volume::Octree(octree1) => intersection_test_octree_octree(octree1, octree2),
    }
}

/// Intersection test between an octree and a volume of any type.
#[inline]
pub fn intersection_test_octree_volume(octree1: &Octree, volume2: &Volume) -> bool {
    intersection_test_volume_octree(volume2, octree1)
}

fn octree_intersects_with(octree: &Octree, mut test: impl FnMut(&Obb) -> bool) -> bool {
    let nodes = octree.nodes();
    let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push(nodes.root_id());

    while let Some(id) = stack.pop() {
        let node = &nodes[id];

        if test(node.obb()) {
            if node.is_leaf() {
                return true;
            }

            stack.extend(node.children());
        }
    }

    false
}

/// Intersection test between two octrees.
///
/// Starting from the pair of roots, pairs of nodes whose boxes intersect are refined by
/// replacing one of the nodes by each of its children. The test succeeds as soon as two
/// intersecting leaves are found.
pub fn intersection_test_octree_octree(octree1: &Octree, octree2: &Octree) -> bool {
    intersection_test_octree_octree_with_stats(octree1, octree2).0
}

/// Intersection test between two octrees, also returning traversal counters.
pub fn intersection_test_octree_octree_with_stats(
    octree1: &Octree,
    octree2: &Octree,
) -> (bool, OctreeTraversalStats) {
    let nodes1 = octree1.nodes();
    let nodes2 = octree2.nodes();
    let mut stats = OctreeTraversalStats::default();
    let mut stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push((nodes1.root_id(), nodes2.root_id()));

    while let Some((id1, id2)) = stack.pop() {
        let node1 = &nodes1[id1];
        let node2 = &nodes2[id2];
        stats.num_pair_tests += 1;

        if !intersection_test_obb_obb(node1.obb(), node2.obb()) {
            continue;
        }

        if node1.is_leaf() && node2.is_leaf() {
            return (true, stats);
        }

        if descend_into_first(node1, node2) {
            stack.extend(node1.children().map(|child| (child, id2)));
        } else {
            stack.extend(node2.children().map(|child| (id1, child)));
        }

        stats.max_stack_len = stats.max_stack_len.max(stack.len());
    }

    (false, stats)
}

/// Picks the node of a pair to refine: the non-leaf one, or the larger subtree if both can be
/// refined. Ties go to the first node.
#[inline]
fn descend_into_first(node1: &OctreeNode, node2: &OctreeNode) -> bool {
    node2.is_leaf() || (!node1.is_leaf() && node1.size() >= node2.size())
}
