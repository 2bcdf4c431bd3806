use crate::bounding_volume::Obb;
use crate::math::WorldMatrix;
use core::ops::{Index, IndexMut};

/// The number of children of an internal octree node.
pub const NUM_CHILDREN: usize = 8;

/// A node of an octree: an oriented box and up to eight children subdividing it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct OctreeNode {
    pub(super) obb: Obb,
    pub(super) children: [Option<u32>; NUM_CHILDREN],
    pub(super) parent: Option<u32>,
    pub(super) depth: u32,
    pub(super) valid: bool,
    pub(super) size: u32,
}

impl OctreeNode {
    pub(super) fn new(obb: Obb, parent: Option<u32>, depth: u32) -> Self {
        Self {
            obb,
            children: [None; NUM_CHILDREN],
            parent,
            depth,
            valid: false,
            size: 0,
        }
    }

    /// The box of this node.
    #[inline]
    pub fn obb(&self) -> &Obb {
        &self.obb
    }

    /// The index of the parent of this node, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    /// The index of the child of this node covering the octant `octant`, if any.
    #[inline]
    pub fn child(&self, octant: usize) -> Option<u32> {
        self.children[octant]
    }

    /// The indices of all the children of this node.
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Does this node have no children?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// The depth of this node. The root has a depth of zero.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Does this node, or one of its descendant leaves, touch a triangle of its mesh?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The number of valid descendants of this node.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// The nodes of an octree, stored in a flat array.
///
/// The root is the first node and every parent is stored before its children.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct OctreeNodes {
    nodes: Vec<OctreeNode>,
}

impl Index<u32> for OctreeNodes {
    type Output = OctreeNode;

    #[inline]
    fn index(&self, index: u32) -> &OctreeNode {
        &self.nodes[index as usize]
    }
}

impl IndexMut<u32> for OctreeNodes {
    #[inline]
    fn index_mut(&mut self, index: u32) -> &mut OctreeNode {
        &mut self.nodes[index as usize]
    }
}

impl OctreeNodes {
    /// The number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is there no node at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The index of the root node.
    ///
    /// # Panics
    ///
    /// Panics if there is no node.
    #[inline]
    pub fn root_id(&self) -> u32 {
        assert!(!self.nodes.is_empty(), "An empty octree has no root.");
        0
    }

    /// The root node.
    ///
    /// # Panics
    ///
    /// Panics if there is no node.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self[self.root_id()]
    }

    /// The node at index `id`, if it exists.
    #[inline]
    pub fn get(&self, id: u32) -> Option<&OctreeNode> {
        self.nodes.get(id as usize)
    }

    /// An iterator through all the nodes, parents first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, OctreeNode> {
        self.nodes.iter()
    }

    /// The indices of all the leaves.
    pub fn leaves(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.nodes.len() as u32).filter(move |id| self[*id].is_leaf())
    }

    pub(super) fn push(&mut self, node: OctreeNode) -> u32 {
        self.nodes.push(node);
        self.nodes.len() as u32 - 1
    }

    /// Marks the node `id` as valid, as well as all its ancestors.
    ///
    /// The upward walk stops at the first ancestor that is already valid.
    pub(super) fn validate(&mut self, id: u32) {
        self[id].valid = true;
        let mut curr = self[id].parent;

        while let Some(parent) = curr {
            if self[parent].valid {
                break;
            }

            self[parent].valid = true;
            curr = self[parent].parent;
        }
    }

    /// Recomputes the size of every node from its valid children.
    pub(super) fn recompute_sizes(&mut self) {
        // Children are stored after their parent.
        for id in (0..self.nodes.len()).rev() {
            let node = &self.nodes[id];
            let size = node
                .children()
                .map(|child| &self.nodes[child as usize])
                .filter(|child| child.valid)
                .map(|child| child.size + 1)
                .sum::<u32>();
            self.nodes[id].size = size;
        }
    }

    /// A compact copy of these nodes keeping only the root and the valid nodes.
    ///
    /// Invalid children are detached from their parent in the copy.
    pub fn valid_instance(&self) -> OctreeNodes {
        let mut result = OctreeNodes::default();

        if self.nodes.is_empty() {
            return result;
        }

        let mut root = self.nodes[0].clone();
        root.children = [None; NUM_CHILDREN];
        let _ = result.push(root);

        // Pairs of (source id, copy id) whose children remain to be copied.
        let mut pending = vec![(0u32, 0u32)];

        while let Some((src_id, dst_id)) = pending.pop() {
            for octant in 0..NUM_CHILDREN {
                let Some(src_child) = self[src_id].children[octant] else {
                    continue;
                };

                if !self[src_child].valid {
                    continue;
                }

                let mut child = self[src_child].clone();
                child.children = [None; NUM_CHILDREN];
                child.parent = Some(dst_id);
                let dst_child = result.push(child);
                result[dst_id].children[octant] = Some(dst_child);
                pending.push((src_child, dst_child));
            }
        }

        result
    }

    /// Moves every node box by setting its world matrix.
    pub fn set_world_matrix(&mut self, world: &WorldMatrix) {
        for node in &mut self.nodes {
            node.obb.set_world_matrix(world);
        }
    }
}
