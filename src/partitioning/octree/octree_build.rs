use super::{OctreeNode, OctreeNodes, NUM_CHILDREN};
use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, Obb};
use crate::math::{Point, WorldMatrix};
use crate::query::details::{intersection_test_obb_triangle, intersection_test_sphere_sphere};
use crate::shape::{Mesh, Triangle};

/// Signs of the offset of each octant center from the center of its parent, per axis.
const OCTANT_SIGNS: [[bool; 3]; NUM_CHILDREN] = [
    [true, true, true],
    [false, true, true],
    [true, false, true],
    [true, true, false],
    [false, false, true],
    [false, true, false],
    [true, false, false],
    [false, false, false],
];

/// The maximum number of leaves of an octree subdivided into `depth` levels.
///
/// # Panics
///
/// Panics if `depth` is zero.
#[inline]
pub fn max_number_of_leaf_nodes(depth: usize) -> usize {
    assert!(depth >= 1, "An octree has at least one level.");
    1 << (3 * (depth - 1))
}

/// The bounds of the octant `octant` of `bounds`.
///
/// The octant is the parent box scaled by one half about its center and moved by a quarter of
/// the parent extents toward the corner selected by [`OCTANT_SIGNS`].
pub(super) fn octant_aabb(bounds: &Aabb, octant: usize) -> Aabb {
    let center = bounds.center();
    let mut mins = Point::origin();
    let mut maxs = Point::origin();

    for (i, positive) in OCTANT_SIGNS[octant].iter().enumerate() {
        if *positive {
            mins[i] = center[i];
            maxs[i] = bounds.maxs[i];
        } else {
            mins[i] = bounds.mins[i];
            maxs[i] = center[i];
        }
    }

    Aabb::new(mins, maxs)
}

#[derive(Copy, Clone, Debug)]
struct PendingNode {
    bounds: Aabb,
    parent: Option<(u32, usize)>,
    depth: u32,
}

#[derive(Copy, Clone, Debug)]
struct TriangleProxies {
    triangle: Triangle,
    sphere: BoundingSphere,
    aabb: Aabb,
}

/// Workspace for building the octree of a mesh.
///
/// Reusing the same builder for several meshes avoids reallocating its buffers.
#[derive(Clone, Debug, Default)]
pub struct OctreeBuilder {
    pending: Vec<PendingNode>,
    leaves: Vec<u32>,
    triangles: Vec<TriangleProxies>,
}

impl OctreeBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the octree of `mesh`, subdivided into `depth` levels, in the mesh local space.
    ///
    /// A depth of 1 only creates the root, which covers the local bounds of the mesh. Each
    /// further level splits every node of the previous one into its eight octants. Once built,
    /// the leaves touching at least one triangle of the mesh are marked as valid together with
    /// their ancestors, and node sizes are computed from the valid nodes.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn build(&mut self, mesh: &Mesh, depth: usize) -> OctreeNodes {
        assert!(depth >= 1, "An octree has at least one level.");

        let mut nodes = self.subdivide(mesh.local_aabb(), depth as u32);
        self.validate_leaves(mesh, &mut nodes);
        nodes.recompute_sizes();

        log::debug!(
            "Built an octree of depth {} for the mesh {:?}: {} nodes, {} valid nodes, {}/{} leaves.",
            depth,
            mesh.id(),
            nodes.len(),
            nodes.root().size() + nodes.root().is_valid() as u32,
            self.leaves.len(),
            max_number_of_leaf_nodes(depth),
        );

        nodes
    }

    fn subdivide(&mut self, bounds: &Aabb, depth: u32) -> OctreeNodes {
        let mut nodes = OctreeNodes::default();
        self.leaves.clear();
        self.pending.clear();
        self.pending.push(PendingNode {
            bounds: *bounds,
            parent: None,
            depth: 0,
        });

        while let Some(pending) = self.pending.pop() {
            let obb = Obb::new(pending.bounds, WorldMatrix::identity());
            let parent = pending.parent.map(|(parent, _)| parent);
            let id = nodes.push(OctreeNode::new(obb, parent, pending.depth));

            if let Some((parent, octant)) = pending.parent {
                nodes[parent].children[octant] = Some(id);
            }

            if pending.depth + 1 < depth {
                // Reversed so the octants are popped, and stored, in order.
                for octant in (0..NUM_CHILDREN).rev() {
                    self.pending.push(PendingNode {
                        bounds: octant_aabb(&pending.bounds, octant),
                        parent: Some((id, octant)),
                        depth: pending.depth + 1,
                    });
                }
            } else {
                self.leaves.push(id);
            }
        }

        nodes
    }

    fn validate_leaves(&mut self, mesh: &Mesh, nodes: &mut OctreeNodes) {
        self.triangles.clear();
        self.triangles
            .extend(mesh.triangles().map(|triangle| TriangleProxies {
                triangle,
                sphere: BoundingSphere::from_triangle(&triangle),
                aabb: Aabb::from_triangle(&triangle),
            }));

        for leaf in &self.leaves {
            let obb = nodes[*leaf].obb();
            let leaf_sphere = BoundingSphere::from_obb(obb);
            let leaf_aabb = Aabb::from_obb(obb);

            let touches_mesh = self.triangles.iter().any(|tri| {
                intersection_test_sphere_sphere(&leaf_sphere, &tri.sphere)
                    && leaf_aabb.intersects(&tri.aabb)
                    && intersection_test_obb_triangle(obb, &tri.triangle)
            });

            if touches_mesh {
                nodes.validate(*leaf);
            }
        }
    }
}
