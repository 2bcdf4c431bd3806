use crate::cube_mesh;
use collide3d::bounding_volume::{Aabb, BoundingSphere, Obb};
use collide3d::math::{Point, Vector, WorldMatrix};
use collide3d::partitioning::{Octree, OctreeModelCache};
use collide3d::query::{self, details};
use collide3d::shape::{Mesh, Volume};

#[test]
fn hollow_octree_misses_what_its_box_hits() {
    let mesh = cube_mesh(1.0);
    let mut cache = OctreeModelCache::new();
    let octree = Volume::from(Octree::new(&mut cache, &mesh, 3));
    let obb = Volume::from(Obb::from_mesh(&mesh, &WorldMatrix::identity()));

    // Fits inside the untouched inner leaves.
    let small = Volume::from(BoundingSphere::new(Point::origin(), 0.3));
    assert!(query::intersection_test(&obb, &small));
    assert!(!query::intersection_test(&octree, &small));
    assert!(!query::intersection_test(&small, &octree));

    let large = Volume::from(BoundingSphere::new(Point::origin(), 0.7));
    assert!(query::intersection_test(&octree, &large));
    assert!(query::intersection_test(&large, &octree));

    let inner = Volume::from(Aabb::new(
        Point::new(-0.4, -0.4, -0.4),
        Point::new(0.4, 0.4, 0.4),
    ));
    assert!(!query::intersection_test(&octree, &inner));

    let across_face = Volume::from(Aabb::new(
        Point::new(0.9, -0.1, -0.1),
        Point::new(1.1, 0.1, 0.1),
    ));
    assert!(query::intersection_test(&octree, &across_face));
}

#[test]
fn moved_octree_follows_its_world_matrix() {
    let mesh = cube_mesh(1.0);
    let mut cache = OctreeModelCache::new();
    let mut octree = Octree::new(&mut cache, &mesh, 3);
    let probe = Volume::from(BoundingSphere::new(Point::new(5.0, 0.0, 1.0), 0.2));

    assert!(!details::intersection_test_octree_volume(&octree, &probe));

    octree.compute_data(&WorldMatrix::new_translation(&Vector::new(5.0, 0.0, 0.0)));
    assert!(details::intersection_test_octree_volume(&octree, &probe));

    // Rotating about the probe axis keeps the face under the probe.
    octree.compute_data(
        &(WorldMatrix::new_translation(&Vector::new(5.0, 0.0, 0.0))
            * WorldMatrix::from_axis_angle(&Vector::z_axis(), 0.3)),
    );
    assert!(details::intersection_test_octree_volume(&octree, &probe));
}

#[test]
fn octree_octree_overlapping_shells() {
    let mesh = cube_mesh(1.0);
    let mut cache = OctreeModelCache::new();
    let octree1 = Octree::new(&mut cache, &mesh, 3);
    let octree2 = Octree::from_mesh(
        &mut cache,
        &mesh,
        &WorldMatrix::new_translation(&Vector::new(1.8, 0.0, 0.0)),
        3,
    );

    let (hit, stats) = details::intersection_test_octree_octree_with_stats(&octree1, &octree2);
    assert!(hit);
    assert!(stats.num_pair_tests > 1);
    assert!(details::intersection_test_octree_octree(&octree2, &octree1));
    assert_eq!(cache.len(), 1);
}

#[test]
fn octree_octree_prunes_distant_roots() {
    let mesh = cube_mesh(1.0);
    let mut cache = OctreeModelCache::new();
    let octree1 = Octree::new(&mut cache, &mesh, 4);
    let octree2 = Octree::from_mesh(
        &mut cache,
        &mesh,
        &WorldMatrix::new_translation(&Vector::new(10.0, 0.0, 0.0)),
        4,
    );

    let (hit, stats) = details::intersection_test_octree_octree_with_stats(&octree1, &octree2);
    assert!(!hit);
    assert_eq!(stats.num_pair_tests, 1);
    assert_eq!(stats.max_stack_len, 0);
}

#[test]
fn octree_nested_inside_a_hollow_octree() {
    let outer_mesh = cube_mesh(1.0);
    let inner_mesh = cube_mesh(0.3);
    let mut cache = OctreeModelCache::new();
    let outer = Octree::new(&mut cache, &outer_mesh, 3);
    let inner = Octree::new(&mut cache, &inner_mesh, 2);

    let (hit, stats) = details::intersection_test_octree_octree_with_stats(&outer, &inner);
    assert!(!hit);
    assert!(stats.num_pair_tests > 1);
    assert!(!query::intersection_test(&inner.clone().into(), &outer.clone().into()));

    // The box of the outer mesh does enclose the inner octree.
    let outer_obb = Volume::from(Obb::from_mesh(&outer_mesh, &WorldMatrix::identity()));
    assert!(query::intersection_test(&outer_obb, &inner.into()));
}

// Bounds [0, 4]^3 with a single triangle inside the octant [0, 2]^3.
fn corner_triangle_mesh() -> Mesh {
    Mesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(4.0, 4.0, 4.0),
            Point::new(0.5, 0.5, 0.5),
            Point::new(1.5, 0.5, 0.5),
            Point::new(0.5, 1.5, 0.5),
        ],
        vec![[2, 3, 4]],
    )
    .unwrap()
}

#[test]
fn octree_octree_refines_the_first_tree_on_equal_sizes() {
    let mesh = corner_triangle_mesh();
    let mut cache = OctreeModelCache::new();
    let octree1 = Octree::new(&mut cache, &mesh, 2);
    let octree2 = Octree::from_mesh(
        &mut cache,
        &mesh,
        &WorldMatrix::new_translation(&Vector::new(3.0, 0.0, 0.0)),
        2,
    );
    assert_eq!(octree1.root().size(), 1);
    assert_eq!(octree2.root().size(), 1);

    // The roots overlap, then the only leaf of the first tree is separated from the second
    // root. Refining the second tree first would take one more test.
    let (hit, stats) = details::intersection_test_octree_octree_with_stats(&octree1, &octree2);
    assert!(!hit);
    assert_eq!(stats.num_pair_tests, 2);
    assert_eq!(stats.max_stack_len, 1);
}

#[test]
fn octree_octree_refines_the_larger_tree() {
    let mut cache = OctreeModelCache::new();
    let small = Octree::new(&mut cache, &corner_triangle_mesh(), 2);
    let large = Octree::from_mesh(
        &mut cache,
        &cube_mesh(1.0),
        &WorldMatrix::new_translation(&Vector::repeat(4.5)),
        2,
    );
    assert_eq!(small.root().size(), 1);
    assert_eq!(large.root().size(), 8);

    // The roots, the small root against the 8 leaves of the large tree, then the small leaf
    // against the only large leaf overlapping the small root.
    for (octree1, octree2) in [(&small, &large), (&large, &small)] {
        let (hit, stats) = details::intersection_test_octree_octree_with_stats(octree1, octree2);
        assert!(!hit);
        assert_eq!(stats.num_pair_tests, 1 + 8 + 1);
        assert_eq!(stats.max_stack_len, 8);
    }
}
