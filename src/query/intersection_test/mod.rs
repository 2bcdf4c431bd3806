//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_box_box::{
    intersection_test_aabb_obb, intersection_test_obb_aabb, intersection_test_obb_obb,
};
pub use self::intersection_test_obb_triangle::{
    intersection_test_obb_triangle, intersection_test_triangle_obb,
};
pub use self::intersection_test_octree::{
    intersection_test_octree_octree, intersection_test_octree_octree_with_stats,
    intersection_test_octree_volume, intersection_test_volume_octree, OctreeTraversalStats,
};
pub use self::intersection_test_sphere_aabb::{
    intersection_test_aabb_sphere, intersection_test_sphere_aabb,
};
pub use self::intersection_test_sphere_obb::{
    intersection_test_obb_sphere, intersection_test_sphere_obb,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_aabb_aabb;
mod intersection_test_box_box;
mod intersection_test_obb_triangle;
mod intersection_test_octree;
mod intersection_test_sphere_aabb;
mod intersection_test_sphere_obb;
mod intersection_test_sphere_sphere;
