use collide3d::bounding_volume::{Aabb, BoundingSphere};
use collide3d::math::Point;
use collide3d::query;
use collide3d::shape::Volume;

#[test]
fn aabbs_sharing_a_corner_intersect() {
    let a = Volume::from(Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)));
    let b = Volume::from(Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0)));
    assert!(query::intersection_test(&a, &b));
    assert!(query::intersection_test(&b, &a));
}

#[test]
fn aabbs_with_a_gap_are_disjoint() {
    let a = Volume::from(Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)));
    let b = Volume::from(Aabb::new(Point::new(1.01, 0.0, 0.0), Point::new(2.0, 1.0, 1.0)));
    assert!(!query::intersection_test(&a, &b));
    assert!(!query::intersection_test(&b, &a));
}

#[test]
fn touching_spheres_are_disjoint() {
    let a = Volume::from(BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 1.0));
    let b = Volume::from(BoundingSphere::new(Point::new(2.0, 0.0, 0.0), 1.0));
    assert!(!query::intersection_test(&a, &b));
    assert!(!query::intersection_test(&b, &a));

    let c = Volume::from(BoundingSphere::new(Point::new(1.99, 0.0, 0.0), 1.0));
    assert!(query::intersection_test(&a, &c));
}

#[test]
fn aabbs_sharing_a_face_intersect() {
    let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point::new(1.0, 0.25, 0.25), Point::new(3.0, 0.75, 0.75));
    assert!(query::details::intersection_test_aabb_aabb(&a, &b));
}
