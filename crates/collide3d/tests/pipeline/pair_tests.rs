use crate::{cube, recorder, spawn, translation, HitLog};
use collide3d::bounding_volume::BoundingVolume;
use collide3d::bounding_volume::Aabb;
use collide3d::pipeline::{
    Body, BodySet, ColliderVolume, CollisionManager, CollisionTestPairCommand, GroupId,
};
use std::cell::RefCell;
use std::rc::Rc;

struct Ship;
struct Bullet;

#[test]
fn pair_test_reports_bodies_in_group_order() {
    let ship_mesh = cube(1.0);
    let bullet_mesh = cube(0.1);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    let ships = manager.group_id::<Ship>();
    let bullets = manager.group_id::<Bullet>();

    for (user_data, pos) in [(1, [0.0, 0.0, 0.0]), (2, [20.0, 0.0, 0.0])] {
        let handle = spawn(&mut bodies, &ship_mesh, ColliderVolume::Obb, user_data, pos);
        manager.add_body(ships, handle);
    }

    for (user_data, pos) in [(10, [1.05, 0.0, 0.0]), (11, [-30.0, 0.0, 0.0])] {
        let handle = spawn(&mut bodies, &bullet_mesh, ColliderVolume::Sphere, user_data, pos);
        manager.add_body(bullets, handle);
    }

    manager.set_collision_pair::<Ship, Bullet>(recorder(&log));
    manager.process_collisions(&bodies);

    assert_eq!(*log.borrow(), vec![(1, 10)]);
}

#[test]
fn empty_groups_are_skipped() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::with_group_count(2);
    let log = HitLog::default();

    let handle = spawn(&mut bodies, &mesh, ColliderVolume::Sphere, 1, [0.0; 3]);
    manager.add_body(GroupId(0), handle);
    manager.add_command(CollisionTestPairCommand::new(GroupId(0), GroupId(1), recorder(&log)));
    manager.add_command(CollisionTestPairCommand::new(GroupId(1), GroupId(0), recorder(&log)));

    manager.process_collisions(&bodies);
    assert!(log.borrow().is_empty());
    assert!(!manager.group(GroupId(1)).group_aabb().is_valid());
}

#[test]
fn group_boxes_are_refreshed_before_testing() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    let a = spawn(&mut bodies, &mesh, ColliderVolume::Obb, 1, [0.0; 3]);
    let b = spawn(&mut bodies, &mesh, ColliderVolume::Obb, 2, [50.0, 0.0, 0.0]);
    manager.add_body(GroupId(0), a);
    manager.add_body(GroupId(1), b);
    manager.add_command(CollisionTestPairCommand::new(GroupId(0), GroupId(1), recorder(&log)));

    manager.process_collisions(&bodies);
    assert!(log.borrow().is_empty());

    // Only the body moves, the group box must follow it within the same pass.
    bodies[b].update_collision_data(&translation(1.5, 0.0, 0.0));
    manager.process_collisions(&bodies);
    assert_eq!(*log.borrow(), vec![(1, 2)]);

    let group_aabb = manager.group(GroupId(1)).group_aabb();
    assert!(group_aabb.contains(&Aabb::from_sphere(bodies[b].proxy_sphere())));
}

#[test]
fn removed_bodies_are_no_longer_tested() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    let a = spawn(&mut bodies, &mesh, ColliderVolume::Aabb, 1, [0.0; 3]);
    let b = spawn(&mut bodies, &mesh, ColliderVolume::Aabb, 2, [1.0, 0.0, 0.0]);
    manager.add_body(GroupId(0), a);
    manager.add_body(GroupId(1), b);
    manager.add_command(CollisionTestPairCommand::new(GroupId(0), GroupId(1), recorder(&log)));

    manager.process_collisions(&bodies);
    assert_eq!(log.borrow().len(), 1);

    manager.remove_body_from_all_groups(b);
    let _ = bodies.remove(b);
    manager.process_collisions(&bodies);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn commands_run_in_registration_order() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let a = spawn(&mut bodies, &mesh, ColliderVolume::Sphere, 1, [0.0; 3]);
    let b = spawn(&mut bodies, &mesh, ColliderVolume::Sphere, 2, [0.5, 0.0, 0.0]);
    manager.add_body(GroupId(0), a);
    manager.add_body(GroupId(1), b);

    for label in ["first", "second", "third"] {
        let order = order.clone();
        manager.add_command(CollisionTestPairCommand::new(
            GroupId(0),
            GroupId(1),
            move |_: &Body, _: &Body| order.borrow_mut().push(label),
        ));
    }

    manager.process_collisions(&bodies);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}
