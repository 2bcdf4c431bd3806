use crate::{cube, spawn};
use collide3d::pipeline::{Body, BodySet, ColliderVolume, CollisionManager};
use std::cell::RefCell;
use std::rc::Rc;

struct Rover;
struct Drone;

#[test]
fn terrain_test_visits_every_body_of_the_group() {
    let mesh = cube(0.5);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let below_ground = Rc::new(RefCell::new(Vec::new()));

    let rovers = manager.group_id::<Rover>();
    let drones = manager.group_id::<Drone>();

    for (user_data, height) in [(1, -0.2), (2, 3.0), (3, 0.1)] {
        let handle = spawn(&mut bodies, &mesh, ColliderVolume::Aabb, user_data, [0.0, height, 0.0]);
        manager.add_body(rovers, handle);
    }

    let drone = spawn(&mut bodies, &mesh, ColliderVolume::Aabb, 4, [0.0, -5.0, 0.0]);
    manager.add_body(drones, drone);

    // A flat ground at y = 0.
    let hits = below_ground.clone();
    manager.set_collision_terrain::<Rover>(move |body: &Body| {
        if body.volume().as_aabb().is_some_and(|aabb| aabb.mins.y < 0.0) {
            hits.borrow_mut().push(body.user_data);
        }
    });

    manager.process_collisions(&bodies);

    let mut hits = below_ground.borrow().clone();
    hits.sort();
    // The drone is never tested.
    assert_eq!(hits, vec![1, 3]);
}
