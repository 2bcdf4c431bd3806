use crate::{cube, recorder, spawn, HitLog};
use collide3d::pipeline::{
    BodySet, ColliderVolume, CollisionManager, CollisionTestSelfCommand, GroupId,
};

#[test]
fn overlapping_proxies_without_contact_dispatch_nothing() {
    let mesh = cube(0.5);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    // Proxy spheres of radius ~0.866 at a distance of ~1.5 from each other, while the boxes
    // are separated.
    for (i, pos) in [[0.0, 0.0, 0.0], [1.5, 0.0, 0.0], [0.75, 1.3, 0.0]]
        .into_iter()
        .enumerate()
    {
        let handle = spawn(&mut bodies, &mesh, ColliderVolume::Obb, i as u128, pos);
        manager.add_body(GroupId(0), handle);
    }

    manager.add_command(CollisionTestSelfCommand::new(GroupId(0), recorder(&log)));
    manager.process_collisions(&bodies);
    assert!(log.borrow().is_empty());
}

#[test]
fn single_overlapping_pair_is_dispatched_once() {
    let mesh = cube(0.5);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    for (i, pos) in [[0.0, 0.0, 0.0], [0.9, 0.0, 0.0], [10.0, 0.0, 0.0]]
        .into_iter()
        .enumerate()
    {
        let handle = spawn(&mut bodies, &mesh, ColliderVolume::Obb, i as u128, pos);
        manager.add_body(GroupId(3), handle);
    }

    manager.add_command(CollisionTestSelfCommand::new(GroupId(3), recorder(&log)));
    manager.process_collisions(&bodies);
    assert_eq!(*log.borrow(), vec![(0, 1)]);

    // Every pass reports the pair again.
    manager.process_collisions(&bodies);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn all_pairs_of_a_cluster_are_dispatched() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();

    for i in 0..5 {
        let pos = [i as f32 * 0.1, 0.0, 0.0];
        let handle = spawn(&mut bodies, &mesh, ColliderVolume::Aabb, i, pos);
        manager.add_body(GroupId(0), handle);
    }

    manager.add_command(CollisionTestSelfCommand::new(GroupId(0), recorder(&log)));
    manager.process_collisions(&bodies);

    let mut hits = log.borrow().clone();
    hits.iter_mut().for_each(|(a, b)| {
        if a > b {
            core::mem::swap(a, b)
        }
    });
    hits.sort();
    hits.dedup();
    // No self pair, no duplicate pair.
    assert_eq!(hits.len(), 10);
    assert_eq!(log.borrow().len(), 10);
    assert!(hits.iter().all(|(a, b)| a != b));
}
