use crate::{cube, recorder, spawn, HitLog};
use collide3d::bounding_volume::{Aabb, BoundingSphere};
use collide3d::pipeline::{
    BodySet, ColliderVolume, CollisionManager, CollisionTestPairCommand, CollisionTestSelfCommand,
    DebugColor, DebugSink, GroupId,
};
use collide3d::shape::Volume;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Shown {
    Sphere(DebugColor),
    Aabb(DebugColor),
    Volume(DebugColor),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Shown>>>);

impl Recorder {
    fn count(&self, shown: Shown) -> usize {
        self.0.borrow().iter().filter(|s| **s == shown).count()
    }
}

impl DebugSink for Recorder {
    fn show_sphere(&mut self, _: &BoundingSphere, color: DebugColor) {
        self.0.borrow_mut().push(Shown::Sphere(color));
    }

    fn show_aabb(&mut self, _: &Aabb, color: DebugColor) {
        self.0.borrow_mut().push(Shown::Aabb(color));
    }

    fn show_volume(&mut self, _: &Volume, color: DebugColor) {
        self.0.borrow_mut().push(Shown::Volume(color));
    }
}

#[test]
fn debug_sink_sees_tested_and_hit_volumes() {
    let mesh = cube(0.5);
    let mut bodies = BodySet::new();
    let mut manager = CollisionManager::new();
    let log = HitLog::default();
    let sink = Recorder::default();

    // One touching pair, one pair with overlapping proxies only.
    for (user_data, pos) in [(0, [0.0, 0.0, 0.0]), (1, [0.9, 0.0, 0.0]), (2, [0.0, 1.6, 0.0])] {
        let handle = spawn(&mut bodies, &mesh, ColliderVolume::Obb, user_data, pos);
        manager.add_body(GroupId(0), handle);
    }

    manager.add_command(CollisionTestSelfCommand::new(GroupId(0), recorder(&log)));
    manager.set_debug_sink(Some(Box::new(sink.clone())));
    manager.process_collisions(&bodies);

    assert_eq!(*log.borrow(), vec![(0, 1)]);
    assert_eq!(sink.count(Shown::Volume(DebugColor::Hit)), 2);
    assert_eq!(sink.count(Shown::Volume(DebugColor::Miss)), 2);
    assert_eq!(sink.count(Shown::Sphere(DebugColor::Tested)), 4);
}

#[test]
fn debug_sink_does_not_change_results() {
    let mesh = cube(1.0);
    let mut bodies = BodySet::new();
    let with_sink = HitLog::default();
    let without_sink = HitLog::default();
    let sink = Recorder::default();

    let a = spawn(&mut bodies, &mesh, ColliderVolume::Sphere, 1, [0.0; 3]);
    let b = spawn(&mut bodies, &mesh, ColliderVolume::Obb, 2, [2.5, 0.0, 0.0]);

    for (log, debug) in [(&with_sink, true), (&without_sink, false)] {
        let mut manager = CollisionManager::new();
        manager.add_body(GroupId(0), a);
        manager.add_body(GroupId(1), b);
        manager.add_command(CollisionTestPairCommand::new(GroupId(0), GroupId(1), recorder(log)));

        if debug {
            manager.set_debug_sink(Some(Box::new(sink.clone())));
        }

        manager.process_collisions(&bodies);
    }

    assert_eq!(*with_sink.borrow(), *without_sink.borrow());
    assert_eq!(sink.count(Shown::Aabb(DebugColor::Tested)), 2);
}
