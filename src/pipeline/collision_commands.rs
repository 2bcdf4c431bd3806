use super::{
    Body, BodyGroup, BodySet, CollisionDispatch, DebugColor, DebugSink, GroupId,
    TerrainCollisionTest,
};
use crate::query::details::{
    intersection_test_aabb_aabb, intersection_test_sphere_aabb, intersection_test_sphere_sphere,
};

/// Everything a collision test command may read while it executes.
pub struct CollisionContext<'a> {
    /// All the groups of the collision manager, with up-to-date enclosing boxes.
    pub groups: &'a [BodyGroup],
    /// The bodies referenced by the groups.
    pub bodies: &'a BodySet,
    /// The sink receiving the tested volumes.
    pub debug: &'a mut dyn DebugSink,
}

impl<'a> CollisionContext<'a> {
    /// The group with the given id.
    ///
    /// # Panics
    ///
    /// Panics if there is no group with this id.
    #[inline]
    pub fn group(&self, id: GroupId) -> &'a BodyGroup {
        let groups = self.groups;
        assert!(
            id.index() < groups.len(),
            "The group {:?} does not exist ({} groups).",
            id,
            groups.len()
        );
        &groups[id.index()]
    }
}

/// A test run by the collision manager on each call to
/// [`CollisionManager::process_collisions`](super::CollisionManager::process_collisions).
pub trait CollisionTestCommand {
    /// Runs this test.
    fn execute(&mut self, context: &mut CollisionContext<'_>);
}

/// Tests the proxy spheres then the exact volumes of two bodies, dispatching on intersection.
fn test_body_pair(
    body1: &Body,
    body2: &Body,
    dispatch: &mut dyn CollisionDispatch,
    debug: &mut dyn DebugSink,
) {
    if !intersection_test_sphere_sphere(body1.proxy_sphere(), body2.proxy_sphere()) {
        return;
    }

    debug.show_sphere(body1.proxy_sphere(), DebugColor::Tested);
    debug.show_sphere(body2.proxy_sphere(), DebugColor::Tested);

    if body1.volume().intersects(body2.volume()) {
        debug.show_volume(body1.volume(), DebugColor::Hit);
        debug.show_volume(body2.volume(), DebugColor::Hit);
        log::trace!(
            "Collision between the bodies {} and {}.",
            body1.user_data,
            body2.user_data
        );
        dispatch.process_callbacks(body1, body2);
    } else {
        debug.show_volume(body1.volume(), DebugColor::Miss);
        debug.show_volume(body2.volume(), DebugColor::Miss);
    }
}

/// Tests every body of a group against every body of another group.
pub struct CollisionTestPairCommand {
    group1: GroupId,
    group2: GroupId,
    dispatch: Box<dyn CollisionDispatch>,
}

impl CollisionTestPairCommand {
    /// Creates a command testing the group `group1` against the group `group2`.
    pub fn new(
        group1: GroupId,
        group2: GroupId,
        dispatch: impl CollisionDispatch + 'static,
    ) -> Self {
        Self {
            group1,
            group2,
            dispatch: Box::new(dispatch),
        }
    }

    /// The tested groups.
    pub fn groups(&self) -> (GroupId, GroupId) {
        (self.group1, self.group2)
    }
}

impl CollisionTestCommand for CollisionTestPairCommand {
    fn execute(&mut self, context: &mut CollisionContext<'_>) {
        let group1 = context.group(self.group1);
        let group2 = context.group(self.group2);
        let bodies = context.bodies;

        if group1.is_empty() || group2.is_empty() {
            return;
        }

        context.debug.show_aabb(group1.group_aabb(), DebugColor::Tested);
        context.debug.show_aabb(group2.group_aabb(), DebugColor::Tested);

        if !intersection_test_aabb_aabb(group1.group_aabb(), group2.group_aabb()) {
            log::trace!(
                "Groups {:?} and {:?} are separated.",
                self.group1,
                self.group2
            );
            return;
        }

        for handle1 in group1.bodies() {
            let body1 = &bodies[*handle1];

            if !intersection_test_sphere_aabb(body1.proxy_sphere(), group2.group_aabb()) {
                continue;
            }

            for handle2 in group2.bodies() {
                let body2 = &bodies[*handle2];
                test_body_pair(body1, body2, &mut *self.dispatch, &mut *context.debug);
            }
        }
    }
}

/// Tests every pair of distinct bodies of a group.
pub struct CollisionTestSelfCommand {
    group: GroupId,
    dispatch: Box<dyn CollisionDispatch>,
}

impl CollisionTestSelfCommand {
    /// Creates a command testing the bodies of `group` against each other.
    pub fn new(group: GroupId, dispatch: impl CollisionDispatch + 'static) -> Self {
        Self {
            group,
            dispatch: Box::new(dispatch),
        }
    }

    /// The tested group.
    pub fn group(&self) -> GroupId {
        self.group
    }
}

impl CollisionTestCommand for CollisionTestSelfCommand {
    fn execute(&mut self, context: &mut CollisionContext<'_>) {
        let group = context.group(self.group);
        let bodies = context.bodies;
        let handles = group.bodies();

        for (i, handle1) in handles.iter().enumerate() {
            let body1 = &bodies[*handle1];

            for handle2 in &handles[i + 1..] {
                let body2 = &bodies[*handle2];
                test_body_pair(body1, body2, &mut *self.dispatch, &mut *context.debug);
            }
        }
    }
}

/// Tests every body of a group against a static terrain.
pub struct CollisionTestTerrainCommand {
    group: GroupId,
    terrain: Box<dyn TerrainCollisionTest>,
}

impl CollisionTestTerrainCommand {
    /// Creates a command testing the bodies of `group` against `terrain`.
    pub fn new(group: GroupId, terrain: impl TerrainCollisionTest + 'static) -> Self {
        Self {
            group,
            terrain: Box::new(terrain),
        }
    }

    /// The tested group.
    pub fn group(&self) -> GroupId {
        self.group
    }
}

impl CollisionTestCommand for CollisionTestTerrainCommand {
    fn execute(&mut self, context: &mut CollisionContext<'_>) {
        let group = context.group(self.group);

        for handle in group.bodies() {
            self.terrain.test_body(&context.bodies[*handle]);
        }
    }
}
