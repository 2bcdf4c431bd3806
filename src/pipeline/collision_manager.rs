use super::{
    BodyGroup, BodyHandle, BodySet, CollisionContext, CollisionDispatch, CollisionTestCommand,
    CollisionTestPairCommand, CollisionTestSelfCommand, CollisionTestTerrainCommand, DebugSink,
    GroupId, TerrainCollisionTest,
};
use core::any::TypeId;
use hashbrown::HashMap;

/// The number of groups a collision manager creates by default.
pub const DEFAULT_GROUP_COUNT: usize = 20;

/// Runs the registered collision tests over groups of bodies.
///
/// Each call to [`CollisionManager::process_collisions`] first refreshes the enclosing box of
/// every group, then executes the registered commands in the order they were added.
pub struct CollisionManager {
    groups: Vec<BodyGroup>,
    commands: Vec<Box<dyn CollisionTestCommand>>,
    type_groups: HashMap<TypeId, GroupId>,
    debug: Option<Box<dyn DebugSink>>,
}

impl Default for CollisionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionManager {
    /// Creates a collision manager with [`DEFAULT_GROUP_COUNT`] empty groups.
    pub fn new() -> Self {
        Self::with_group_count(DEFAULT_GROUP_COUNT)
    }

    /// Creates a collision manager with `count` empty groups.
    pub fn with_group_count(count: usize) -> Self {
        Self {
            groups: vec![BodyGroup::new(); count],
            commands: Vec::new(),
            type_groups: HashMap::default(),
            debug: None,
        }
    }

    /// The number of groups of this manager.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// All the groups of this manager.
    #[inline]
    pub fn groups(&self) -> &[BodyGroup] {
        &self.groups
    }

    /// Creates empty groups until `id` refers to an existing group.
    pub fn ensure_group(&mut self, id: GroupId) {
        if id.index() >= self.groups.len() {
            self.groups.resize(id.index() + 1, BodyGroup::new());
        }
    }

    /// The group with the given id.
    ///
    /// # Panics
    ///
    /// Panics if there is no group with this id.
    pub fn group(&self, id: GroupId) -> &BodyGroup {
        assert!(
            id.index() < self.groups.len(),
            "The group {:?} does not exist ({} groups).",
            id,
            self.groups.len()
        );
        &self.groups[id.index()]
    }

    /// The group with the given id.
    ///
    /// # Panics
    ///
    /// Panics if there is no group with this id.
    pub fn group_mut(&mut self, id: GroupId) -> &mut BodyGroup {
        assert!(
            id.index() < self.groups.len(),
            "The group {:?} does not exist ({} groups).",
            id,
            self.groups.len()
        );
        &mut self.groups[id.index()]
    }

    /// The group of the bodies of type `T`.
    ///
    /// On first use for `T`, a new empty group is appended after all the existing ones, so a
    /// type never shares the group of an id picked by hand below [`Self::num_groups`]. Groups
    /// created later with [`Self::ensure_group`] may however be handed out to types too.
    pub fn group_id<T: 'static>(&mut self) -> GroupId {
        if let Some(id) = self.type_groups.get(&TypeId::of::<T>()) {
            return *id;
        }

        let id = GroupId(self.groups.len() as u32);
        self.groups.push(BodyGroup::new());
        let _ = self.type_groups.insert(TypeId::of::<T>(), id);
        id
    }

    /// Adds a body to a group.
    ///
    /// # Panics
    ///
    /// Panics if there is no group with this id.
    pub fn add_body(&mut self, group: GroupId, handle: BodyHandle) {
        self.group_mut(group).insert(handle);
    }

    /// Removes a body from a group.
    ///
    /// Returns `false` if the body was not part of this group.
    pub fn remove_body(&mut self, group: GroupId, handle: BodyHandle) -> bool {
        self.group_mut(group).remove(handle)
    }

    /// Removes a body from every group it is part of.
    pub fn remove_body_from_all_groups(&mut self, handle: BodyHandle) {
        for group in &mut self.groups {
            let _ = group.remove(handle);
        }
    }

    /// Registers a command, executed after all the previously registered ones.
    pub fn add_command(&mut self, command: impl CollisionTestCommand + 'static) {
        self.commands.push(Box::new(command));
    }

    /// The number of registered commands.
    #[inline]
    pub fn num_commands(&self) -> usize {
        self.commands.len()
    }

    /// Removes all the registered commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Registers a test between the bodies of type `A` and the bodies of type `B`.
    pub fn set_collision_pair<A: 'static, B: 'static>(
        &mut self,
        dispatch: impl CollisionDispatch + 'static,
    ) {
        let group1 = self.group_id::<A>();
        let group2 = self.group_id::<B>();
        self.add_command(CollisionTestPairCommand::new(group1, group2, dispatch));
    }

    /// Registers a test between the bodies of type `A`.
    pub fn set_collision_self<A: 'static>(&mut self, dispatch: impl CollisionDispatch + 'static) {
        let group = self.group_id::<A>();
        self.add_command(CollisionTestSelfCommand::new(group, dispatch));
    }

    /// Registers a test between the bodies of type `A` and a terrain.
    pub fn set_collision_terrain<A: 'static>(
        &mut self,
        terrain: impl TerrainCollisionTest + 'static,
    ) {
        let group = self.group_id::<A>();
        self.add_command(CollisionTestTerrainCommand::new(group, terrain));
    }

    /// Sets the sink receiving the volumes tested by the commands, or removes it.
    pub fn set_debug_sink(&mut self, sink: Option<Box<dyn DebugSink>>) {
        self.debug = sink;
    }

    /// Refreshes the enclosing box of every group from the proxy spheres of its bodies.
    pub fn update_group_aabbs(&mut self, bodies: &BodySet) {
        for group in &mut self.groups {
            group.update_group_aabb(bodies);
        }
    }

    /// Runs one collision pass over `bodies`.
    ///
    /// Every body referenced by a group must be part of `bodies`, with up-to-date collision
    /// data.
    pub fn process_collisions(&mut self, bodies: &BodySet) {
        self.update_group_aabbs(bodies);

        let mut no_debug = ();
        let debug: &mut dyn DebugSink = match self.debug.as_deref_mut() {
            Some(sink) => sink,
            None => &mut no_debug,
        };

        let mut context = CollisionContext {
            groups: &self.groups,
            bodies,
            debug,
        };

        for command in &mut self.commands {
            command.execute(&mut context);
        }
    }
}
