//! Broad-phase and narrow-phase collision pipeline over groups of bodies.
//!
//! Bodies live in a [`BodySet`] and are sorted into [`BodyGroup`]s. Each collision pass of a
//! [`CollisionManager`] culls whole groups with their enclosing boxes, then pairs of bodies with
//! their proxy spheres, before testing their exact collision volumes.

pub use self::body::{Body, BodyHandle, BodySet, ColliderVolume};
pub use self::body_group::{BodyGroup, GroupId};
pub use self::collision_commands::{
    CollisionContext, CollisionTestCommand, CollisionTestPairCommand, CollisionTestSelfCommand,
    CollisionTestTerrainCommand,
};
pub use self::collision_dispatch::{CollisionDispatch, TerrainCollisionTest};
pub use self::collision_manager::{CollisionManager, DEFAULT_GROUP_COUNT};
pub use self::debug::{DebugColor, DebugSink};

mod body;
mod body_group;
mod collision_commands;
mod collision_dispatch;
mod collision_manager;
mod debug;
