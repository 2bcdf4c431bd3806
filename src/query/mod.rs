//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general method provided by this module is [`query::intersection_test()`](intersection_test())
//! to determine if two collision volumes are intersecting or not.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the one described above.
//! For example `intersection_test_sphere_sphere` tests two volumes known at compile-time to be spheres.
//! They are less convenient to use than the most generic version but avoid the dispatch on the volume types.
//! The specific functions have the form `intersection_test_[volume1]_[volume2]()` where:
//!
//! * `[volume1]` is the type of the first volume passed to the function, e.g., `sphere`, or `obb`.
//! * `[volume2]` is the type of the second volume passed to the function, e.g., `aabb`, or `octree`.

pub use self::intersection_test::intersection_test;

mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of volumes.
pub mod details {
    pub use super::intersection_test::*;
}
