//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod obb;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb::point_cloud_aabb;
    pub use super::bounding_sphere::point_cloud_bounding_sphere_with_center;
}
