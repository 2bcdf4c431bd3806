/*!
collide3d
========

**collide3d** is a 3-dimensional collision detection library written with
the rust programming language.

It tests meshes against each other through a configurable hierarchy of bounding volumes
(spheres, axis-aligned boxes, oriented boxes and octrees of oriented boxes) and reports
colliding pairs of bodies to user-provided dispatch callbacks.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = na::Point3<Real>;

    /// The vector type.
    pub type Vector = na::Vector3<Real>;

    /// The unit vector type.
    pub type UnitVector = na::UnitVector3<Real>;

    /// The 3x3 matrix type.
    pub type Matrix = na::Matrix3<Real>;

    /// A homogeneous 4x4 transform mapping local-space points to world space.
    ///
    /// Points are column vectors: `world_point = matrix * local_point`. The matrix may
    /// combine translation, rotation and uniform scaling.
    pub type WorldMatrix = na::Matrix4<Real>;
}
