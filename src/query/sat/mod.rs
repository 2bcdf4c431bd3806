//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For boxes and triangles, a finite set of candidate axes
//! (face normals and cross products of edge directions) is enough to find such an axis
//! whenever one exists.
//!
//! Candidate axes with a (nearly) zero length, e.g. the cross product of two parallel edges,
//! carry no information and are skipped. The tests exit on the first separating axis.

pub use self::sat_box_box::*;
pub use self::sat_box_triangle::*;

mod sat_box_box;
mod sat_box_triangle;
