extern crate nalgebra as na;
#[macro_use]
extern crate approx;

mod octree_queries;
mod touching_boundaries;

use collide3d::bounding_volume::Aabb;
use collide3d::math::{Point, Real, Vector, WorldMatrix};
use collide3d::shape::Mesh;
use oorandom::Rand32;

/// A closed box surface made of 12 triangles.
pub fn box_mesh(mins: Point, maxs: Point) -> Mesh {
    let indices = vec![
        [0, 1, 2],
        [0, 2, 3],
        [4, 6, 5],
        [4, 7, 6],
        [0, 4, 5],
        [0, 5, 1],
        [1, 5, 6],
        [1, 6, 2],
        [2, 6, 7],
        [2, 7, 3],
        [3, 7, 4],
        [3, 4, 0],
    ];
    Mesh::new(Aabb::new(mins, maxs).vertices().to_vec(), indices).unwrap()
}

pub fn cube_mesh(half_extent: Real) -> Mesh {
    box_mesh(
        Point::from(Vector::repeat(-half_extent)),
        Point::from(Vector::repeat(half_extent)),
    )
}

pub fn rand_in(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

pub fn rand_vector(rng: &mut Rand32, min: Real, max: Real) -> Vector {
    Vector::new(
        rand_in(rng, min, max),
        rand_in(rng, min, max),
        rand_in(rng, min, max),
    )
}

/// A world matrix made of a translation, a rotation and a uniform scale.
pub fn rand_world(rng: &mut Rand32) -> WorldMatrix {
    let translation = rand_vector(rng, -3.0, 3.0);
    let axis = na::Unit::try_new(rand_vector(rng, -1.0, 1.0), 1.0e-3)
        .unwrap_or_else(Vector::x_axis);
    let angle = rand_in(rng, 0.0, core::f32::consts::TAU);
    let scale = rand_in(rng, 0.5, 2.0);

    WorldMatrix::new_translation(&translation)
        * WorldMatrix::from_axis_angle(&axis, angle)
        * WorldMatrix::new_nonuniform_scaling(&Vector::repeat(scale))
}
