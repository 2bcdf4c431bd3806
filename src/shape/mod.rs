//! Shapes supported by collide3d.

pub use self::mesh::{Mesh, MeshBuilderError, MeshId};
pub use self::triangle::Triangle;
#[doc(inline)]
pub use self::volume::{Volume, VolumeType};

mod mesh;
mod triangle;
mod volume;
