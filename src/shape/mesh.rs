use crate::bounding_volume::details::{point_cloud_aabb, point_cloud_bounding_sphere_with_center};
use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::Point;
use crate::shape::Triangle;
use core::sync::atomic::{AtomicU64, Ordering};

/// Error indicating that a mesh could not be created from the given buffers.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A mesh must contain at least one vertex.
    #[error("A mesh must contain at least one vertex.")]
    EmptyVertices,
    /// A mesh must contain at least one triangle.
    #[error("A mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("The triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
}

/// A process-unique identifier of a [`Mesh`].
///
/// Two meshes created separately never share an identifier, even if their geometry is equal.
/// Clones of a mesh keep the identifier of the original.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshId(u64);

impl MeshId {
    fn next() -> Self {
        static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(0);
        MeshId(NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw value of this identifier.
    #[inline]
    pub fn into_raw(self) -> u64 {
        self.0
    }
}

/// A triangle mesh, given by a vertex buffer and an index buffer.
///
/// Its local-space bounds are computed once at creation. They cover every vertex of the
/// buffer, including vertices no triangle references.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    id: MeshId,
    vertices: Vec<Point>,
    indices: Vec<[u32; 3]>,
    local_aabb: Aabb,
    local_bounding_sphere: BoundingSphere,
}

impl Mesh {
    /// Creates a new mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point>, indices: Vec<[u32; 3]>) -> Result<Self, MeshBuilderError> {
        if vertices.is_empty() {
            return Err(MeshBuilderError::EmptyVertices);
        }

        if indices.is_empty() {
            return Err(MeshBuilderError::EmptyIndices);
        }

        let num_vertices = vertices.len() as u32;

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().copied().find(|i| *i >= num_vertices) {
                return Err(MeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    index,
                    num_vertices,
                });
            }
        }

        let local_aabb = point_cloud_aabb(&vertices);
        let local_bounding_sphere =
            point_cloud_bounding_sphere_with_center(&vertices, local_aabb.center());

        Ok(Self {
            id: MeshId::next(),
            vertices,
            indices,
            local_aabb,
            local_bounding_sphere,
        })
    }

    /// The identifier of this mesh.
    #[inline]
    pub fn id(&self) -> MeshId {
        self.id
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The local-space axis-aligned bounds of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The local-space bounding sphere of this mesh, centered at the center of its bounds.
    #[inline]
    pub fn local_bounding_sphere(&self) -> &BoundingSphere {
        &self.local_bounding_sphere
    }
}
