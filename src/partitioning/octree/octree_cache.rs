use super::{OctreeBuilder, OctreeNodes};
use crate::shape::{Mesh, MeshId};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// A cache of the octrees built for meshes, keyed by mesh identity and subdivision depth.
///
/// The first request for a given mesh and depth builds the canonical octree of that mesh.
/// Every request, including the first, receives its own independent copy of the canonical
/// octree, so moving one body never affects another body sharing the same mesh.
#[derive(Clone, Debug, Default)]
pub struct OctreeModelCache {
    builder: OctreeBuilder,
    models: HashMap<(MeshId, usize), OctreeNodes>,
}

impl OctreeModelCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the octree of `mesh` subdivided into `depth` levels, building and
    /// caching it first if needed.
    ///
    /// Only the root and the nodes touching the mesh are copied.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn checkout(&mut self, mesh: &Mesh, depth: usize) -> OctreeNodes {
        let builder = &mut self.builder;
        let model = match self.models.entry((mesh.id(), depth)) {
            Entry::Occupied(entry) => {
                log::trace!("Reusing the cached octree of depth {} for {:?}.", depth, mesh.id());
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                log::debug!(
                    "No cached octree of depth {} for {:?}, building it.",
                    depth,
                    mesh.id()
                );
                entry.insert(builder.build(mesh, depth))
            }
        };

        model.valid_instance()
    }

    /// The canonical octree built for `mesh` at `depth`, if it has been built already.
    pub fn get(&self, mesh: &Mesh, depth: usize) -> Option<&OctreeNodes> {
        self.models.get(&(mesh.id(), depth))
    }

    /// Has the octree of `mesh` at `depth` been built already?
    pub fn contains(&self, mesh: &Mesh, depth: usize) -> bool {
        self.models.contains_key(&(mesh.id(), depth))
    }

    /// The number of cached octrees.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Is this cache empty?
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Drops every cached octree.
    ///
    /// Octrees already checked out are unaffected.
    pub fn clear(&mut self) {
        self.models.clear();
    }
}
