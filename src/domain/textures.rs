use std::collections::HashMap;

use super::{Terrain, TexturePack};

/// Maps `(pack, terrain)` to whatever handle the renderer loaded for it.
/// Populated once at startup; the core only ever looks handles up.
pub struct TextureTable<H> {
    handles: HashMap<(TexturePack, Terrain), H>,
}

impl<H> TextureTable<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    pub fn insert(&mut self, pack: TexturePack, terrain: Terrain, handle: H) {
        self.handles.insert((pack, terrain), handle);
    }

    /// Handle for a raw terrain id.
    ///
    /// Ids outside the known terrain set select no texture and return `None`;
    /// callers treat that as "bind nothing" rather than an error.
    pub fn get(&self, pack: TexturePack, terrain_id: i32) -> Option<&H> {
        Terrain::from_id(terrain_id).and_then(|terrain| self.handles.get(&(pack, terrain)))
    }

    /// True once every terrain of every pack has a handle
    pub fn is_complete(&self) -> bool {
        TexturePack::ALL
            .iter()
            .all(|&pack| Terrain::ALL.iter().all(|&t| self.handles.contains_key(&(pack, t))))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for TextureTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
