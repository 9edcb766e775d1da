//! Animation object catalog.
//!
//! The catalog enumerates every animation object id a clip can reference,
//! mapped to the atlas element the object instantiates. Iteration order is
//! pinned at build time (insertion order), so frame snapshots come out
//! byte-for-byte reproducible across runs.

use std::collections::HashMap;

/// One catalog entry: an animation object and the atlas element it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable object identity, unique within a clip.
    pub object_id: u32,
    /// Atlas element the object instantiates. Opaque to frame decoding.
    pub element_ref: u32,
}

/// Insertion-ordered table of the animation objects of one clip.
#[derive(Clone, Debug, Default)]
pub struct ObjectCatalog {
    entries: Vec<CatalogEntry>,
    slots: HashMap<u32, usize>,
}

impl ObjectCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object. A new id is appended, keeping insertion order;
    /// re-inserting an existing id updates its element in place.
    pub fn insert(&mut self, object_id: u32, element_ref: u32) {
        match self.slots.get(&object_id) {
            Some(&slot) => self.entries[slot].element_ref = element_ref,
            None => {
                self.slots.insert(object_id, self.entries.len());
                self.entries.push(CatalogEntry {
                    object_id,
                    element_ref,
                });
            }
        }
    }

    /// Number of objects in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog holds no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether an object id is present.
    #[inline]
    pub fn contains(&self, object_id: u32) -> bool {
        self.slots.contains_key(&object_id)
    }

    /// Slot index of an object id in the pinned iteration order.
    #[inline]
    pub fn slot_of(&self, object_id: u32) -> Option<usize> {
        self.slots.get(&object_id).copied()
    }

    /// All entries in pinned order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Object ids in pinned order.
    pub fn object_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.object_id)
    }
}

impl FromIterator<(u32, u32)> for ObjectCatalog {
    fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (object_id, element_ref) in iter {
            catalog.insert(object_id, element_ref);
        }
        catalog
    }
}
