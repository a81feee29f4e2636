//! Incremental dedup hash set mapping payload bytes to small integer ids.
//!
//! `IndexSet` already does exactly the job §4.3 describes: `insert_full`
//! returns the existing index (and does not insert) for a key that is
//! already present, or inserts the key and returns its fresh index
//! (== insertion order == the next available id) otherwise. That removes
//! the need to track a separate `next_available_id` counter by hand.

use ahash::AHasher;
use indexmap::IndexSet;
use std::hash::BuildHasherDefault;

pub struct DedupSet {
    set: IndexSet<Box<[u8]>, BuildHasherDefault<AHasher>>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self { set: IndexSet::with_hasher(BuildHasherDefault::default()) }
    }

    /// Inserts `key`, returning its id and whether this was a first sighting.
    pub fn insert(&mut self, key: &[u8]) -> (u32, bool) {
        let (index, inserted) = self.set.insert_full(key.into());
        (index as u32, inserted)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Default for DedupSet {
    fn default() -> Self {
        Self::new()
    }
}
