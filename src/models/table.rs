use crate::models::{NeighborKey, NeighborRecord};
use std::collections::btree_map::{BTreeMap, Entry};

/// Neighbor records keyed by `(address, vrf)`.
///
/// Backed by an ordered map so iteration, and therefore every report, is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborTable {
    neighbors: BTreeMap<NeighborKey, NeighborRecord>,
}

impl NeighborTable {
    pub fn new() -> Self {
        NeighborTable::default()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn get(&self, key: &NeighborKey) -> Option<&NeighborRecord> {
        self.neighbors.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &NeighborKey) -> Option<&mut NeighborRecord> {
        self.neighbors.get_mut(key)
    }

    /// Look up the record for `key`, inserting a fresh one carrying only the address when absent.
    ///
    /// An existing record is returned untouched; callers decide which fields to overwrite.
    pub(crate) fn entry_or_insert(&mut self, key: NeighborKey) -> &mut NeighborRecord {
        match self.neighbors.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let record = NeighborRecord::new(e.key().address.as_str());
                e.insert(record)
            }
        }
    }

    /// Iterate over `(key, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&NeighborKey, &NeighborRecord)> {
        self.neighbors.iter()
    }

    /// Iterate over records in key order.
    pub fn records(&self) -> impl Iterator<Item = &NeighborRecord> {
        self.neighbors.values()
    }
}

impl IntoIterator for NeighborTable {
    type Item = NeighborRecord;
    type IntoIter = std::collections::btree_map::IntoValues<NeighborKey, NeighborRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.neighbors.into_values()
    }
}
