use core::num::NonZeroUsize;

use crate::key::KeyMap;
use crate::{ScrollPosition, StoreKey};

#[derive(Clone, Copy, Debug)]
struct Slot {
    position: ScrollPosition,
    /// Write order, used only for LRU eviction.
    stamp: u64,
}

/// In-memory scroll positions for one application session.
///
/// The store grows as navigations occur and is never pruned for correctness: its size is
/// bounded by how many history entries a user can reach in one session. Keys that are no
/// longer reachable by back/forward are harmless orphans.
///
/// [`PositionStore::with_capacity`] adds an LRU cap. It only bounds memory; an evicted
/// entry falls back to top on traversal like any entry without a record.
#[derive(Clone, Debug, Default)]
pub struct PositionStore {
    records: KeyMap<StoreKey, Slot>,
    capacity: Option<NonZeroUsize>,
    next_stamp: u64,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that evicts the least recently written record past `capacity`.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Records `position` under `key`, overwriting any previous record.
    pub fn save(&mut self, key: StoreKey, position: ScrollPosition) {
        let position = position.sanitized();
        let stamp = self.next_stamp;
        self.next_stamp = self.next_stamp.wrapping_add(1);
        rtrace!(key = %key, x = position.x, y = position.y, "PositionStore::save");
        self.records.insert(key, Slot { position, stamp });
        self.evict_over_capacity();
    }

    /// Returns the record for `key`, or `None` if nothing was saved.
    pub fn read(&self, key: &StoreKey) -> Option<ScrollPosition> {
        self.records.get(key).map(|slot| slot.position)
    }

    pub fn contains(&self, key: &StoreKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn remove(&mut self, key: &StoreKey) -> Option<ScrollPosition> {
        self.records.remove(key).map(|slot| slot.position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.next_stamp = 0;
    }

    /// Iterates over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&StoreKey, ScrollPosition)> {
        self.records.iter().map(|(key, slot)| (key, slot.position))
    }

    fn evict_over_capacity(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        while self.records.len() > capacity.get() {
            let Some(oldest) = self
                .records
                .iter()
                .min_by_key(|(_, slot)| slot.stamp)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            rdebug!(key = %oldest, "PositionStore: evicting least recently saved record");
            self.records.remove(&oldest);
        }
    }
}
