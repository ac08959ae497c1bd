// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// A key that can be compared against a stored ID without owning one, so that lookups don't
/// have to allocate.
pub(crate) trait LookupKey<ID> {
    fn eq(&self, other: &ID) -> bool;
    fn to_id(self) -> ID;
}

#[derive(Debug)]
struct Entry<ID, T> {
    epoch: u64,
    id: ID,
    data: T,
}

/// A least-recently-used cache with a linear scan over its entries.
///
/// Meant for a handful of entries.
#[derive(Debug)]
pub(crate) struct LruCache<ID, T> {
    entries: Vec<Entry<ID, T>>,
    epoch: u64,
    max_entries: usize,
}

impl<ID, T> LruCache<ID, T> {
    pub(crate) fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Finds the entry for `id`, creating it with `make_data` if missing, and returns its slot.
    ///
    /// The slot stays valid until the next call that creates an entry.
    pub(crate) fn slot(
        &mut self,
        id: impl LookupKey<ID>,
        make_data: impl FnOnce() -> T,
    ) -> usize {
        let (found, index) = self.find_entry(id, make_data);
        if !found {
            self.epoch += 1;
        }
        self.entries[index].epoch = self.epoch;
        index
    }

    /// The data in `slot`.
    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.entries.get_mut(slot).map(|entry| &mut entry.data)
    }

    fn find_entry(
        &mut self,
        id: impl LookupKey<ID>,
        make_data: impl FnOnce() -> T,
    ) -> (bool, usize) {
        let epoch = self.epoch;
        let mut oldest_epoch = epoch;
        let mut oldest_index = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if id.eq(&entry.id) {
                return (true, i);
            }
            if entry.epoch < oldest_epoch {
                oldest_epoch = entry.epoch;
                oldest_index = i;
            }
        }
        let entry = Entry {
            epoch,
            id: id.to_id(),
            data: make_data(),
        };
        if self.entries.len() < self.max_entries {
            self.entries.push(entry);
            (false, self.entries.len() - 1)
        } else {
            self.entries[oldest_index] = entry;
            (false, oldest_index)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::{LookupKey, LruCache};

    #[derive(Debug, PartialEq)]
    struct Family(String);

    struct FamilyName<'a>(&'a str);

    impl LookupKey<Family> for FamilyName<'_> {
        fn eq(&self, other: &Family) -> bool {
            self.0 == other.0
        }

        fn to_id(self) -> Family {
            Family(self.0.to_string())
        }
    }

    #[test]
    fn hit_does_not_rebuild() {
        let mut cache = LruCache::new(3);
        let slot = cache.slot(FamilyName("serif"), || 1);
        assert_eq!(cache.get_mut(slot).copied(), Some(1));
        let hit = cache.slot(FamilyName("serif"), || panic!("rebuilt a cached entry"));
        assert_eq!(hit, slot);
        if let Some(value) = cache.get_mut(hit) {
            *value += 1;
        }
        let slot = cache.slot(FamilyName("serif"), || 0);
        assert_eq!(cache.get_mut(slot).copied(), Some(2));
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn slots_are_stable_without_inserts() {
        let mut cache = LruCache::new(2);
        let serif = cache.slot(FamilyName("serif"), || "serif");
        let sans = cache.slot(FamilyName("sans"), || "sans");
        assert_ne!(serif, sans);
        assert_eq!(cache.slot(FamilyName("serif"), || "x"), serif);
        assert_eq!(cache.get_mut(sans).map(|s| *s), Some("sans"));
        assert_eq!(cache.epoch, 2);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::new(3);
        cache.slot(FamilyName("serif"), || 1);
        cache.slot(FamilyName("sans"), || 2);
        cache.slot(FamilyName("mono"), || 3);
        cache.slot(FamilyName("serif"), || panic!("serif was evicted early"));

        let emoji = cache.slot(FamilyName("emoji"), || 4);
        assert_eq!(emoji, 1, "emoji should take the slot of sans");

        let serif = cache.slot(FamilyName("serif"), || panic!("serif was evicted"));
        assert_eq!(cache.get_mut(serif).copied(), Some(1));
        let mut rebuilt = false;
        cache.slot(FamilyName("sans"), || {
            rebuilt = true;
            20
        });
        assert!(rebuilt, "sans should have been evicted");
    }
}
