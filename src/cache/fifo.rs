//! Fixed-capacity key-value store with first-in, first-out eviction.
//!
//! Slots form a ring. Each new key takes the slot under the cursor and the
//! cursor advances; once every slot has been used, the next new key
//! overwrites whatever key was inserted longest ago. Updating a resident
//! key rewrites its slot in place and does not move the cursor, so
//! eviction order depends only on when keys were first inserted, never on
//! lookups or updates.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Bounded FIFO memoization cache.
///
/// Not synchronized: one owner mutates it at a time.
///
/// ## Example
///
/// ```
/// use ggp_search::cache::FifoCache;
///
/// let mut cache = FifoCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.insert("a", 10); // update, no eviction
/// cache.insert("c", 3);  // evicts "a", the oldest key
///
/// assert!(!cache.contains(&"a"));
/// assert_eq!(cache.get(&"b"), Some(&2));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
#[derive(Clone, Debug)]
pub struct FifoCache<K, V> {
    /// Ring of slots; `None` until first used.
    slots: Vec<Option<(K, V)>>,

    /// Slot index of every resident key.
    index: FxHashMap<K, usize>,

    /// Slot the next new key goes into.
    cursor: usize,
}

impl<K: Eq + Hash + Clone, V> FifoCache<K, V> {
    /// Capacity used by `Default`.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create an empty cache holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Cache capacity must be positive");

        let mut index = FxHashMap::default();
        index.reserve(capacity);

        Self {
            slots: (0..capacity).map(|_| None).collect(),
            index,
            cursor: 0,
        }
    }

    /// Maximum number of resident keys.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of resident keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if no key is resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check whether a key is resident.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_ref().map(|(_, value)| value)
    }

    /// Look up a key for in-place modification.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_mut().map(|(_, value)| value)
    }

    /// Insert or update a key.
    ///
    /// Returns the entry evicted to make room, if any. Updating a resident
    /// key never evicts.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some((_, resident)) = self.slots[slot].as_mut() {
                *resident = value;
            }
            return None;
        }

        let slot = self.cursor;
        let evicted = self.slots[slot].take();
        if let Some((old_key, _)) = &evicted {
            self.index.remove(old_key);
        }

        self.index.insert(key.clone(), slot);
        self.slots[slot] = Some((key, value));
        self.cursor = (slot + 1) % self.slots.len();

        evicted
    }

    /// Get the value for `key`, inserting `make()` first if it is absent.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        if !self.index.contains_key(&key) {
            self.insert(key.clone(), make());
        }
        let slot = self.index[&key];
        match self.slots[slot].as_mut() {
            Some((_, value)) => value,
            None => unreachable!("indexed slot {slot} is empty"),
        }
    }

    /// Iterate over resident keys. Order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.index.keys()
    }

    /// Iterate over resident entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|(key, value)| (key, value)))
    }

    /// Drop every entry and rewind the cursor.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.index.clear();
        self.cursor = 0;
    }
}

impl<K: Eq + Hash + Clone, V> Default for FifoCache<K, V> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
