use std::cmp::Ordering;

use thiserror::Error;

use super::range::RangeCollector;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table capacity of {capacity} entries exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("operation requires a non-empty table")]
    EmptyCollection,

    #[error("ordinal {index} out of range for table of {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// A bounded, array-backed ordered symbol table.
///
/// Keys are held strictly ascending in one vector with the paired values in a
/// second, length-synchronized vector, so every lookup is a binary search and
/// every structural mutation is a shift. Capacity is fixed at construction;
/// inserting a new key into a full table is rejected with
/// [`TableError::CapacityExceeded`] rather than growing silently.
///
/// Lookup misses are reported as `None`, never as errors. Operations with a
/// precondition (`min`, `max`, `select`, the endpoint removals) report its
/// violation through [`TableError`].
///
/// The table is single-threaded by contract: a shift in progress is not
/// atomic, so any cross-thread sharing needs external mutual exclusion.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    keys: Vec<K>,
    vals: Vec<V>,
    capacity: usize,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Create an empty table that can hold at most `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored keys strictly less than `key`.
    ///
    /// For a present key this is its exact position; for an absent key it is
    /// the position an insertion would use to keep the order.
    pub fn rank(&self, key: &K) -> usize {
        let mut lo = 0;
        let mut hi = self.keys.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match key.cmp(&self.keys[mid]) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return mid,
            }
        }
        lo
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let i = self.rank(key);
        if i < self.keys.len() && self.keys[i] == *key {
            Some(&self.vals[i])
        } else {
            None
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let i = self.rank(key);
        i < self.keys.len() && self.keys[i] == *key
    }

    /// Insert `key` with `val`, or overwrite the value of a present key.
    ///
    /// Overwriting never changes the size and is allowed even at capacity;
    /// inserting a new key into a full table fails with
    /// [`TableError::CapacityExceeded`].
    pub fn put(&mut self, key: K, val: V) -> Result<(), TableError> {
        let i = self.rank(&key);
        if i < self.keys.len() && self.keys[i] == key {
            self.vals[i] = val;
            return Ok(());
        }
        if self.keys.len() == self.capacity {
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.keys.insert(i, key);
        self.vals.insert(i, val);
        Ok(())
    }

    /// Remove `key`, returning its value. Absent keys are a `None` no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let i = self.rank(key);
        if i < self.keys.len() && self.keys[i] == *key {
            self.keys.remove(i);
            Some(self.vals.remove(i))
        } else {
            None
        }
    }

    /// Remove and return the smallest key.
    pub fn delete_min(&mut self) -> Result<K, TableError> {
        if self.keys.is_empty() {
            return Err(TableError::EmptyCollection);
        }
        self.vals.remove(0);
        Ok(self.keys.remove(0))
    }

    /// Remove and return the largest key.
    pub fn delete_max(&mut self) -> Result<K, TableError> {
        self.vals.pop();
        self.keys.pop().ok_or(TableError::EmptyCollection)
    }

    pub fn min(&self) -> Result<&K, TableError> {
        self.keys.first().ok_or(TableError::EmptyCollection)
    }

    pub fn max(&self) -> Result<&K, TableError> {
        self.keys.last().ok_or(TableError::EmptyCollection)
    }

    /// Key at ordinal position `k` in sorted order.
    pub fn select(&self, k: usize) -> Result<&K, TableError> {
        self.keys.get(k).ok_or(TableError::OutOfRange {
            index: k,
            len: self.keys.len(),
        })
    }

    /// Largest stored key less than or equal to `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let i = self.rank(key);
        if i < self.keys.len() && self.keys[i] == *key {
            return Some(&self.keys[i]);
        }
        if i == 0 {
            None
        } else {
            Some(&self.keys[i - 1])
        }
    }

    /// Smallest stored key greater than or equal to `key`.
    ///
    /// When `key` exceeds every stored key, `rank` equals the table length
    /// and there is no ceiling; the bounds-checked `get` turns that into
    /// `None` instead of an out-of-range read.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        self.keys.get(self.rank(key))
    }
}

impl<K: Ord + Clone, V> OrderedMap<K, V> {
    /// All stored keys in `[lo, hi]`, ascending, as a fresh single-use
    /// collector. An inverted range (`lo > hi`) or one with no members yields
    /// an empty collector; this never fails.
    ///
    /// The result holds copies of the keys and is independent of the table
    /// once returned.
    pub fn keys(&self, lo: &K, hi: &K) -> RangeCollector<K> {
        let mut collected = RangeCollector::new();
        if lo > hi {
            return collected;
        }
        for key in &self.keys[self.rank(lo)..self.rank(hi)] {
            collected.enqueue(key.clone());
        }
        if self.contains(hi) {
            collected.enqueue(hi.clone());
        }
        collected
    }

    /// Every stored key in ascending order.
    pub fn all_keys(&self) -> RangeCollector<K> {
        let mut collected = RangeCollector::new();
        for key in &self.keys {
            collected.enqueue(key.clone());
        }
        collected
    }
}
