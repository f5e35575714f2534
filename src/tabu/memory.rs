//! Bounded recency memory.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// FIFO list of at most `capacity` keys with O(1) membership.
///
/// Pushing a key that is already present moves it to the newest position.
/// A capacity of zero remembers nothing.
#[derive(Debug, Clone)]
pub struct TabuMemory<K> {
    queue: VecDeque<K>,
    set: HashSet<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone> TabuMemory<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    /// Records `key` as the most recent entry, evicting the oldest entries
    /// beyond capacity.
    pub fn push(&mut self, key: K) {
        if self.capacity == 0 {
            return;
        }
        if self.set.contains(&key) {
            if let Some(pos) = self.queue.iter().position(|k| k == &key) {
                self.queue.remove(pos);
            }
        } else {
            self.set.insert(key.clone());
        }
        self.queue.push_back(key);

        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.set.clear();
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.queue.iter()
    }
}
