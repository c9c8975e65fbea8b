//! Binary heap with externally evaluated keys.
//!
//! Search nodes live in an arena and the heap only stores their ids, so the
//! ordering key (distance or score) is read through a key function on every
//! operation. Keys may be mutated between operations; each insert re-sifts
//! the whole array, which restores heap order no matter which stored keys
//! changed in the meantime.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which end of the ordering [`PriorityHeap::pop_by`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapMode {
    /// Smallest key first.
    #[default]
    Min,
    /// Largest key first.
    Max,
}

impl HeapMode {
    /// Whether a key `a` must sit above a key `b`.
    #[inline]
    fn before(self, a: f64, b: f64) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }
}

impl FromStr for HeapMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(ConfigError::InvalidHeapMode(s.to_string())),
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

/// Parent of array index `i`, written as `ceil(i / 2) - 1`.
///
/// For every `i > 0` this equals the textbook `(i - 1) / 2`.
#[inline]
fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some(i.div_ceil(2) - 1)
    }
}

/// A binary heap over items whose keys are looked up on demand.
#[derive(Debug, Clone, Default)]
pub struct PriorityHeap<T> {
    items: Vec<T>,
    mode: HeapMode,
}

impl<T> PriorityHeap<T> {
    pub fn new(mode: HeapMode) -> Self {
        Self {
            items: Vec::new(),
            mode,
        }
    }

    /// A heap that pops the smallest key first.
    pub fn min() -> Self {
        Self::new(HeapMode::Min)
    }

    /// A heap that pops the largest key first.
    pub fn max() -> Self {
        Self::new(HeapMode::Max)
    }

    #[inline]
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The root item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Items in backing-array order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append `item` and re-sift the whole heap.
    pub fn insert_by<K>(&mut self, item: T, key: K)
    where
        K: Fn(&T) -> f64,
    {
        self.items.push(item);
        if self.items.len() > 1 {
            self.heapify_by(key);
        }
    }

    /// Remove and return the root, or `None` if the heap is empty.
    pub fn pop_by<K>(&mut self, key: K) -> Option<T>
    where
        K: Fn(&T) -> f64,
    {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let root = self.items.pop();
        self.heapify_by(key);
        root
    }

    /// Restore heap order from scratch, sifting down from the last parent
    /// to the root. Call after keys of stored items changed.
    pub fn heapify_by<K>(&mut self, key: K)
    where
        K: Fn(&T) -> f64,
    {
        let Some(end) = self.items.len().checked_sub(1) else {
            return;
        };
        let Some(last_parent) = parent(end) else {
            return;
        };
        for i in (0..=last_parent).rev() {
            self.sift_down(i, end, &key);
        }
    }

    /// Whether every item satisfies the heap property under `key`.
    pub fn is_heap_by<K>(&self, key: K) -> bool
    where
        K: Fn(&T) -> f64,
    {
        (1..self.items.len()).all(|i| match parent(i) {
            Some(p) => !self.mode.before(key(&self.items[i]), key(&self.items[p])),
            None => true,
        })
    }

    fn sift_down<K>(&mut self, i: usize, end: usize, key: &K)
    where
        K: Fn(&T) -> f64,
    {
        let mut root = i;
        while root * 2 + 1 <= end {
            let l = root * 2 + 1;
            let r = l + 1;
            // Ties go to the right child.
            let mut child = l;
            if r <= end && !self.mode.before(key(&self.items[l]), key(&self.items[r])) {
                child = r;
            }
            if self.mode.before(key(&self.items[child]), key(&self.items[root])) {
                self.items.swap(child, root);
                root = child;
            } else {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{RngExt, SeedableRng};

    fn drain(heap: &mut PriorityHeap<f64>) -> Vec<f64> {
        let mut out = Vec::new();
        while let Some(v) = heap.pop_by(|v| *v) {
            out.push(v);
        }
        out
    }

    #[test]
    fn parent_matches_textbook_formula() {
        assert_eq!(parent(0), None);
        for i in 1..1000 {
            assert_eq!(parent(i), Some((i - 1) / 2));
        }
    }

    #[test]
    fn min_heap_pops_ascending() {
        let mut heap = PriorityHeap::min();
        for v in [5.0, 1.0, 4.0, 2.0, 3.0] {
            heap.insert_by(v, |v| *v);
        }
        assert_eq!(heap.peek(), Some(&1.0));
        assert_eq!(drain(&mut heap), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn max_heap_pops_descending() {
        let mut heap = PriorityHeap::max();
        for v in [5.0, 1.0, 4.0, 2.0, 3.0] {
            heap.insert_by(v, |v| *v);
        }
        assert_eq!(heap.peek(), Some(&5.0));
        assert_eq!(drain(&mut heap), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn empty_heap() {
        let mut heap: PriorityHeap<f64> = PriorityHeap::default();
        assert_eq!(heap.mode(), HeapMode::Min);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop_by(|v| *v), None);
    }

    #[test]
    fn infinite_keys_sink() {
        let mut heap = PriorityHeap::min();
        for v in [f64::INFINITY, 0.0, f64::INFINITY, 2.5] {
            heap.insert_by(v, |v| *v);
        }
        assert_eq!(drain(&mut heap), vec![0.0, 2.5, f64::INFINITY, f64::INFINITY]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut heap = PriorityHeap::min();
        heap.insert_by(1.0, |v| *v);
        heap.insert_by(2.0, |v| *v);
        heap.clear();
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.pop_by(|v| *v), None);
    }

    #[test]
    fn random_sequences_respect_order() {
        let mut rng = StdRng::seed_from_u64(7);
        for mode in [HeapMode::Min, HeapMode::Max] {
            let mut heap = PriorityHeap::new(mode);
            let mut shadow: Vec<f64> = Vec::new();
            for _ in 0..500 {
                if rng.random_range(0..3u32) > 0 {
                    let v = rng.random_range(0..50i32) as f64;
                    heap.insert_by(v, |v| *v);
                    shadow.push(v);
                } else {
                    let popped = heap.pop_by(|v| *v);
                    let expected = match mode {
                        HeapMode::Min => shadow.iter().copied().reduce(f64::min),
                        HeapMode::Max => shadow.iter().copied().reduce(f64::max),
                    };
                    assert_eq!(popped, expected);
                    if let Some(v) = popped {
                        let at = shadow.iter().position(|s| *s == v).unwrap();
                        shadow.swap_remove(at);
                    }
                }
                assert!(heap.is_heap_by(|v| *v));
            }
        }
    }

    #[test]
    fn reheapify_after_external_key_mutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut keys: Vec<f64> = (0..32).map(|k| k as f64).collect();
            let mut heap = PriorityHeap::min();
            for id in 0..keys.len() {
                heap.insert_by(id, |i| keys[*i]);
            }

            // Relaxation lowers keys in place behind the heap's back.
            let mut ids: Vec<usize> = (0..keys.len()).collect();
            ids.shuffle(&mut rng);
            for &id in ids.iter().take(8) {
                keys[id] = rng.random_range(-10.0..10.0);
            }
            heap.heapify_by(|i| keys[*i]);
            assert!(heap.is_heap_by(|i| keys[*i]));

            let mut last = f64::NEG_INFINITY;
            while let Some(id) = heap.pop_by(|i| keys[*i]) {
                assert!(keys[id] >= last);
                last = keys[id];
            }
        }
    }

    #[test]
    fn insert_repairs_mutated_keys() {
        let mut keys = vec![3.0, 4.0, 5.0];
        let mut heap = PriorityHeap::min();
        for id in 0..3 {
            heap.insert_by(id, |i| keys[*i]);
        }
        keys[2] = 0.5;
        keys.push(10.0);
        heap.insert_by(3, |i| keys[*i]);
        assert_eq!(heap.pop_by(|i| keys[*i]), Some(2));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("MIN".parse::<HeapMode>().unwrap(), HeapMode::Min);
        assert_eq!("max".parse::<HeapMode>().unwrap(), HeapMode::Max);
        assert_eq!(
            "median".parse::<HeapMode>().unwrap_err(),
            ConfigError::InvalidHeapMode("median".to_string())
        );
        assert_eq!(HeapMode::Max.to_string(), "max");
    }
}
