use std::cmp::Ordering;
use std::fmt::Debug;
use std::vec::Vec;

use crate::heap_node::HeapNode;

/// Baseline capacity of heaps created by `new()`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Dense array of nodes shared by all strategies.
///
/// Keeps its own logical capacity so growth follows
/// `max(min, capacity * 3 / 2 + 1)` regardless of what the allocator returns.
/// Capacity never shrinks except on `clear`, which returns to the baseline.
pub(crate) struct ExpandableStorage<T> {
    data: Vec<HeapNode<T>>,
    capacity: usize,
    baseline: usize,
}

impl<T> ExpandableStorage<T> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            baseline: capacity,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows storage so it can hold at least `min_capacity` nodes.
    /// Time complexity - O(n) when growing, O(1) otherwise
    pub(crate) fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity {
            return;
        }
        let grown = self.capacity * 3 / 2 + 1;
        let new_capacity = std::cmp::max(grown, min_capacity);
        log::trace!(
            "growing heap storage from {} to {} slots",
            self.capacity,
            new_capacity
        );
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        let required = self
            .len()
            .checked_add(additional)
            .expect("Capacity overflow in reserve");
        self.ensure_capacity(required);
    }

    /// Drops all nodes and returns to the baseline capacity.
    pub(crate) fn clear(&mut self) {
        self.data = Vec::with_capacity(self.baseline);
        self.capacity = self.baseline;
    }

    #[inline(always)]
    pub(crate) fn get(&self, position: usize) -> Option<&HeapNode<T>> {
        self.data.get(position)
    }

    #[inline(always)]
    pub(crate) fn last(&self) -> Option<&HeapNode<T>> {
        self.data.last()
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[HeapNode<T>] {
        &self.data
    }

    /// Appends node to the end and returns its position.
    #[inline(always)]
    pub(crate) fn push_back(&mut self, mut node: HeapNode<T>) -> usize {
        self.ensure_capacity(self.len() + 1);
        let position = self.data.len();
        node.set_index(position);
        self.data.push(node);
        position
    }

    /// Puts node at `position`, shifting the tail right.
    /// Restamps indexes of every moved node.
    pub(crate) fn insert_at(&mut self, position: usize, node: HeapNode<T>) {
        debug_assert!(position <= self.data.len(), "Out of index in insert_at");
        self.ensure_capacity(self.len() + 1);
        self.data.insert(position, node);
        self.restamp_from(position);
    }

    #[inline(always)]
    pub(crate) fn pop_back(&mut self) -> Option<HeapNode<T>> {
        self.data.pop()
    }

    /// Removes node at `position` closing the gap by shifting the tail left.
    ///
    /// Indexes of shifted nodes are left stale,
    /// callers must restamp them if they rely on them.
    pub(crate) fn remove_at(&mut self, position: usize) -> Option<HeapNode<T>> {
        if position >= self.data.len() {
            return None;
        }
        Some(self.data.remove(position))
    }

    /// Swaps two nodes and updates both indexes.
    #[inline(always)]
    pub(crate) fn swap(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        self.data[pos1].set_index(pos1);
        self.data[pos2].set_index(pos2);
    }

    #[inline(always)]
    pub(crate) fn compare(&self, pos1: usize, pos2: usize) -> Ordering {
        self.data[pos1].cmp_key(&self.data[pos2])
    }

    pub(crate) fn restamp_from(&mut self, start: usize) {
        for (i, node) in self.data.iter_mut().enumerate().skip(start) {
            node.set_index(i);
        }
    }

    /// Replaces contents with pairs of `values` and `keys` in given order.
    /// Returns number of loaded nodes.
    pub(crate) fn load(&mut self, values: Vec<T>, keys: &[f64]) -> usize {
        self.clear();
        let count = std::cmp::min(values.len(), keys.len());
        self.ensure_capacity(count);
        self.data.extend(
            values
                .into_iter()
                .zip(keys.iter())
                .enumerate()
                .map(|(i, (value, &key))| {
                    let mut node = HeapNode::new(value, key);
                    node.set_index(i);
                    node
                }),
        );
        count
    }

    /// Sorts nodes with `compare` and restamps all indexes.
    pub(crate) fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&HeapNode<T>, &HeapNode<T>) -> Ordering,
    {
        self.data.sort_by(compare);
        self.restamp_from(0);
    }
}

// Default implementations

impl<T> Default for ExpandableStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: Clone> Clone for ExpandableStorage<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        Self {
            data,
            capacity: self.capacity,
            baseline: self.baseline,
        }
    }
}

/// Dumps `(key, data)` pairs in storage order.
impl<T: Debug> Debug for ExpandableStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for node in self.data.iter() {
            write!(f, "({:?}, {:?})", node.key(), node.data())?;
        }
        write!(f, "]")
    }
}
