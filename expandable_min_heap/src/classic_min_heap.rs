use std::fmt::Debug;
use std::iter::FromIterator;

use crate::expandable_storage::{ExpandableStorage, DEFAULT_CAPACITY};
use crate::heap_node::HeapNode;
use crate::min_heap::{log_build_input, HeapError, IntoSortedIter, MinHeap};

/// Binary min heap stored in an array.
///
/// Children of slot `i` live in slots `2i + 1` and `2i + 2`.
/// Every node has key less or equal to keys of its children.
///
/// Insert and extract are ***O(log n)***, peek is ***O(1)***,
/// bulk [`build`] is ***O(n)***.
///
/// [`build`]: trait.MinHeap.html#method.build
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{ClassicMinHeap, MinHeap};
///
/// let mut heap = ClassicMinHeap::new();
/// heap.build(vec![10, 11, 12], &[3.0, 1.0, 2.0]);
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.peek_min().unwrap().data(), &11);
/// assert_eq!(heap.extract_min().unwrap().into_data(), 11);
/// assert_eq!(heap.extract_min().unwrap().into_data(), 12);
/// assert_eq!(heap.extract_min().unwrap().into_data(), 10);
/// assert!(heap.extract_min().is_err());
/// ```
pub struct ClassicMinHeap<T> {
    storage: ExpandableStorage<T>,
}

impl<T> ClassicMinHeap<T> {
    /// Creates an empty heap with baseline capacity of
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap which can hold `capacity` nodes without reallocation.
    /// `clear` returns the heap to this capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: ExpandableStorage::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Reserves space for at least `additional` new nodes.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Iterates nodes in storage (level) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode<T>> {
        self.storage.as_slice().iter()
    }

    #[inline(always)]
    fn exchange(&mut self, pos1: usize, pos2: usize) {
        self.storage.swap(pos1, pos2);
    }

    fn swim(&mut self, position: usize) {
        debug_assert!(position < self.storage.len(), "Out of index in swim");
        let mut position = position;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.storage.compare(position, parent_pos).is_lt() {
                self.exchange(parent_pos, position);
                position = parent_pos;
            } else {
                break;
            }
        }
    }

    fn sink(&mut self, position: usize) {
        debug_assert!(position < self.storage.len(), "Out of index in sink");
        let len = self.storage.len();
        let mut position = position;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= len {
                    break;
                }
                if child2 >= len || self.storage.compare(child1, child2).is_le() {
                    child1
                } else {
                    child2
                }
            };

            if self.storage.compare(min_child_idx, position).is_lt() {
                self.exchange(position, min_child_idx);
                position = min_child_idx;
            } else {
                break;
            }
        }
    }
}

impl<T> MinHeap<T> for ClassicMinHeap<T> {
    /// Places all pairs and sinks every internal node bottom-up.
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    fn build(&mut self, values: Vec<T>, keys: &[f64]) {
        log_build_input(values.len(), keys.len());
        let len = self.storage.load(values, keys);
        for position in (0..len / 2).rev() {
            self.sink(position);
        }
    }

    /// ### Time complexity
    ///
    /// ***O(log n)***, or ***O(n)*** when storage grows.
    fn insert(&mut self, node: HeapNode<T>) {
        let position = self.storage.push_back(node);
        self.swim(position);
    }

    /// ### Time complexity
    ///
    /// ***O(log n)***
    fn extract_min(&mut self) -> Result<HeapNode<T>, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::EmptyCollection);
        }
        let last = self.storage.len() - 1;
        self.exchange(0, last);
        let result = self
            .storage
            .pop_back()
            .ok_or(HeapError::EmptyCollection)?;
        if !self.storage.is_empty() {
            self.sink(0);
        }
        Ok(result)
    }

    #[inline]
    fn peek_min(&self) -> Result<&HeapNode<T>, HeapError> {
        self.storage.get(0).ok_or(HeapError::EmptyCollection)
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.storage.clear();
    }
}

// Default implementations

impl<T> Default for ClassicMinHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ClassicMinHeap<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T: Debug> Debug for ClassicMinHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.storage.fmt(f)
    }
}

impl<T> FromIterator<(T, f64)> for ClassicMinHeap<T> {
    /// Collects pairs with a single ***O(n)*** build.
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let (values, keys): (Vec<T>, Vec<f64>) = iter.into_iter().unzip();
        let mut heap = Self::new();
        heap.build(values, &keys);
        heap
    }
}

impl<T> IntoIterator for ClassicMinHeap<T> {
    type Item = HeapNode<T>;
    type IntoIter = IntoSortedIter<T, Self>;

    /// Make iterator that return nodes in ascending key order.
    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}
