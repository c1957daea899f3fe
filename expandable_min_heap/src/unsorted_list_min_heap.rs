use std::fmt::Debug;
use std::iter::FromIterator;

use crate::expandable_storage::{ExpandableStorage, DEFAULT_CAPACITY};
use crate::heap_node::HeapNode;
use crate::min_heap::{HeapError, IntoSortedIter, MinHeap};

/// Min heap kept as an array in insertion order.
///
/// Insert is ***O(1)***; peek and extract scan all nodes, ***O(n)***.
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{MinHeap, UnsortedListMinHeap};
///
/// let mut heap = UnsortedListMinHeap::with_capacity(10);
/// for x in 0..15 {
///     heap.push(x, (15 - x) as f64);
/// }
/// assert_eq!(heap.len(), 15);
/// assert_eq!(heap.capacity(), 16);
/// assert_eq!(heap.extract_min().unwrap().into_data(), 14);
/// ```
pub struct UnsortedListMinHeap<T> {
    storage: ExpandableStorage<T>,
}

impl<T> UnsortedListMinHeap<T> {
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

    /// Iterates nodes in insertion order, minus extracted ones.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode<T>> {
        self.storage.as_slice().iter()
    }

    /// Position of the first node with minimal key.
    fn min_position(&self) -> Option<usize> {
        let nodes = self.storage.as_slice();
        let mut least = 0;
        for (i, node) in nodes.iter().enumerate().skip(1) {
            if node.cmp_key(&nodes[least]).is_lt() {
                least = i;
            }
        }
        if nodes.is_empty() {
            None
        } else {
            Some(least)
        }
    }
}

impl<T> MinHeap<T> for UnsortedListMinHeap<T> {
    /// ### Time complexity
    ///
    /// ***O(1)***, or ***O(n)*** when storage grows.
    #[inline]
    fn insert(&mut self, node: HeapNode<T>) {
        self.storage.push_back(node);
    }

    /// ### Time complexity
    ///
    /// ***O(n)***
    fn extract_min(&mut self) -> Result<HeapNode<T>, HeapError> {
        let position = self.min_position().ok_or(HeapError::EmptyCollection)?;
        let result = self
            .storage
            .remove_at(position)
            .ok_or(HeapError::EmptyCollection)?;
        self.storage.restamp_from(position);
        Ok(result)
    }

    /// ### Time complexity
    ///
    /// ***O(n)***
    fn peek_min(&self) -> Result<&HeapNode<T>, HeapError> {
        self.min_position()
            .and_then(|position| self.storage.get(position))
            .ok_or(HeapError::EmptyCollection)
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

impl<T> Default for UnsortedListMinHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UnsortedListMinHeap<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T: Debug> Debug for UnsortedListMinHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.storage.fmt(f)
    }
}

impl<T> FromIterator<(T, f64)> for UnsortedListMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let (values, keys): (Vec<T>, Vec<f64>) = iter.into_iter().unzip();
        let mut heap = Self::new();
        heap.build(values, &keys);
        heap
    }
}

impl<T> IntoIterator for UnsortedListMinHeap<T> {
    type Item = HeapNode<T>;
    type IntoIter = IntoSortedIter<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexes_match<T>(heap: &UnsortedListMinHeap<T>) -> bool {
        heap.iter().enumerate().all(|(i, node)| node.index() == i)
    }

    #[test]
    fn test_growth_keeps_elements() {
        let mut heap = UnsortedListMinHeap::with_capacity(10);
        for x in 0..15u32 {
            heap.push(x, x as f64 * 0.5);
            assert!(indexes_match(&heap));
        }
        assert_eq!(heap.len(), 15);
        assert_eq!(heap.capacity(), 16);
        for x in 0..15u32 {
            let node = heap.extract_min().unwrap();
            assert_eq!(node.into_data(), x);
            assert!(indexes_match(&heap));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_from_middle() {
        let mut heap = UnsortedListMinHeap::new();
        heap.build(vec!['d', 'a', 'c', 'b'], &[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(format!("{:?}", heap), "[(4.0, 'd')(1.0, 'a')(3.0, 'c')(2.0, 'b')]");
        assert_eq!(heap.peek_min().unwrap().index(), 1);
        assert_eq!(heap.extract_min().unwrap().into_data(), 'a');
        assert!(indexes_match(&heap));
        assert_eq!(format!("{:?}", heap), "[(4.0, 'd')(3.0, 'c')(2.0, 'b')]");
        assert_eq!(heap.peek_min().unwrap().index(), 2);
    }

    #[test]
    fn test_first_minimum_wins() {
        let mut heap = UnsortedListMinHeap::new();
        heap.push("first", 5.0);
        heap.push("second", 5.0000001);
        heap.push("third", 4.9999999);
        assert_eq!(heap.peek_min().unwrap().data(), &"first");
        assert_eq!(heap.extract_min().unwrap().into_data(), "first");
        assert_eq!(heap.extract_min().unwrap().into_data(), "second");
        assert_eq!(heap.extract_min().unwrap().into_data(), "third");
    }

    #[test]
    fn test_empty() {
        let mut heap = UnsortedListMinHeap::<()>::new();
        assert_eq!(heap.peek_min(), Err(HeapError::EmptyCollection));
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyCollection));
        heap.push((), 0.0);
        heap.clear();
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyCollection));
    }
}
