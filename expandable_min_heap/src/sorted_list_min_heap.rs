use std::fmt::Debug;
use std::iter::FromIterator;

use crate::expandable_storage::{ExpandableStorage, DEFAULT_CAPACITY};
use crate::heap_node::HeapNode;
use crate::min_heap::{log_build_input, HeapError, IntoSortedIter, MinHeap};

/// Min heap kept as an array sorted by descending key.
///
/// The minimum sits in the last slot, so peek and extract are ***O(1)***
/// while insert shifts up to ***n*** nodes.
/// Among keys equal within epsilon, later inserted nodes are extracted first.
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{MinHeap, SortedListMinHeap};
///
/// let mut heap = SortedListMinHeap::new();
/// heap.push("b", 2.0);
/// heap.push("c", 3.0);
/// heap.push("a", 1.0);
///
/// // Storage holds descending keys
/// let keys: Vec<f64> = heap.iter().map(|n| n.key()).collect();
/// assert_eq!(keys, [3.0, 2.0, 1.0]);
///
/// assert_eq!(heap.extract_min().unwrap().into_data(), "a");
/// assert_eq!(heap.peek_min().unwrap().data(), &"b");
/// ```
pub struct SortedListMinHeap<T> {
    storage: ExpandableStorage<T>,
}

impl<T> SortedListMinHeap<T> {
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

    /// Iterates nodes from the biggest key to the smallest.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode<T>> {
        self.storage.as_slice().iter()
    }
}

impl<T> MinHeap<T> for SortedListMinHeap<T> {
    /// Places all pairs and sorts them once.
    /// Order among keys equal within epsilon is unspecified.
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)***
    fn build(&mut self, values: Vec<T>, keys: &[f64]) {
        log_build_input(values.len(), keys.len());
        self.storage.load(values, keys);
        // Exact order is a refinement of the epsilon one and is total
        self.storage.sort_by(|a, b| b.key().total_cmp(&a.key()));
    }

    /// ### Time complexity
    ///
    /// ***O(n)***
    fn insert(&mut self, node: HeapNode<T>) {
        let nodes = self.storage.as_slice();
        let mut position = nodes.len();
        while position > 0 && nodes[position - 1].cmp_key(&node).is_lt() {
            position -= 1;
        }
        self.storage.insert_at(position, node);
    }

    /// ### Time complexity
    ///
    /// ***O(1)***
    #[inline]
    fn extract_min(&mut self) -> Result<HeapNode<T>, HeapError> {
        self.storage.pop_back().ok_or(HeapError::EmptyCollection)
    }

    #[inline]
    fn peek_min(&self) -> Result<&HeapNode<T>, HeapError> {
        self.storage.last().ok_or(HeapError::EmptyCollection)
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

impl<T> Default for SortedListMinHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedListMinHeap<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T: Debug> Debug for SortedListMinHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.storage.fmt(f)
    }
}

impl<T> FromIterator<(T, f64)> for SortedListMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let (values, keys): (Vec<T>, Vec<f64>) = iter.into_iter().unzip();
        let mut heap = Self::new();
        heap.build(values, &keys);
        heap
    }
}

impl<T> IntoIterator for SortedListMinHeap<T> {
    type Item = HeapNode<T>;
    type IntoIter = IntoSortedIter<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted_descending<T>(heap: &SortedListMinHeap<T>) -> bool {
        let nodes = heap.storage.as_slice();
        nodes.iter().enumerate().all(|(i, n)| n.index() == i)
            && nodes.windows(2).all(|w| !w[0].cmp_key(&w[1]).is_lt())
    }

    #[test]
    fn test_insert_keeps_order() {
        let items = [
            2, 3, 21, 22, 25, 29, 36, 90, 89, 88, 87, 83, 48, 50, 52, 69, 65, 55, 73, 75, 76, -53,
            78, 81, -45, -41, 91, -34, -33, -31, -27, -22, -19, -8, -5, -3,
        ];
        let mut heap = SortedListMinHeap::new();
        for (i, &x) in items.iter().enumerate() {
            heap.push(x, x as f64);
            assert_eq!(heap.len(), i + 1);
            assert!(is_sorted_descending(&heap), "Invalid after pushing {}", x);
        }
        let mut sorted_items = items;
        sorted_items.sort_unstable();
        for &x in sorted_items.iter() {
            assert_eq!(heap.peek_min().unwrap().data(), &x);
            assert_eq!(heap.extract_min().unwrap().into_data(), x);
            assert!(is_sorted_descending(&heap));
        }
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyCollection));
        assert_eq!(heap.peek_min(), Err(HeapError::EmptyCollection));
    }

    #[test]
    fn test_build_sorts() {
        let keys = [0.5, -2.0, 7.25, 3.0, 3.0, 1.0e-7, 0.0, 100.0];
        let mut heap = SortedListMinHeap::new();
        heap.push(99, 0.1);
        heap.build((0..10).collect(), &keys);
        assert_eq!(heap.len(), keys.len());
        assert!(is_sorted_descending(&heap));
        assert_eq!(heap.peek_min().unwrap().key(), -2.0);
        let order: Vec<usize> = heap.into_iter().map(HeapNode::into_data).collect();
        assert_eq!(order[0], 1);
        assert_eq!(order[7], 7);
    }

    #[test]
    fn test_ties_are_lifo() {
        let mut heap = SortedListMinHeap::new();
        heap.push("first", 5.0);
        heap.push("second", 5.0000001);
        heap.push("third", 4.9999999);
        assert!(is_sorted_descending(&heap));
        assert_eq!(heap.extract_min().unwrap().into_data(), "third");
        assert_eq!(heap.extract_min().unwrap().into_data(), "second");
        assert_eq!(heap.extract_min().unwrap().into_data(), "first");
    }

    #[test]
    fn test_clear() {
        let mut heap: SortedListMinHeap<u8> = (0..30u8).map(|x| (x, x as f64)).collect();
        assert_eq!(heap.len(), 30);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
        heap.push(1, 1.0);
        assert_eq!(heap.peek_min().unwrap().index(), 0);
    }
}
