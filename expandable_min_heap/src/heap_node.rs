use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::numeric::compare_keys;

/// Single entry of a min heap: payload, key and current slot.
///
/// The slot index is maintained by the heap that owns the node.
/// For a node that is not in any heap it is meaningless.
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{ClassicMinHeap, HeapNode, MinHeap};
///
/// let mut heap = ClassicMinHeap::new();
/// let mut node = HeapNode::new("task", 0.0);
/// node.set_key(2.5);
/// heap.insert(node);
///
/// let node = heap.extract_min().unwrap();
/// assert_eq!(node.key(), 2.5);
/// assert_eq!(node.into_data(), "task");
/// ```
#[derive(Clone, PartialEq)]
pub struct HeapNode<T> {
    data: T,
    key: f64,
    index: usize,
}

impl<T> HeapNode<T> {
    /// Creates a detached node.
    #[inline]
    pub fn new(data: T, key: f64) -> Self {
        Self {
            data,
            key,
            index: 0,
        }
    }

    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[inline]
    pub fn key(&self) -> f64 {
        self.key
    }

    /// Changes the key of a detached node.
    ///
    /// Keys of nodes inside a heap cannot be changed because
    /// heaps hand out only shared references to their nodes.
    #[inline]
    pub fn set_key(&mut self, key: f64) {
        self.key = key;
    }

    /// Slot of the node in the storage of the heap that holds it.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Compares keys with epsilon tolerance.
    #[inline]
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        compare_keys(self.key, other.key)
    }

    #[inline]
    pub fn into_data(self) -> T {
        self.data
    }

    #[inline]
    pub fn into_parts(self) -> (T, f64) {
        (self.data, self.key)
    }
}

impl<T: Debug> Debug for HeapNode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{key: {:?}, data: {:?}, index: {}}}",
            self.key, &self.data, self.index
        )
    }
}

/// Displays only the key.
impl<T> Display for HeapNode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.key)
    }
}
