use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::heap_node::HeapNode;
use crate::{ClassicMinHeap, SortedListMinHeap, UnsortedListMinHeap};

/// Operations shared by every min heap strategy.
///
/// Smaller keys have more priority.
/// Keys closer than [`EPSILON`] are treated as equal,
/// so extraction order between them is unspecified.
///
/// It is logic error to use NaN as a key.
///
/// [`EPSILON`]: crate::numeric::EPSILON
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{ClassicMinHeap, MinHeap, SortedListMinHeap, UnsortedListMinHeap};
///
/// fn drain<H: MinHeap<i32>>(mut heap: H) -> Vec<i32> {
///     heap.build(vec![10, 11, 12], &[3.0, 1.0, 2.0]);
///     let mut res = Vec::new();
///     while let Ok(node) = heap.extract_min() {
///         res.push(node.into_data());
///     }
///     res
/// }
///
/// assert_eq!(drain(ClassicMinHeap::new()), [11, 12, 10]);
/// assert_eq!(drain(SortedListMinHeap::new()), [11, 12, 10]);
/// assert_eq!(drain(UnsortedListMinHeap::new()), [11, 12, 10]);
/// ```
pub trait MinHeap<T> {
    /// Replaces contents of the heap with pairs of `values` and `keys`.
    ///
    /// Only first `min(values.len(), keys.len())` pairs are used,
    /// the rest of the longer sequence is ignored.
    ///
    /// Default implementation inserts pairs one by one.
    fn build(&mut self, values: Vec<T>, keys: &[f64]) {
        self.clear();
        log_build_input(values.len(), keys.len());
        for (value, &key) in values.into_iter().zip(keys.iter()) {
            self.insert(HeapNode::new(value, key));
        }
    }

    /// Adds node to the heap. Key of node must be already set.
    fn insert(&mut self, node: HeapNode<T>);

    /// Wraps `data` and `key` into a node and inserts it.
    #[inline]
    fn push(&mut self, data: T, key: f64) {
        self.insert(HeapNode::new(data, key));
    }

    /// Removes and returns node with the minimal key.
    fn extract_min(&mut self) -> Result<HeapNode<T>, HeapError>;

    /// Returns node with the minimal key without removing it.
    fn peek_min(&self) -> Result<&HeapNode<T>, HeapError>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    /// Drops all nodes and returns storage to its baseline capacity.
    fn clear(&mut self);
}

pub(crate) fn log_build_input(values: usize, keys: usize) {
    let used = std::cmp::min(values, keys);
    log::debug!("building heap from {} pairs", used);
    if values != keys {
        log::debug!(
            "ignoring {} unmatched trailing {}",
            values.max(keys) - used,
            if values > keys { "values" } else { "keys" }
        );
    }
}

/// Error type for [`extract_min`] and [`peek_min`].
///
/// [`extract_min`]: trait.MinHeap.html#tymethod.extract_min
/// [`peek_min`]: trait.MinHeap.html#tymethod.peek_min
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum HeapError {
    /// Heap has no nodes.
    EmptyCollection,
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            HeapError::EmptyCollection => write!(f, "Requested minimum of empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Available heap strategies.
///
/// ### Examples
///
/// ```
/// use expandable_min_heap::{HeapKind, MinHeap};
///
/// for kind in HeapKind::ALL {
///     let mut heap = kind.instantiate::<&str>(10);
///     heap.push("b", 2.0);
///     heap.push("a", 1.0);
///     assert_eq!(heap.extract_min().unwrap().into_data(), "a");
/// }
///
/// let kind: HeapKind = "sorted".parse().unwrap();
/// assert_eq!(kind, HeapKind::SortedList);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum HeapKind {
    /// [`ClassicMinHeap`], binary heap.
    Classic,
    /// [`SortedListMinHeap`], array in descending key order.
    SortedList,
    /// [`UnsortedListMinHeap`], array in insertion order.
    UnsortedList,
}

impl HeapKind {
    pub const ALL: [HeapKind; 3] = [
        HeapKind::Classic,
        HeapKind::SortedList,
        HeapKind::UnsortedList,
    ];

    /// Creates an empty heap of this kind with the given baseline capacity.
    pub fn instantiate<'a, T: 'a>(self, capacity: usize) -> Box<dyn MinHeap<T> + 'a> {
        match self {
            HeapKind::Classic => Box::new(ClassicMinHeap::with_capacity(capacity)),
            HeapKind::SortedList => Box::new(SortedListMinHeap::with_capacity(capacity)),
            HeapKind::UnsortedList => Box::new(UnsortedListMinHeap::with_capacity(capacity)),
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Classic => "classic",
            HeapKind::SortedList => "sorted",
            HeapKind::UnsortedList => "unsorted",
        }
    }
}

impl Display for HeapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HeapKind {
    type Err = UnknownHeapKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeapKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHeapKindError(s.to_owned()))
    }
}

/// This is error type for parsing [`HeapKind`] from string.
/// It holds the rejected input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownHeapKindError(pub String);

impl Display for UnknownHeapKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Unknown heap kind {:?}, expected one of: classic, sorted, unsorted",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeapKindError {}

/// This is consuming iterator that returns nodes in ascending key order
///
/// ### Time complexity
/// Each step costs one [`extract_min`] of the underlying strategy.
///
/// [`extract_min`]: trait.MinHeap.html#tymethod.extract_min
pub struct IntoSortedIter<T, H: MinHeap<T>> {
    heap: H,
    _marker: PhantomData<T>,
}

impl<T, H: MinHeap<T>> IntoSortedIter<T, H> {
    #[inline]
    pub(crate) fn new(heap: H) -> Self {
        Self {
            heap,
            _marker: PhantomData,
        }
    }
}

impl<T, H: MinHeap<T>> Iterator for IntoSortedIter<T, H> {
    type Item = HeapNode<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap.len()
    }
}

impl<T, H: MinHeap<T>> ExactSizeIterator for IntoSortedIter<T, H> {}

#[cfg(test)]
mod tests {
    use super::{HeapError, HeapKind, UnknownHeapKindError};

    #[test]
    fn test_kind_parse() {
        assert_eq!("classic".parse::<HeapKind>(), Ok(HeapKind::Classic));
        assert_eq!(" Sorted ".parse::<HeapKind>(), Ok(HeapKind::SortedList));
        assert_eq!("UNSORTED".parse::<HeapKind>(), Ok(HeapKind::UnsortedList));
        assert_eq!(
            "fibonacci".parse::<HeapKind>(),
            Err(UnknownHeapKindError("fibonacci".to_owned()))
        );
        for kind in HeapKind::ALL {
            assert_eq!(kind.to_string().parse::<HeapKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_instantiate_empty() {
        for kind in HeapKind::ALL {
            let mut heap = kind.instantiate::<u8>(4);
            assert!(heap.is_empty());
            assert_eq!(heap.peek_min().err(), Some(HeapError::EmptyCollection));
            assert_eq!(heap.extract_min().err(), Some(HeapError::EmptyCollection));
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeapError::EmptyCollection.to_string(),
            "Requested minimum of empty heap"
        );
    }
}
