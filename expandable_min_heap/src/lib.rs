//! This is minimum priority queue with interchangeable storage strategies.
//!
//! Every strategy implements the [`MinHeap`] trait,
//! so they can replace each other without changes in calling code.
//! They differ only in how nodes are laid out in the shared expandable array
//! and therefore in cost of operations:
//!
//! | Strategy                | insert   | extract_min | peek_min | build      |
//! |-------------------------|----------|-------------|----------|------------|
//! | [`ClassicMinHeap`]      | O(log n) | O(log n)    | O(1)     | O(n)       |
//! | [`SortedListMinHeap`]   | O(n)     | O(1)        | O(1)     | O(n log n) |
//! | [`UnsortedListMinHeap`] | O(1)     | O(n)        | O(n)     | O(n)       |
//!
//! Each entry is a [`HeapNode`] holding payload, `f64` key and its current slot.
//! Keys which differ by less than [`numeric::EPSILON`] are considered equal.
//!
//! Popping returns node with the smallest key.
//! Asking an empty heap for its minimum returns [`HeapError::EmptyCollection`].
//!
//! # Examples
//!
//! Scheduling jobs by deadline with a strategy chosen at runtime:
//!
//! ```
//! use expandable_min_heap::{HeapKind, MinHeap};
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//! }
//!
//! fn run_order(kind: HeapKind) -> Vec<&'static str> {
//!     let mut jobs = kind.instantiate(16);
//!     jobs.build(
//!         vec![Job { name: "backup" }, Job { name: "deploy" }, Job { name: "report" }],
//!         &[12.5, 3.0, 7.75],
//!     );
//!     jobs.push(Job { name: "hotfix" }, 0.5);
//!
//!     let mut order = Vec::with_capacity(jobs.len());
//!     while let Ok(node) = jobs.extract_min() {
//!         order.push(node.into_data().name);
//!     }
//!     order
//! }
//!
//! for kind in HeapKind::ALL {
//!     assert_eq!(run_order(kind), ["hotfix", "deploy", "report", "backup"]);
//! }
//! ```
//!

mod classic_min_heap;
mod expandable_storage;
mod heap_node;
mod min_heap;
pub mod numeric;
mod sorted_list_min_heap;
mod unsorted_list_min_heap;

pub use crate::classic_min_heap::ClassicMinHeap;
pub use crate::expandable_storage::DEFAULT_CAPACITY;
pub use crate::heap_node::HeapNode;
pub use crate::min_heap::{HeapError, HeapKind, IntoSortedIter, MinHeap, UnknownHeapKindError};
pub use crate::sorted_list_min_heap::SortedListMinHeap;
pub use crate::unsorted_list_min_heap::UnsortedListMinHeap;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
