//! Array-backed binary heaps for Rust
//!
//! This crate provides one binary heap algorithm over a `Vec<T>`,
//! parameterized by a comparator, in place of separate min/max containers
//! per element type. Min- and max-ordered heaps are the same container with
//! the comparator direction flipped.
//!
//! # Features
//!
//! - **Generic ordering**: any [`compare::Compare`] comparator; [`MinHeap`]
//!   and [`MaxHeap`] aliases cover the natural order of `Ord` types
//! - **O(n) construction**: heapify an arbitrary-order vector via
//!   `From<Vec<T>>` or [`ArrayHeap::from_vec_and_comparator`]
//! - **Remove by index**: [`ArrayHeap::remove`] extracts any element in
//!   O(log n), not just the root
//! - **In-place replace**: [`ArrayHeap::replace`] swaps out the value at an
//!   index and restores order in a single sift pass, cheaper than
//!   remove-then-push
//!
//! Every operation is synchronous and single-threaded; the heap carries no
//! internal locking. Share it across threads only behind external mutual
//! exclusion.
//!
//! # Example
//!
//! ```rust
//! use array_heap::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::from(vec![3u64, 1, 4, 1, 5]);
//! assert_eq!(min.pop(), Some(1));
//!
//! let mut max = MaxHeap::new_max();
//! max.push(3i64);
//! max.push(9);
//! max.push(-2);
//! assert_eq!(max.pop(), Some(9));
//! ```

pub mod binary;

pub use binary::{ArrayHeap, MaxHeap, MinHeap};
