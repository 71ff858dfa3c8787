//! Array-backed binary heap, generic over a comparator
//!
//! [`ArrayHeap`] stores its elements in a plain `Vec<T>` and keeps them in
//! heap order under an injected comparator. The tree structure is implicit
//! in the index arithmetic: for index `i`, the children live at `2i + 1` and
//! `2i + 2` and the parent at `(i - 1) / 2`. There are no node objects and
//! no per-element allocation beyond the vector itself.
//!
//! The comparator decides which of two elements must sit closer to the root.
//! With the default [`Natural`] comparator the heap is a min-heap; reversing
//! it yields a max-heap. The [`MinHeap`] and [`MaxHeap`] aliases name those
//! two instantiations.
//!
//! Beyond the usual push/pop, the heap supports removing an arbitrary
//! element by index ([`remove`](ArrayHeap::remove)) and swapping out the
//! value at an index while restoring order in a single downward-or-upward
//! pass ([`replace`](ArrayHeap::replace)), which is cheaper than a remove
//! followed by a push.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `remove`    | O(log n)   |
//! | `replace`   | O(log n)   |
//! | `peek`/`get`| O(1)       |
//! | `rebuild`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use array_heap::MinHeap;
//!
//! let mut heap = MinHeap::from(vec![3, 1, 4, 1, 5]);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::mem;

use compare::{natural, Compare, Natural, Rev};

/// A binary heap over a `Vec<T>`, ordered by a comparator `C`.
///
/// `cmp.compares_lt(a, b)` is read as "`a` must be closer to the root than
/// `b`". The heap invariant is that no element compares strictly before its
/// parent; equal elements never swap, so no ordering among equal keys is
/// guaranteed.
///
/// The ordering is fixed when the heap is constructed. It is a logic error
/// for the comparator to be inconsistent with a total order, or for it to
/// answer differently for the same pair of elements over time.
///
/// # Example
///
/// ```rust
/// use array_heap::MaxHeap;
///
/// let mut heap = MaxHeap::new_max();
/// heap.push("pear");
/// heap.push("apple");
/// heap.push("quince");
///
/// assert_eq!(heap.pop(), Some("quince"));
/// assert_eq!(heap.pop(), Some("pear"));
/// assert_eq!(heap.pop(), Some("apple"));
/// ```
#[derive(Clone, Debug)]
pub struct ArrayHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

/// A heap whose root is the smallest element by natural order.
pub type MinHeap<T> = ArrayHeap<T, Natural<T>>;

/// A heap whose root is the largest element by natural order.
pub type MaxHeap<T> = ArrayHeap<T, Rev<Natural<T>>>;

impl<T: Ord> MinHeap<T> {
    /// Creates an empty min-heap.
    pub fn new() -> MinHeap<T> {
        Self::with_comparator(natural())
    }

    /// Creates an empty min-heap able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty max-heap.
    pub fn new_max() -> MaxHeap<T> {
        Self::with_comparator(natural().rev())
    }

    /// Creates an empty max-heap able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity_max(capacity: usize) -> MaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural().rev())
    }

    /// Builds a max-heap from a vector in arbitrary order, in O(n).
    pub fn from_vec_max(vec: Vec<T>) -> MaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural().rev())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Builds a min-heap from a vector in arbitrary order, in O(n).
    fn from(vec: Vec<T>) -> MinHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T> + Default> Default for ArrayHeap<T, C> {
    fn default() -> ArrayHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator.
    pub fn with_comparator(cmp: C) -> ArrayHeap<T, C> {
        ArrayHeap { data: Vec::new(), cmp }
    }

    /// Creates an empty heap with the given capacity and comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> ArrayHeap<T, C> {
        ArrayHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from a vector in arbitrary order, in O(n).
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> ArrayHeap<T, C> {
        let mut heap = ArrayHeap { data: vec, cmp };
        heap.rebuild();
        heap
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the root element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the element at `index`, or `None` if out of range.
    ///
    /// Indices are positions in the backing array, not ranks: apart from the
    /// root at index 0, no ordering among positions is implied. Any mutating
    /// operation may relocate arbitrary elements, invalidating previously
    /// observed indices.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Re-establishes heap order over the whole backing array, in O(n).
    ///
    /// Idempotent: on an already ordered heap this performs no swaps. Runs
    /// `sift_down` over every non-leaf index in reverse level order.
    pub fn rebuild(&mut self) {
        let n = self.data.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i, n);
        }
    }

    /// Pushes an element onto the heap.
    ///
    /// O(log n) amortized; the append itself is O(1) amortized.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root element, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let removed = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0, self.data.len());
        }
        Some(removed)
    }

    /// Removes and returns the element at `index`.
    ///
    /// The last element moves into the vacated slot and order is restored
    /// with a single sift pass, so this is O(log n) for any index and O(1)
    /// when `index` is the last position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.data.len(),
            "remove: index {} out of bounds (len {})",
            index,
            self.data.len()
        );
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.fix(index);
        }
        removed
    }

    /// Replaces the element at `index` with `value`, restores heap order,
    /// and returns the previous element.
    ///
    /// Equivalent to, but cheaper than, `remove(index)` followed by
    /// `push(value)`: order is restored with at most one directional
    /// traversal instead of two.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        assert!(
            index < self.data.len(),
            "replace: index {} out of bounds (len {})",
            index,
            self.data.len()
        );
        let old = mem::replace(&mut self.data[index], value);
        self.fix(index);
        old
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing vector in heap-shape order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Restores order after the element at `index` changed: one sift_down,
    /// falling back to sift_up when nothing moved (the element may now be
    /// before its parent instead).
    fn fix(&mut self, index: usize) {
        if !self.sift_down(index, self.data.len()) {
            self.sift_up(index);
        }
    }

    /// Moves the element at `j` toward the root while it compares strictly
    /// before its parent.
    fn sift_up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.cmp.compares_lt(&self.data[j], &self.data[parent]) {
                break;
            }
            self.data.swap(parent, j);
            j = parent;
        }
    }

    /// Moves the element at `start` toward the leaves, always descending
    /// into the child that compares first, within the bound `n`. Returns
    /// whether any swap occurred.
    fn sift_down(&mut self, start: usize, n: usize) -> bool {
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.cmp.compares_lt(&self.data[right], &self.data[left]) {
                child = right;
            }
            if !self.cmp.compares_lt(&self.data[child], &self.data[i]) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
        i > start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_max_ordering() {
        let mut heap = MaxHeap::new_max();

        heap.push("one");
        heap.push("three");
        heap.push("two");

        assert_eq!(heap.peek(), Some(&"two"));
        assert_eq!(heap.pop(), Some("two"));
        assert_eq!(heap.pop(), Some("three"));
        assert_eq!(heap.pop(), Some("one"));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_from_vec_heapifies() {
        let mut heap = MinHeap::from(vec![9, 4, 7, 1, -2, 6, 5]);

        assert_eq!(heap.len(), 7);
        assert_eq!(heap.peek(), Some(&-2));

        let mut out = Vec::new();
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        assert_eq!(out, vec![-2, 1, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut heap = MinHeap::from(vec![5, 3, 8, 1, 9, 2]);
        let before = heap.clone().into_vec();
        heap.rebuild();
        assert_eq!(heap.into_vec(), before);
    }

    #[test]
    fn test_duplicate_elements() {
        let mut heap = MinHeap::new();

        for _ in 0..5 {
            heap.push(1);
        }

        assert_eq!(heap.len(), 5);
        for _ in 0..5 {
            assert_eq!(heap.pop(), Some(1));
        }
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = MinHeap::new();

        for i in 0..100 {
            heap.push(i);
        }
        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MinHeap::new();

        for i in (0..100).rev() {
            heap.push(i);
        }
        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_remove_returns_element_at_index() {
        let mut heap = MinHeap::from(vec![10, 20, 30, 40, 50]);

        let at_two = *heap.get(2).unwrap();
        assert_eq!(heap.remove(2), at_two);
        assert_eq!(heap.len(), 4);

        let mut rest = Vec::new();
        while let Some(x) = heap.pop() {
            rest.push(x);
        }
        let mut expected = vec![10, 20, 30, 40, 50];
        expected.retain(|&x| x != at_two);
        assert_eq!(rest, expected);
    }

    #[test]
    fn test_remove_last_index() {
        let mut heap = MinHeap::from(vec![1, 2, 3]);
        let last = *heap.get(2).unwrap();
        assert_eq!(heap.remove(2), last);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_replace_root() {
        let mut heap = MinHeap::from(vec![1, 5, 10]);
        assert_eq!(heap.replace(0, 7), 1);
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(10));
    }

    #[test]
    fn test_replace_sifts_up() {
        let mut heap = MinHeap::from(vec![1, 5, 10, 8, 6]);
        // Make a leaf the new minimum; it must climb to the root.
        let leaf = heap.len() - 1;
        heap.replace(leaf, 0);
        assert_eq!(heap.peek(), Some(&0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_out_of_range_panics() {
        let mut heap = MinHeap::from(vec![1, 2, 3]);
        heap.remove(3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_on_empty_panics() {
        let mut heap: MinHeap<i64> = MinHeap::new();
        heap.remove(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_replace_out_of_range_panics() {
        let mut heap = MinHeap::from(vec![1, 2, 3]);
        heap.replace(5, 0);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap = MinHeap::with_capacity(16);
        for i in 0..10 {
            heap.push(i);
        }
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 16);
    }
}
