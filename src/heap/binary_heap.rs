//! Comparator-ordered binary heap.
//!
//! ## Layout
//!
//! Elements live in a `Vec` read as a complete binary tree:
//!
//! ```text
//! index:    0   1   2   3   4   5   6
//!          root |---|   |-----------|
//!               depth 1    depth 2
//!
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! ## Ordering
//!
//! The ordering function is supplied once at construction. `Less` means
//! "ranks before", so the root is always an element nothing ranks strictly
//! before. Equal-ranked elements come out in no defined order.
//!
//! ## Capacity
//!
//! Backing storage doubles when full and never shrinks, so `extract_best`
//! never reallocates.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::heap::DEFAULT_CAPACITY;

/// Array-backed priority queue ordered by a caller-supplied function.
///
/// ## Example
///
/// ```
/// use order_heap::heap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &i64, b: &i64| a.cmp(b));
/// for value in [5, 3, 8, 1] {
///     queue.insert(value);
/// }
///
/// assert_eq!(queue.peek_best(), Some(&1));
/// assert_eq!(queue.extract_best(), Ok(1));
/// assert_eq!(queue.extract_best(), Ok(3));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Complete binary tree, root at index 0
    data: Vec<T>,

    /// Total order over `T`
    ordering: F,
}

impl<T: Ord> PriorityQueue<T, fn(&T, &T) -> Ordering> {
    /// Create a min-heap ordered by `T`'s own `Ord` implementation
    pub fn by_ord() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue with the default starting capacity
    pub fn new(ordering: F) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            ordering,
        }
    }

    /// Create an empty queue with a given starting capacity
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use order_heap::heap::PriorityQueue;
    ///
    /// let queue = PriorityQueue::with_capacity(|a: &u32, b: &u32| a.cmp(b), 64).unwrap();
    /// assert!(queue.capacity() >= 64);
    ///
    /// assert!(PriorityQueue::with_capacity(|a: &u32, b: &u32| a.cmp(b), 0).is_err());
    /// ```
    pub fn with_capacity(ordering: F, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument("capacity must be at least 1"));
        }

        Ok(Self {
            data: Vec::with_capacity(capacity),
            ordering,
        })
    }

    // ========================================================================
    // Size and Capacity
    // ========================================================================

    /// Number of elements currently held
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current backing capacity (never decreases)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    // ========================================================================
    // Queue Operations
    // ========================================================================

    /// Insert a value, restoring the heap property by sifting it up
    ///
    /// O(log n) worst case, plus amortized O(1) for growth.
    pub fn insert(&mut self, value: T) {
        self.ensure_capacity();

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Get the best-ranked element without removing it
    ///
    /// Returns `None` on an empty queue; never fails.
    #[inline]
    pub fn peek_best(&self) -> Option<&T> {
        self.data.first()
    }

    /// Remove and return the best-ranked element
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue holds no elements.
    pub fn extract_best(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }

        // Move the last element into the root slot, then take the old root
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let best = self.data.pop().ok_or(Error::Empty)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(best)
    }

    /// Consume the queue, returning its elements best-first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_best() {
            sorted.push(value);
        }
        sorted
    }

    // ========================================================================
    // Heap Maintenance
    // ========================================================================

    /// Double the backing storage when it is full
    fn ensure_capacity(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() < capacity {
            return;
        }

        // capacity is at least 1 for any queue built through new/with_capacity
        self.data.reserve_exact(capacity.max(1));
        trace!(
            old_capacity = capacity,
            new_capacity = self.data.capacity(),
            "priority queue grew"
        );
    }

    /// Move the element at `idx` toward the root while it ranks before its parent
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;

            if (self.ordering)(&self.data[idx], &self.data[parent]) == Ordering::Less {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `idx` toward the leaves while a child ranks before it
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();

        loop {
            let left = idx * 2 + 1;
            let right = left + 1;

            if left >= len {
                break;
            }

            let mut best = left;
            if right < len
                && (self.ordering)(&self.data[right], &self.data[left]) == Ordering::Less
            {
                best = right;
            }

            if (self.ordering)(&self.data[best], &self.data[idx]) == Ordering::Less {
                self.data.swap(idx, best);
                idx = best;
            } else {
                break;
            }
        }
    }
}

impl<T, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
