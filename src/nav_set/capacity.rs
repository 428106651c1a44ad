use alloc::vec::Vec;

use super::NavSet;
use crate::Natural;

impl<T: Ord> NavSet<T> {
    /// Creates an empty set, ordered by `T`'s [`Ord`] implementation, with capacity for at least
    /// `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set: NavSet<i32> = NavSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NavSet::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C> NavSet<T, C> {
    /// Creates an empty set ordered by `comparator` with capacity for at least `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        NavSet {
            elements: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::from([1]);
    /// set.reserve(10);
    /// assert!(set.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }
}
