use core::cmp::Ordering::{Equal, Greater, Less};

use super::{IntoIter, NavSet};
use crate::{Comparator, Reverse};

/// Whether `element` lies at or past the lower bound `from`.
fn reaches<T, C: Comparator<T>>(comparator: &C, element: &T, from: &T, inclusive: bool) -> bool {
    match comparator.compare(element, from) {
        Greater => true,
        Equal => inclusive,
        Less => false,
    }
}

/// Whether `element` lies at or before the upper bound `to`.
fn within<T, C: Comparator<T>>(comparator: &C, element: &T, to: &T, inclusive: bool) -> bool {
    match comparator.compare(element, to) {
        Less => true,
        Equal => inclusive,
        Greater => false,
    }
}

impl<T: Clone, C: Comparator<T> + Clone> NavSet<T, C> {
    /// Returns a new set holding the same elements in the opposite order.
    ///
    /// The returned set is ordered by [`Reverse`] of this set's comparator, so its
    /// [`first`](NavSet::first) is this set's [`last`](NavSet::last) and its navigation queries
    /// are mirrored. Calling `descending_set` on the result restores the original order.
    ///
    /// The result is an independent copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3]);
    /// let desc = set.descending_set();
    /// assert_eq!(desc.to_string(), "[3, 2, 1]");
    /// assert_eq!(desc.higher(&2), Some(&1));
    ///
    /// let asc = desc.descending_set();
    /// assert_eq!(asc, set);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn descending_set(&self) -> NavSet<T, Reverse<C>> {
        let elements = self.elements.iter().rev().cloned().collect();
        NavSet::from_sorted(elements, Reverse(self.comparator.clone()))
    }

    /// Returns an owning iterator over the elements of
    /// [`descending_set`](NavSet::descending_set), front to back.
    ///
    /// The iterator walks a snapshot, so the set may be changed freely while it is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3]);
    /// let v: Vec<_> = set.descending_iter().collect();
    /// assert_eq!(v, [3, 2, 1]);
    /// ```
    pub fn descending_iter(&self) -> IntoIter<T> {
        self.descending_set().into_iter()
    }

    /// Returns a new set holding the elements less than `to`, or less than or equal to `to`
    /// when `inclusive` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.head_set(&3, false).as_slice(), [1, 2]);
    /// assert_eq!(set.head_set(&3, true).as_slice(), [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn head_set(&self, to: &T, inclusive: bool) -> Self {
        let elements = self
            .elements
            .iter()
            .take_while(|element| within(&self.comparator, *element, to, inclusive))
            .cloned()
            .collect();
        NavSet::from_sorted(elements, self.comparator.clone())
    }

    /// Returns a new set holding the elements greater than `from`, or greater than or equal to
    /// `from` when `inclusive` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.tail_set(&2, false).as_slice(), [3, 4]);
    /// assert_eq!(set.tail_set(&2, true).as_slice(), [2, 3, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn tail_set(&self, from: &T, inclusive: bool) -> Self {
        let elements = self
            .elements
            .iter()
            .skip_while(|element| !reaches(&self.comparator, *element, from, inclusive))
            .cloned()
            .collect();
        NavSet::from_sorted(elements, self.comparator.clone())
    }

    /// Returns a new set holding the elements between `from` and `to`.
    ///
    /// This is [`tail_set`](NavSet::tail_set)`(from, from_inclusive)` restricted to
    /// [`head_set`](NavSet::head_set)`(to, to_inclusive)`, computed in one pass. If `from` is
    /// ordered after `to` the result is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.sub_set(&2, true, &4, false).as_slice(), [2, 3]);
    /// assert_eq!(set.sub_set(&2, false, &4, true).as_slice(), [3, 4]);
    /// assert!(set.sub_set(&4, true, &2, true).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn sub_set(&self, from: &T, from_inclusive: bool, to: &T, to_inclusive: bool) -> Self {
        let elements = self
            .elements
            .iter()
            .skip_while(|element| !reaches(&self.comparator, *element, from, from_inclusive))
            .take_while(|element| within(&self.comparator, *element, to, to_inclusive))
            .cloned()
            .collect();
        NavSet::from_sorted(elements, self.comparator.clone())
    }

    /// Returns a new set holding the elements strictly less than `to`.
    ///
    /// Shorthand for [`head_set`](NavSet::head_set)`(to, false)`.
    #[must_use]
    pub fn head_set_before(&self, to: &T) -> Self {
        self.head_set(to, false)
    }

    /// Returns a new set holding the elements greater than or equal to `from`.
    ///
    /// Shorthand for [`tail_set`](NavSet::tail_set)`(from, true)`.
    #[must_use]
    pub fn tail_set_from(&self, from: &T) -> Self {
        self.tail_set(from, true)
    }

    /// Returns a new set holding the elements from `from` (inclusive) up to `to` (exclusive).
    ///
    /// Shorthand for [`sub_set`](NavSet::sub_set)`(from, true, to, false)`.
    #[must_use]
    pub fn sub_set_range(&self, from: &T, to: &T) -> Self {
        self.sub_set(from, true, to, false)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{Comparator, NavSet};
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    #[test]
    fn views_share_the_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        let set = NavSet::from_unsorted(by_abs, [-4, 3, -2, 1]);
        let head = set.head_set(&-3, true);
        assert_eq!(head.as_slice(), [1, -2, 3]);
        assert_eq!(head.comparator().compare(&-5, &4), Ordering::Greater);
    }

    #[test]
    fn bounds_outside_the_value_range() {
        let set = NavSet::from([1, 2, 3]);
        assert!(set.head_set(&0, true).is_empty());
        assert_eq!(set.head_set(&9, false).len(), 3);
        assert!(set.tail_set(&9, true).is_empty());
        assert_eq!(set.tail_set(&0, false).len(), 3);
        assert!(set.sub_set(&2, false, &2, false).is_empty());
        assert_eq!(set.sub_set(&2, true, &2, true).as_slice(), [2]);
    }

    #[test]
    fn shorthands_use_conventional_bounds() {
        let set = NavSet::from([1, 2, 3, 4, 5]);
        assert_eq!(set.head_set_before(&3).as_slice(), [1, 2]);
        assert_eq!(set.tail_set_from(&3).as_slice(), [3, 4, 5]);
        assert_eq!(set.sub_set_range(&2, &5).as_slice(), [2, 3, 4]);
    }

    #[test]
    fn descending_iter_is_a_snapshot() {
        let mut set = NavSet::from([1, 2, 3]);
        let iter = set.descending_iter();
        set.clear();
        assert_eq!(iter.collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn empty_views_of_empty_sets() {
        let set: NavSet<u8> = NavSet::new();
        assert!(set.descending_set().is_empty());
        assert!(set.head_set(&1, true).is_empty());
        assert!(set.tail_set(&1, true).is_empty());
        assert!(set.sub_set(&0, true, &9, true).is_empty());
        assert_eq!(set.descending_iter().next(), None);
    }
}
