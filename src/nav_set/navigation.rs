use core::cmp::Ordering::{Greater, Less};

use super::NavSet;
use crate::Comparator;

impl<T, C: Comparator<T>> NavSet<T, C> {
    /// Returns the greatest element strictly less than `value`, or `None` if there is none.
    ///
    /// `value` does not have to be in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 3, 5, 7]);
    /// assert_eq!(set.lower(&5), Some(&3));
    /// assert_eq!(set.lower(&4), Some(&3));
    /// assert_eq!(set.lower(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), scanning down from the last element.
    #[must_use]
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.elements.iter().rev().find(|element| self.comparator.compare(*element, value) == Less)
    }

    /// Returns the greatest element less than or equal to `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 3, 5, 7]);
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.floor(&1), Some(&1));
    /// assert_eq!(set.floor(&0), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), scanning down from the last element.
    #[must_use]
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.elements.iter().rev().find(|element| self.comparator.compare(*element, value) != Greater)
    }

    /// Returns the least element greater than or equal to `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 3, 5, 7]);
    /// assert_eq!(set.ceiling(&4), Some(&5));
    /// assert_eq!(set.ceiling(&7), Some(&7));
    /// assert_eq!(set.ceiling(&8), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), scanning up from the first element.
    #[must_use]
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.elements.iter().find(|element| self.comparator.compare(*element, value) != Less)
    }

    /// Returns the least element strictly greater than `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 3, 5, 7]);
    /// assert_eq!(set.higher(&5), Some(&7));
    /// assert_eq!(set.higher(&7), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), scanning up from the first element.
    #[must_use]
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.elements.iter().find(|element| self.comparator.compare(*element, value) == Greater)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{NavSet, Natural, Reverse};

    #[test]
    fn empty_set_has_no_neighbours() {
        let set: NavSet<i32> = NavSet::new();
        assert_eq!(set.lower(&0), None);
        assert_eq!(set.floor(&0), None);
        assert_eq!(set.ceiling(&0), None);
        assert_eq!(set.higher(&0), None);
    }

    #[test]
    fn single_element_boundaries() {
        let set = NavSet::from([10]);
        assert_eq!(set.lower(&10), None);
        assert_eq!(set.floor(&10), Some(&10));
        assert_eq!(set.ceiling(&10), Some(&10));
        assert_eq!(set.higher(&10), None);
        assert_eq!(set.lower(&11), Some(&10));
        assert_eq!(set.higher(&9), Some(&10));
    }

    #[test]
    fn targets_outside_the_value_range() {
        let set = NavSet::from([1, 3, 5, 7]);
        assert_eq!(set.lower(&100), Some(&7));
        assert_eq!(set.floor(&100), Some(&7));
        assert_eq!(set.ceiling(&-100), Some(&1));
        assert_eq!(set.higher(&-100), Some(&1));
        assert_eq!(set.floor(&-100), None);
        assert_eq!(set.ceiling(&100), None);
    }

    #[test]
    fn navigation_follows_a_reversed_comparator() {
        let set = NavSet::from_unsorted(Reverse(Natural), [1, 3, 5, 7]);
        // "Lower" now means numerically greater.
        assert_eq!(set.lower(&5), Some(&7));
        assert_eq!(set.higher(&5), Some(&3));
        assert_eq!(set.floor(&4), Some(&5));
        assert_eq!(set.ceiling(&4), Some(&3));
        assert_eq!(set.lower(&7), None);
        assert_eq!(set.higher(&1), None);
    }
}
