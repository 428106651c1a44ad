use alloc::vec::{self, Vec};
use core::cmp::Ordering::{self, Equal, Greater, Less};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::slice;

use crate::{Comparator, Natural};

mod capacity;
mod navigation;
mod order_statistic;
#[cfg(feature = "serde")]
mod serialize;
mod view;

/// An ordered set backed by a sorted `Vec`.
///
/// Elements are kept in ascending order according to the set's [`Comparator`], which is fixed at
/// construction. Two elements that the comparator reports as [`Equal`](Ordering::Equal) are the
/// same element, so a set never holds both.
///
/// Every operation is a linear scan over the backing sequence. Sub-range and reversed views are
/// returned as new, independently owned sets: mutating a view never affects the set it was taken
/// from, and vice versa.
///
/// It is a logic error for an element to be modified in such a way that its ordering relative to
/// any other element, as determined by the comparator, changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `NavSet` that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use nav_set::NavSet;
///
/// let mut books = NavSet::new();
///
/// books.insert("The Odyssey");
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
///
/// assert!(!books.insert("The Odyssey"));
/// assert_eq!(books.first(), &"A Dance With Dragons");
/// assert_eq!(books.higher(&"The"), Some(&"The Odyssey"));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A set with a custom order carries its comparator in its type:
///
/// ```
/// use nav_set::{NavSet, Reverse, Natural};
///
/// let mut set = NavSet::with_comparator(Reverse(Natural));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.to_string(), "[3, 2, 1]");
/// ```
pub struct NavSet<T, C = Natural> {
    elements: Vec<T>,
    comparator: C,
}

/// An iterator over the elements of a `NavSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`NavSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use nav_set::NavSet;
///
/// let set = NavSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// ```
///
/// [`iter`]: NavSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: slice::Iter<'a, T>,
}

/// An owning iterator over the elements of a `NavSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`NavSet`]
/// (provided by the [`IntoIterator`] trait) and by [`descending_iter`].
///
/// # Examples
///
/// ```
/// use nav_set::NavSet;
///
/// let set = NavSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// ```
///
/// [`into_iter`]: NavSet#method.into_iter
/// [`descending_iter`]: NavSet::descending_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T: Ord> NavSet<T> {
    /// Makes a new, empty `NavSet` ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> NavSet<T> {
        NavSet::with_comparator(Natural)
    }
}

impl<T, C> NavSet<T, C> {
    /// Makes a new, empty `NavSet` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), &2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        NavSet {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Builds a set ordered by `comparator` from an arbitrary, unordered collection.
    ///
    /// The collection is sorted once. When several items compare equal, the one that came first
    /// in `items` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
    /// let set = NavSet::from_unsorted(by_abs, [3, -1, -3, 2]);
    /// assert_eq!(set.to_string(), "[-1, 2, 3]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn from_unsorted<I>(comparator: C, items: I) -> Self
    where
        C: Comparator<T>,
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = items.into_iter().collect();
        elements.sort_by(|a, b| comparator.compare(a, b));
        elements.dedup_by(|later, earlier| comparator.compare(&*later, &*earlier) == Equal);
        NavSet {
            elements,
            comparator,
        }
    }

    /// Wraps a sequence that is already strictly ascending under `comparator`.
    pub(crate) fn from_sorted(elements: Vec<T>, comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        debug_assert!(
            elements.windows(2).all(|pair| comparator.compare(&pair[0], &pair[1]) == Less),
            "`NavSet::from_sorted()` - `elements` is not strictly ascending!"
        );
        NavSet {
            elements,
            comparator,
        }
    }

    /// Returns a reference to the comparator that orders this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the first element in the set.
    /// This is the minimum element in the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty. Use `iter().next()` or [`pop_first`](NavSet::pop_first)
    /// when emptiness is an expected outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    /// set.insert(2);
    /// assert_eq!(set.first(), &2);
    /// set.insert(1);
    /// assert_eq!(set.first(), &1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn first(&self) -> &T {
        self.elements.first().expect("`NavSet::first()` - set is empty!")
    }

    /// Returns the last element in the set.
    /// This is the maximum element in the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty. Use `iter().next_back()` or [`pop_last`](NavSet::pop_last)
    /// when emptiness is an expected outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    /// set.insert(1);
    /// assert_eq!(set.last(), &1);
    /// set.insert(2);
    /// assert_eq!(set.last(), &2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn last(&self) -> &T {
        self.elements.last().expect("`NavSet::last()` - set is empty!")
    }

    /// Removes and returns the first element in the set, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::from([2, 4, 6]);
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), Some(4));
    /// assert_eq!(set.pop_first(), Some(6));
    /// assert_eq!(set.pop_first(), None);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn pop_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Removes and returns the last element in the set, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// while let Some(n) = set.pop_last() {
    ///     assert!(set.iter().all(|&k| k < n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn pop_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Retains only the elements specified by the predicate, visiting them in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::from([1, 2, 3, 4, 5, 6]);
    /// set.retain(|&k| k % 2 == 0);
    /// assert_eq!(set.as_slice(), [2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(f);
    }

    /// Gets an iterator that visits the elements in the `NavSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Returns the elements as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set, returning its elements as an ascending `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut a = NavSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T, C: Comparator<T>> NavSet<T, C> {
    /// Finds `value` by scanning upward from the first element.
    ///
    /// Returns `Ok(index)` of the element comparing equal to `value`, or `Err(index)` of the first
    /// element ordered after it (the length if there is none), which is where `value` belongs.
    pub(crate) fn search(&self, value: &T) -> Result<usize, usize> {
        for (index, element) in self.elements.iter().enumerate() {
            match self.comparator.compare(value, element) {
                Greater => {}
                Equal => return Ok(index),
                Less => return Err(index),
            }
        }
        Err(self.elements.len())
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the set is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.elements.insert(index, value);
                true
            }
        }
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    ///
    /// Useful when the comparator looks at only part of an element.
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        self.search(value).ok().map(|index| &self.elements[index])
    }

    /// If the set contains an element equal to the value, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let mut set = NavSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to the value.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.search(value).ok().map(|index| self.elements.remove(index))
    }
}

impl<T: Hash, C> Hash for NavSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: PartialEq, C, D> PartialEq<NavSet<T, D>> for NavSet<T, C> {
    /// Sets are equal when they hold equal elements in the same order, whatever their comparators.
    fn eq(&self, other: &NavSet<T, D>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for NavSet<T, C> {}

impl<T: PartialOrd, C> PartialOrd for NavSet<T, C> {
    fn partial_cmp(&self, other: &NavSet<T, C>) -> Option<Ordering> {
        self.elements.partial_cmp(&other.elements)
    }
}

impl<T: Ord, C> Ord for NavSet<T, C> {
    fn cmp(&self, other: &NavSet<T, C>) -> Ordering {
        self.elements.cmp(&other.elements)
    }
}

impl<T: Clone, C: Clone> Clone for NavSet<T, C> {
    fn clone(&self) -> Self {
        NavSet {
            elements: self.elements.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for NavSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the elements in ascending order as `[a, b, c]`.
impl<T: fmt::Display, C> fmt::Display for NavSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T, C: Default> Default for NavSet<T, C> {
    fn default() -> Self {
        NavSet::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for NavSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        NavSet::from_unsorted(C::default(), iter)
    }
}

impl<T, C: Comparator<T>> Extend<T> for NavSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for NavSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for NavSet<T> {
    fn from(arr: [T; N]) -> Self {
        NavSet::from_unsorted(Natural, arr)
    }
}

impl<T: Ord> From<Vec<T>> for NavSet<T> {
    fn from(vec: Vec<T>) -> Self {
        NavSet::from_unsorted(Natural, vec)
    }
}

impl<T, C> IntoIterator for NavSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `NavSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_set::NavSet;
    ///
    /// let set = NavSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a NavSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `nav_set::Iter`.
    ///
    /// ```
    /// # use nav_set::nav_set;
    /// let iter: nav_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: <&[T]>::default().iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `nav_set::IntoIter`.
    ///
    /// ```
    /// # use nav_set::nav_set;
    /// let iter: nav_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Reverse;
    use alloc::string::ToString;
    use alloc::vec;
    use proptest::prelude::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    // A set with a zero-sized comparator is exactly its backing `Vec`.
    assert_eq_size!(NavSet<u64>, Vec<u64>);
    assert_eq_size!(NavSet<u64, Reverse<Natural>>, Vec<u64>);
    assert_impl_all!(NavSet<u64>: Send, Sync, Clone, Default);

    #[test]
    fn insert_scans_to_first_position_not_before_value() {
        let mut set = NavSet::new();
        for value in [5, 1, 9, 3, 7] {
            assert!(set.insert(value));
        }
        assert_eq!(set.as_slice(), [1, 3, 5, 7, 9]);
        assert_eq!(set.search(&0), Err(0));
        assert_eq!(set.search(&4), Err(2));
        assert_eq!(set.search(&7), Ok(3));
        assert_eq!(set.search(&10), Err(5));
    }

    #[test]
    fn uniqueness_follows_the_comparator() {
        let mut set = NavSet::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        assert!(set.insert((1, 'a')));
        assert!(!set.insert((1, 'b')));
        assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
        assert_eq!(set.take(&(1, 'z')), Some((1, 'a')));
        assert!(set.is_empty());
    }

    #[test]
    fn from_unsorted_keeps_first_of_equal_items() {
        let set = NavSet::from_unsorted(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0), [
            (2, 'x'),
            (1, 'a'),
            (2, 'y'),
            (1, 'b'),
        ]);
        assert_eq!(set.as_slice(), [(1, 'a'), (2, 'x')]);
    }

    #[test]
    fn display_is_bracketed_and_comma_separated() {
        assert_eq!(NavSet::<i32>::new().to_string(), "[]");
        assert_eq!(NavSet::from([1]).to_string(), "[1]");
        assert_eq!(NavSet::from([3, 1, 2]).to_string(), "[1, 2, 3]");
        assert_eq!(alloc::format!("{:?}", NavSet::from([2, 1])), "{1, 2}");
    }

    #[test]
    fn equality_ignores_comparator() {
        let ascending = NavSet::from([1, 2]);
        let descending = NavSet::from_unsorted(Reverse(Natural), [1, 2]);
        assert_ne!(ascending, descending);
        assert_eq!(descending.descending_set(), ascending);
    }

    #[test]
    fn iterators_report_exact_sizes() {
        let set = NavSet::from(vec![4, 2, 8]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.clone().last(), Some(&8));
        assert_eq!(iter.len(), 2);

        let mut owned = set.into_iter();
        assert_eq!(owned.next_back(), Some(8));
        assert_eq!(owned.len(), 2);
        assert_eq!(owned.next(), Some(2));
        assert_eq!(owned.next(), Some(4));
        assert_eq!(owned.next(), None);
    }

    #[test]
    fn empty_set_extremes_without_panicking() {
        let mut set: NavSet<i32> = NavSet::new();
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.iter().next_back(), None);
        assert_eq!(set.pop_first(), None);
        assert_eq!(set.pop_last(), None);
    }

    #[test]
    #[should_panic(expected = "`NavSet::first()` - set is empty!")]
    fn first_on_empty_panics() {
        let set: NavSet<i32> = NavSet::new();
        let _ = set.first();
    }

    #[test]
    #[should_panic(expected = "`NavSet::last()` - set is empty!")]
    fn last_on_empty_panics() {
        let set: NavSet<i32> = NavSet::new();
        let _ = set.last();
    }

    proptest! {
        #[test]
        fn insertions_keep_strict_ascending_order(values in proptest::collection::vec(-50i32..50, 0..200)) {
            let mut set = NavSet::new();
            for value in &values {
                set.insert(*value);
            }
            prop_assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
