use core::cmp::Ordering;

/// A total order over `T`.
///
/// A [`NavSet`](crate::NavSet) keeps its elements sorted by its comparator and treats two
/// elements as the same element when the comparator reports them [`Equal`](Ordering::Equal).
///
/// The comparator must be a valid total order (antisymmetric, transitive and total). This is
/// trusted, not checked. A comparator that violates it will not cause undefined behavior, but the
/// set's ordering, uniqueness and navigation results are then unspecified.
///
/// Every `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use nav_set::{Comparator, Natural, Reverse};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of `T`, as defined by its [`Ord`] implementation.
///
/// This is the default comparator of [`NavSet`](crate::NavSet).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The inverse of another comparator.
///
/// `Reverse(c).compare(a, b)` is `c.compare(b, a)`, so wrapping twice restores the original
/// order. This is the comparator installed by
/// [`NavSet::descending_set`](crate::NavSet::descending_set).
///
/// # Examples
///
/// ```
/// use nav_set::{Comparator, Natural, Reverse};
///
/// let twice = Reverse(Reverse(Natural));
/// assert_eq!(twice.compare(&1, &2), Natural.compare(&1, &2));
/// assert_eq!(twice.into_inner().into_inner(), Natural);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse<C>(pub C);

impl<C> Reverse<C> {
    /// Unwraps the comparator being inverted.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    // Both stock comparators are zero-sized, so a set carries no comparator overhead.
    assert_eq_size!(Natural, ());
    assert_eq_size!(Reverse<Reverse<Natural>>, ());
    assert_impl_all!(Natural: Comparator<i32>, Comparator<str>, Copy, Send, Sync);
    assert_impl_all!(Reverse<Natural>: Comparator<i32>, Copy, Default);

    #[test]
    fn closures_are_comparators() {
        fn by_len(a: &&str, b: &&str) -> Ordering {
            a.len().cmp(&b.len())
        }
        assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
        assert_eq!(Reverse(by_len).compare(&"ab", &"c"), Ordering::Less);
    }

    #[test]
    fn natural_works_on_unsized() {
        assert_eq!(Comparator::<str>::compare(&Natural, "a", "b"), Ordering::Less);
    }

    proptest! {
        #[test]
        fn reverse_negates(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Reverse(Natural).compare(&a, &b), Natural.compare(&a, &b).reverse());
        }

        #[test]
        fn double_reverse_is_identity(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Reverse(Reverse(Natural)).compare(&a, &b), a.cmp(&b));
        }
    }
}
