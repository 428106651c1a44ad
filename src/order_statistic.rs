/// A zero-based rank into the ascending order of a set.
///
/// # Examples
///
/// ```
/// use nav_set::{NavSet, Rank};
///
/// let set = NavSet::from([30, 10, 20]);
///
/// assert_eq!(set[Rank(0)], 10);
/// assert_eq!(set[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
