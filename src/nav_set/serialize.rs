use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::NavSet;
use crate::Comparator;

/// Serializes the elements as a sequence in ascending order. The comparator is not serialized.
impl<T: Serialize, C> Serialize for NavSet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct NavSetVisitor<T, C> {
    marker: PhantomData<fn() -> NavSet<T, C>>,
}

impl<T, C> NavSetVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, C> Visitor<'de> for NavSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = NavSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Cap the hint so a hostile length prefix cannot force a huge allocation.
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(NavSet::from_unsorted(C::default(), elements))
    }
}

/// Deserializes a sequence into a set ordered by `C::default()`.
///
/// The input does not have to be sorted or free of duplicates; it is normalized the same way as
/// [`NavSet::from_unsorted`].
impl<'de, T, C> Deserialize<'de> for NavSet<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(NavSetVisitor::new())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{NavSet, Natural, Reverse};
    use alloc::string::String;

    #[test]
    fn serializes_in_ascending_order() {
        let set = NavSet::from([3, 1, 2]);
        let json: String = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[test]
    fn serializes_in_comparator_order() {
        let set = NavSet::from_unsorted(Reverse(Natural), [3, 1, 2]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[3,2,1]");
    }

    #[test]
    fn deserialize_normalizes_input() {
        let set: NavSet<i32> = serde_json::from_str("[5,1,5,3]").unwrap();
        assert_eq!(set.as_slice(), [1, 3, 5]);

        let desc: NavSet<i32, Reverse<Natural>> = serde_json::from_str("[1,3,2]").unwrap();
        assert_eq!(desc.as_slice(), [3, 2, 1]);
    }

    #[test]
    fn deserialize_rejects_non_sequences() {
        assert!(serde_json::from_str::<NavSet<i32>>("{\"a\":1}").is_err());
    }
}
