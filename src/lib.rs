//! Navigable ordered sets for Rust.
//!
//! This crate provides [`NavSet`], a set of unique elements kept in ascending order by a
//! caller-supplied [`Comparator`]. On top of the usual set operations it answers rank-relative
//! questions:
//!
//! - [`lower`](NavSet::lower) / [`floor`](NavSet::floor) - the predecessor of a value
//! - [`ceiling`](NavSet::ceiling) / [`higher`](NavSet::higher) - the successor of a value
//! - [`pop_first`](NavSet::pop_first) / [`pop_last`](NavSet::pop_last) - poll the extremes
//! - [`head_set`](NavSet::head_set), [`tail_set`](NavSet::tail_set),
//!   [`sub_set`](NavSet::sub_set) and [`descending_set`](NavSet::descending_set) - independent
//!   copies of a sub-range or of the reversed order
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the first element
//!
//! # Example
//!
//! ```
//! use nav_set::{NavSet, Rank};
//!
//! let mut set = NavSet::from([7, 1, 5, 3]);
//! assert_eq!(set.to_string(), "[1, 3, 5, 7]");
//!
//! // Navigation never requires the probe to be present.
//! assert_eq!(set.floor(&4), Some(&3));
//! assert_eq!(set.ceiling(&4), Some(&5));
//! assert_eq!(set.lower(&1), None);
//!
//! // Views are snapshots; mutating one leaves the source alone.
//! let mut head = set.head_set(&5, true);
//! head.insert(2);
//! assert_eq!(head.to_string(), "[1, 2, 3, 5]");
//! assert_eq!(set.len(), 4);
//!
//! assert_eq!(set[Rank(1)], 3);
//! assert_eq!(set.pop_last(), Some(7));
//! ```
//!
//! # Custom orders
//!
//! Any `Fn(&T, &T) -> Ordering` is a [`Comparator`]. Uniqueness follows the comparator:
//! two elements the comparator reports as `Equal` are the same element.
//!
//! ```
//! use nav_set::NavSet;
//!
//! let mut words = NavSet::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert!(words.insert("pear"));
//! assert!(words.insert("fig"));
//! assert!(!words.insert("plum")); // same length as "pear"
//! assert_eq!(words.to_string(), "[fig, pear]");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **`serde`** - Serialize as a sequence; deserialize into any set with a `Default` comparator
//!
//! # Implementation
//!
//! The set is a single `Vec` kept sorted by insertion-sort steps. Every query is a linear scan;
//! correctness under an arbitrary total order, not asymptotic performance, is the contract.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod compare;
mod order_statistic;

pub mod nav_set;

pub use compare::{Comparator, Natural, Reverse};
pub use nav_set::NavSet;
pub use order_statistic::Rank;
