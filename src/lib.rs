//! # Bitsort
//!
//! `bitsort` is an in-place binary MSD (most-significant-bit-first) radix
//! sort, also known as **binary quicksort**. It sorts any indexable,
//! swappable collection by an unsigned 64-bit sort key, recursively
//! partitioning the data one bit at a time from the top bit of the declared
//! maximum key down to bit zero.
//!
//! ## Key Features
//!
//! - **In-Place**: no auxiliary buffers; the only extra storage is the
//!   recursion stack, bounded by the bit-width of the maximum key (at most
//!   64 frames), never by the element count.
//! - **O(n·k) Cost**: `n` elements, `k` bits in the maximum key; each bit
//!   level is a single linear partition pass.
//! - **Zero-Copy abstractions**: the [`KeyAccessor`] trait sorts arbitrary
//!   data structures through index-based key lookups and swaps, without
//!   copying or owning the underlying data.
//! - **Typed adapters**: slices of native integers and floats sort through
//!   [`sort_slice`], which derives an order-preserving unsigned key for each
//!   type (see [`ScalarKey`]).
//! - **Descending order**: the [`Reverse`] adapter flips the effective order
//!   of any collection by complementing its keys, without touching the data.
//!
//! Note that this sort is **not stable**: elements with equal keys may end up
//! in any relative order.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Slices of native numeric types sort directly through [`sort_slice`]:
//!
//! ```rust
//! use bitsort::sort_slice;
//!
//! let mut data = [127i8, -15, 10, -1, 0];
//! sort_slice(&mut data);
//!
//! assert_eq!(data, [-15, -1, 0, 10, 127]);
//! ```
//!
//! Any element type sorts through [`sort_by_key`] with a key extraction
//! closure and a declared maximum key:
//!
//! ```rust
//! use bitsort::sort_by_key;
//!
//! let mut words = ["radix", "in", "sort", "binary"];
//! sort_by_key(&mut words, 16, |w| w.len() as u64);
//!
//! assert_eq!(words, ["in", "sort", "radix", "binary"]);
//! ```
//!
//! ### Custom Types
//!
//! To sort a data structure that is not a slice, implement the
//! [`KeyAccessor`] trait and call [`sort`] with the maximum key:
//!
//! ```rust
//! use bitsort::{sort, KeyAccessor};
//!
//! struct Scores {
//!     names: Vec<String>,
//!     points: Vec<u32>,
//! }
//!
//! impl KeyAccessor for Scores {
//!     fn len(&self) -> usize {
//!         self.points.len()
//!     }
//!
//!     fn key(&self, index: usize) -> u64 {
//!         self.points[index] as u64
//!     }
//!
//!     fn swap(&mut self, a: usize, b: usize) {
//!         self.names.swap(a, b);
//!         self.points.swap(a, b);
//!     }
//! }
//!
//! let mut scores = Scores {
//!     names: vec!["ada".into(), "brin".into(), "cray".into()],
//!     points: vec![300, 100, 200],
//! };
//!
//! sort(&mut scores, u32::MAX as u64);
//! assert_eq!(scores.names, vec!["brin", "cray", "ada"]);
//! ```
//!
//! ### Descending Order
//!
//! ```rust
//! use bitsort::{sort, Reverse};
//!
//! let mut data = vec![3u64, 5, 2, 1, 4];
//! sort(&mut Reverse::new(&mut data), 5);
//!
//! assert_eq!(data, vec![5, 4, 3, 2, 1]);
//! ```
//!
//! ## Floating-point numbers
//!
//! Float keys are derived from the raw bit pattern so that the sorted order
//! is the standard numeric ascending order across signs, magnitudes and
//! infinities, with one deliberate exception: **every NaN sorts first**,
//! before negative infinity, regardless of its sign bit. Negative and
//! positive zero are kept in `-0.0 < 0.0` order.
//!
//! ## The maximum key contract
//!
//! [`sort`] and [`sort_by_key`] take the largest key value that can occur in
//! the data. It determines the starting bit and therefore the cost of the
//! sort: a maximum of `255` examines 8 bit levels, `u64::MAX` examines 64.
//! Every key produced during the sort must be less than or equal to it;
//! larger keys have their high bits silently ignored and end up in an
//! unspecified position (never out of bounds, never a panic).

pub mod algo;
pub mod core;
pub mod key;
pub use crate::core::{KeyAccessor, Reverse};
pub use algo::{sort, sort_by_key, sort_slice};
pub use key::ScalarKey;

pub mod prelude {
    pub use crate::algo::{sort, sort_by_key, sort_slice};
    pub use crate::core::{KeyAccessor, Reverse};
    pub use crate::key::ScalarKey;
}
