//! The recursive bit-partition engine and the public sorting entry points.
//!
//! The engine partitions an index range into "bit clear" / "bit set" halves
//! for one bit position, then recurses on each half with the next lower bit.
//! The starting bit is the most significant set bit of the declared maximum
//! key, so recursion depth is bounded by the key bit-width and the total cost
//! is O(n·k) key reads and swaps.

use crate::core::KeyAccessor;
use crate::key::ScalarKey;

/// Returns the most significant set bit of `val`.
///
/// `val` must be nonzero; the zero case is filtered out by [`sort`].
#[inline]
fn msb(val: u64) -> u64 {
    1 << (63 - val.leading_zeros())
}

/// Partitions `[a, b)` by `bit`, then recurses on both halves at `bit >> 1`.
///
/// Two-pointer Hoare-style scan: `lo` walks up past clear-bit keys, `hi`
/// walks down past set-bit keys, and each inversion costs one swap. On exit
/// from the scan, `lo` is the split point: every index in `[a, lo)` has the
/// bit clear and every index in `[lo, b)` has it set.
fn partition<T: KeyAccessor + ?Sized>(data: &mut T, a: usize, b: usize, bit: u64) {
    let mut lo = a;
    let mut hi = b;

    while lo < hi {
        while lo < hi && data.key(lo) & bit == 0 {
            lo += 1;
        }
        hi -= 1;
        while lo < hi && data.key(hi) & bit != 0 {
            hi -= 1;
        }
        if lo < hi {
            data.swap(lo, hi);
            lo += 1;
        }
    }

    let bit = bit >> 1;
    if bit == 0 {
        return;
    }
    // Single-element halves are already sorted; skip the call.
    if a + 1 < lo {
        partition(data, a, lo, bit);
    }
    if lo + 1 < b {
        partition(data, lo, b, bit);
    }
}

/// Sorts `data` in place in ascending key order.
///
/// `max_key` is the largest key value that can occur in the data; it selects
/// the starting bit. Keys above `max_key` have their high bits silently
/// ignored and end up in an unspecified (but in-bounds) position. A
/// `max_key` of zero means all keys are equal, so the data is left untouched.
///
/// The cost is O(n·k), where `n` is `data.len()` and `k` is the number of
/// bits in `max_key`. This sort is not stable.
///
/// # Examples
///
/// ```
/// use bitsort::{sort, KeyAccessor};
///
/// let mut data = vec![9u16, 300, 4, 87];
/// sort(&mut data, u16::MAX as u64);
///
/// assert_eq!(data, vec![4, 9, 87, 300]);
/// ```
pub fn sort<T: KeyAccessor + ?Sized>(data: &mut T, max_key: u64) {
    if max_key == 0 {
        return;
    }
    let len = data.len();
    if len < 2 {
        return;
    }
    partition(data, 0, len, msb(max_key));
}

// Counterpart of implementing KeyAccessor on the slice itself, for callers
// who supply the key as a closure instead. Swapping goes through the generic
// slice swap, so any element type works.
struct SliceByKey<'a, T, F> {
    data: &'a mut [T],
    key: F,
}

impl<T, F: Fn(&T) -> u64> KeyAccessor for SliceByKey<'_, T, F> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn key(&self, index: usize) -> u64 {
        (self.key)(&self.data[index])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// Sorts a slice of any element type in place, by a key extraction function.
///
/// `key` maps an element to its sort key and must return the same key for
/// the same element for the duration of the call; every key must be less
/// than or equal to `max_key` (see [`sort`] for the consequences otherwise).
///
/// The cost is O(n·k·m), where the key function is O(m) and `k` is the
/// number of bits in `max_key`.
///
/// # Examples
///
/// ```
/// use bitsort::sort_by_key;
///
/// // Descending byte order via complemented keys.
/// let mut data = vec![3u8, 250, 17, 99];
/// sort_by_key(&mut data, u8::MAX as u64, |v| (u8::MAX - v) as u64);
///
/// assert_eq!(data, vec![250, 99, 17, 3]);
/// ```
pub fn sort_by_key<T, F>(data: &mut [T], max_key: u64, key: F)
where
    F: Fn(&T) -> u64,
{
    sort(&mut SliceByKey { data, key }, max_key);
}

/// Sorts a slice of native numeric values in place, in ascending order.
///
/// Covers the unsigned and signed integers up to 64 bits and `f32`/`f64`;
/// the maximum key and the order-preserving key transform come from the
/// element type (see [`ScalarKey`]), so there is nothing to declare. Floats
/// sort in numeric ascending order with every NaN placed first, before
/// negative infinity.
///
/// # Examples
///
/// ```
/// use bitsort::sort_slice;
///
/// let mut data = [3.5f32, -10.0, 0.0, -0.5];
/// sort_slice(&mut data);
///
/// assert_eq!(data, [-10.0, -0.5, 0.0, 3.5]);
/// ```
pub fn sort_slice<T: ScalarKey>(data: &mut [T]) {
    sort(data, T::MAX_KEY);
}
