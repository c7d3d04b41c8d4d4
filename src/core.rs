//! Core traits and types for Bitsort.
//!
//! This module defines:
//! - [`KeyAccessor`]: The main trait users implement to sort their custom types.
//! - [`Reverse`]: A borrowed view that inverts the sort order of a collection.

use crate::key::ScalarKey;
use std::collections::VecDeque;

/// A trait for sorting a collection in place by an unsigned sort key.
///
/// The sort routines refer to elements of the underlying collection only by
/// integer index, through these three operations. The collection keeps
/// ownership of its data; nothing is copied.
///
/// Contract for the duration of a single sort call:
/// - [`key`](KeyAccessor::key) must be pure: repeated reads of the same index
///   return the same value until that element is moved by a swap.
/// - [`swap`](KeyAccessor::swap) must exchange exactly the two named elements
///   and be a no-op when `a == b`.
/// - No other party may mutate the collection while the sort runs.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use bitsort::core::KeyAccessor;
///
/// struct ByLength {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for ByLength {
///     fn len(&self) -> usize {
///         self.data.len()
///     }
///
///     fn key(&self, index: usize) -> u64 {
///         self.data[index].len() as u64
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.data.swap(a, b);
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns the number of elements in the collection.
    ///
    /// Consulted once per sort invocation to fix the index range.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sort key of the element at `index`.
    ///
    /// Elements with smaller keys come before elements with larger keys.
    fn key(&self, index: usize) -> u64;

    /// Swaps the elements at indices `a` and `b` in place.
    fn swap(&mut self, a: usize, b: usize);
}

// Blanket implementation for slices of key-convertible scalars.
impl<T: ScalarKey> KeyAccessor for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    fn key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        (*self).swap(a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: ScalarKey> KeyAccessor for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Implementation for VecDeque.
// Provides O(1) random access and swapping, so it sorts in place as well.
impl<T: ScalarKey> KeyAccessor for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// A borrowed view that sorts the wrapped collection in descending order.
///
/// The view exposes the bitwise complement of the wrapped collection's keys
/// and delegates `len` and `swap` unchanged, so sorting through it mutates
/// the same underlying storage. Pass the same `max_key` you would use for the
/// ascending sort: keys never exceed it, so their complemented bits above the
/// starting bit are identical across all elements and never discriminate.
///
/// Reversal is an involution: un-reversing is spelled [`into_inner`], which
/// hands back the identical original borrow rather than a nested wrapper.
/// The static type distinguishes a reversed view from the collection it
/// wraps, so double wrapping never happens through this API.
///
/// # Examples
///
/// ```
/// use bitsort::{sort, Reverse};
///
/// let mut data = vec![3u64, 5, 2, 1, 4];
/// sort(&mut Reverse::new(&mut data), 5);
///
/// assert_eq!(data, vec![5, 4, 3, 2, 1]);
/// ```
///
/// [`into_inner`]: Reverse::into_inner
pub struct Reverse<'a, T: ?Sized> {
    inner: &'a mut T,
}

impl<'a, T: KeyAccessor + ?Sized> Reverse<'a, T> {
    /// Wraps a collection in a descending-order view.
    pub fn new(inner: &'a mut T) -> Self {
        Reverse { inner }
    }

    /// Undoes the reversal, returning the original borrow.
    ///
    /// ```
    /// use bitsort::Reverse;
    ///
    /// let mut data = vec![2u32, 1];
    /// let original = &mut data;
    /// let addr = std::ptr::from_mut(&mut *original);
    ///
    /// let inner = Reverse::new(original).into_inner();
    /// assert!(std::ptr::eq(inner, addr));
    /// ```
    pub fn into_inner(self) -> &'a mut T {
        self.inner
    }
}

impl<T: KeyAccessor + ?Sized> KeyAccessor for Reverse<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn key(&self, index: usize) -> u64 {
        !self.inner.key(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a, b);
    }
}
