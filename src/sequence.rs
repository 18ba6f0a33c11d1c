//! The length-and-index protocol and the algorithms built on it.
//!
//! A type only has to report its length and return the element at a
//! position. Traversal, membership, slicing and random selection are then
//! provided by the free functions in this module (and [`crate::random`]),
//! which never look at the container's storage.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::error::{IndexError, SliceError};

/// A sized container readable by position.
pub trait Sequence {
    /// Element type returned by [`Sequence::get`].
    type Item;

    /// Returns the current number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// Negative positions count from the end, so `-1` is the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] when `index` is outside `-len..len`.
    fn get(&self, index: isize) -> Result<Self::Item, IndexError>;

    /// Returns whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn len_isize(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Maps a possibly negative position onto `0..len`.
///
/// # Errors
///
/// Returns [`IndexError::OutOfRange`] when `index` is outside `-len..len`.
pub fn resolve(index: isize, len: usize) -> Result<usize, IndexError> {
    let out_of_range = IndexError::OutOfRange { index, len };
    let position = if index < 0 {
        index.checked_add(len_isize(len)).ok_or(out_of_range)?
    } else {
        index
    };
    match usize::try_from(position) {
        Ok(position) if position < len => Ok(position),
        _ => Err(out_of_range),
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: isize) -> Result<T, IndexError> {
        let position = resolve(index, <[T]>::len(self))?;
        Ok(self[position].clone())
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: isize) -> Result<T, IndexError> {
        Sequence::get(self.as_slice(), index)
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: isize) -> Result<T, IndexError> {
        Sequence::get(self.as_slice(), index)
    }
}

/// Iterator that reads positions `0, 1, 2, ...` until one is out of range.
///
/// Created by [`iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, S: ?Sized> {
    seq: &'a S,
    next: isize,
    done: bool,
}

impl<S: Sequence + ?Sized> Iterator for Iter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.seq.get(self.next) {
            Ok(item) => {
                self.next += 1;
                Some(item)
            }
            // Running off the end is the normal way to finish.
            Err(IndexError::OutOfRange { .. }) => {
                self.done = true;
                None
            }
        }
    }
}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

/// Traverses `seq` front to back by calling [`Sequence::get`] with
/// increasing positions.
pub const fn iter<S: Sequence + ?Sized>(seq: &S) -> Iter<'_, S> {
    Iter {
        seq,
        next: 0,
        done: false,
    }
}

/// Iterator that reads positions `len - 1` down to `0`.
///
/// Created by [`reversed`].
#[derive(Debug, Clone)]
pub struct Reversed<'a, S: ?Sized> {
    seq: &'a S,
    remaining: usize,
}

impl<S: Sequence + ?Sized> Iterator for Reversed<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let position = self.remaining.checked_sub(1)?;
        self.remaining = position;
        match self.seq.get(len_isize(position)) {
            Ok(item) => Some(item),
            Err(_) => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<S: Sequence + ?Sized> FusedIterator for Reversed<'_, S> {}

/// Traverses `seq` back to front, starting from [`Sequence::len`].
pub fn reversed<S: Sequence + ?Sized>(seq: &S) -> Reversed<'_, S> {
    Reversed {
        seq,
        remaining: seq.len(),
    }
}

/// Returns whether any element of `seq` equals `item`.
pub fn contains<S>(seq: &S, item: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    iter(seq).any(|candidate| candidate == *item)
}

/// Returns the first position holding `item`.
pub fn index_of<S>(seq: &S, item: &S::Item) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    iter(seq).position(|candidate| candidate == *item)
}

/// Collects every element of `seq` in order.
pub fn to_vec<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Item> {
    iter(seq).collect()
}

const fn normalize(index: isize, len: isize) -> isize {
    if index < 0 {
        index.saturating_add(len)
    } else {
        index
    }
}

/// Resolves `range` and a non-zero `step` into clamped `(start, stop)` bounds.
fn bounds<R: RangeBounds<isize>>(range: &R, step: isize, len: isize) -> (isize, isize) {
    if step > 0 {
        let start = match range.start_bound() {
            Bound::Included(&s) => normalize(s, len),
            Bound::Excluded(&s) => normalize(s, len).saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => normalize(e, len).saturating_add(1),
            Bound::Excluded(&e) => normalize(e, len),
            Bound::Unbounded => len,
        };
        (start.clamp(0, len), stop.clamp(0, len))
    } else {
        let start = match range.start_bound() {
            Bound::Included(&s) => normalize(s, len),
            Bound::Excluded(&s) => normalize(s, len).saturating_sub(1),
            Bound::Unbounded => len - 1,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => normalize(e, len).saturating_sub(1),
            Bound::Excluded(&e) => normalize(e, len),
            Bound::Unbounded => -1,
        };
        (start.clamp(-1, len - 1), stop.clamp(-1, len - 1))
    }
}

fn collect_stepped<S, R>(seq: &S, range: &R, step: isize) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    R: RangeBounds<isize>,
{
    let (start, stop) = bounds(range, step, len_isize(seq.len()));
    let mut items = Vec::new();
    let mut position = start;
    while (step > 0 && position < stop) || (step < 0 && position > stop) {
        match seq.get(position) {
            Ok(item) => items.push(item),
            Err(_) => break,
        }
        position = match position.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    items
}

/// Returns the elements in `range`, in order.
///
/// Bounds may be negative and are clamped to the sequence, so a range that
/// reaches past either end is shortened instead of failing.
pub fn slice<S, R>(seq: &S, range: R) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    R: RangeBounds<isize>,
{
    collect_stepped(seq, &range, 1)
}

/// Returns every `step`-th element in `range`.
///
/// A negative `step` walks backwards; with an unbounded range it starts at
/// the last element.
///
/// # Errors
///
/// Returns [`SliceError::ZeroStep`] when `step` is zero.
pub fn slice_step<S, R>(seq: &S, range: R, step: isize) -> Result<Vec<S::Item>, SliceError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<isize>,
{
    if step == 0 {
        return Err(SliceError::ZeroStep);
    }
    Ok(collect_stepped(seq, &range, step))
}
