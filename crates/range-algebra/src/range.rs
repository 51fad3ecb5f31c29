// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    domain::{
        Domain,
        cmp::{partial_max, partial_min},
    },
    error::{RangeError, Result},
};
use smallvec::{SmallVec, smallvec};
use std::{iter::FusedIterator, ops::BitAnd};

/// A non-empty half-open interval `[start, end)` over an ordered [`Domain`].
///
/// A `Range` is an immutable value: every operation that derives a new
/// interval (intersection, union, split) constructs a fresh one. Equality and
/// ordering are lexicographic on `(start, end)`.
///
/// # Invariants
/// `start` is always strictly less than `end`. No `Range` with `start >= end`
/// can be constructed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range<T> {
    start: T,
    end: T,
}

/// An iterator over every value of an enumerable range, in ascending order.
///
/// # Examples
///
/// ```rust
/// # use range_algebra::range::Range;
///
/// let r = Range::new(1, 6).unwrap();
/// let values: Vec<_> = r.iter().unwrap().collect();
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    current: Option<T>,
    end: T,
}

impl<T> Iterator for RangeIter<T>
where
    T: Domain,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if current < self.end {
            // `iter` already checked the capability.
            self.current = current.successor().ok().flatten();
            Some(current)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for RangeIter<T> where T: Domain {}

impl<T> Range<T>
where
    T: Domain,
{
    /// Creates a new `Range`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `start >= end`. Equal bounds are
    /// rejected as well, since a range must not be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::{error::RangeError, range::Range};
    ///
    /// let r = Range::new(0, 10).unwrap();
    /// assert_eq!(r.length(), Some(10));
    ///
    /// assert!(matches!(Range::new(5, 5), Err(RangeError::InvalidRange { .. })));
    /// assert!(Range::new(10, 1).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(RangeError::invalid_range(&start, &end))
        }
    }

    /// Creates a new `Range` from bounds already known to be valid.
    ///
    /// The caller must ensure `start < end`; this is only checked in debug builds.
    #[inline]
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start < end,
            "Invalid range: start must be less than end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound of the range.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the exclusive end bound of the range.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Consumes the range and returns its `(start, end)` bounds.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns the length `end - start`.
    ///
    /// Returns `None` if the domain has no notion of distance. This is not an
    /// error: the length is simply not available for such ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// assert_eq!(Range::new(1.5, 5.5).unwrap().length(), Some(4.0));
    /// assert_eq!(Range::new("ant", "bee").unwrap().length(), None);
    /// ```
    #[inline]
    pub fn length(&self) -> Option<T::Delta> {
        T::delta(&self.start, &self.end)
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let r = Range::new(0, 10).unwrap();
    /// assert!(r.contains(&0));
    /// assert!(r.contains(&9));
    /// assert!(!r.contains(&10));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.start <= *value && *value < self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two ranges share at least one point.
    ///
    /// Ranges that only touch at a boundary do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let a = Range::new(1, 10).unwrap();
    /// assert!(a.overlaps(&Range::new(5, 15).unwrap()));
    /// assert!(!a.overlaps(&Range::new(10, 20).unwrap())); // Adjacent
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Returns `true` if the ranges share a boundary point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let a = Range::new(1, 5).unwrap();
    /// assert!(a.is_adjacent_to(&Range::new(5, 10).unwrap()));
    /// assert!(!a.is_adjacent_to(&Range::new(10, 15).unwrap()));
    /// ```
    #[inline]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end == other.start || self.start == other.end
    }

    /// Returns `true` if the ranges either overlap or are adjacent, i.e. their
    /// union is a single contiguous range.
    #[inline]
    pub fn overlaps_or_adjacent(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Calculates the intersection of two ranges.
    ///
    /// Returns `None` if the ranges do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let a = Range::new(1, 10).unwrap();
    /// let b = Range::new(5, 15).unwrap();
    /// assert_eq!(a.intersection(&b), Some(Range::new(5, 10).unwrap()));
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new_unchecked(
            partial_max(self.start.clone(), other.start.clone()),
            partial_min(self.end.clone(), other.end.clone()),
        ))
    }

    /// Returns the smallest range covering both `self` and `other`,
    /// including any gap between them.
    #[inline]
    pub fn span(&self, other: &Self) -> Self {
        Self::new_unchecked(
            partial_min(self.start.clone(), other.start.clone()),
            partial_max(self.end.clone(), other.end.clone()),
        )
    }

    /// Calculates the union of two ranges.
    ///
    /// Overlapping or adjacent ranges collapse into one merged range.
    /// Otherwise both ranges are returned unchanged, `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let a = Range::new(1, 5).unwrap();
    /// let b = Range::new(5, 10).unwrap();
    /// assert_eq!(a.union(&b).as_slice(), &[Range::new(1, 10).unwrap()]);
    ///
    /// let c = Range::new(20, 25).unwrap();
    /// assert_eq!(a.union(&c).as_slice(), &[a, c]);
    /// ```
    pub fn union(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.overlaps_or_adjacent(other) {
            smallvec![self.span(other)]
        } else {
            smallvec![self.clone(), other.clone()]
        }
    }

    /// Returns the range strictly separating two ranges.
    ///
    /// Returns `None` if the ranges overlap or are adjacent. Symmetric in its
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let a = Range::new(0, 5).unwrap();
    /// let b = Range::new(10, 15).unwrap();
    /// assert_eq!(a.gap(&b), Some(Range::new(5, 10).unwrap()));
    /// assert_eq!(b.gap(&a), a.gap(&b));
    /// ```
    #[inline]
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new_unchecked(self.end.clone(), other.start.clone()))
        } else if other.end < self.start {
            Some(Self::new_unchecked(other.end.clone(), self.start.clone()))
        } else {
            None
        }
    }

    /// Splits the range into `[start, point)` and `[point, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::PointNotInRange`] if `point` is not contained in
    /// the range. Splitting at `start` is contained but would produce an empty
    /// left piece, so it fails with [`RangeError::InvalidRange`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::{error::RangeError, range::Range};
    ///
    /// let r = Range::new(1, 10).unwrap();
    /// let (left, right) = r.split(&5).unwrap();
    /// assert_eq!(left, Range::new(1, 5).unwrap());
    /// assert_eq!(right, Range::new(5, 10).unwrap());
    ///
    /// assert!(matches!(r.split(&15), Err(RangeError::PointNotInRange { .. })));
    /// assert!(matches!(r.split(&1), Err(RangeError::InvalidRange { .. })));
    /// ```
    pub fn split(&self, point: &T) -> Result<(Self, Self)> {
        if !self.contains(point) {
            return Err(RangeError::point_not_in_range(
                point,
                &self.start,
                &self.end,
            ));
        }

        let left = Self::new(self.start.clone(), point.clone())?;
        let right = Self::new_unchecked(point.clone(), self.end.clone());
        Ok((left, right))
    }

    /// Creates an iterator over every value in the range.
    ///
    /// The iterator is lazy and each call starts over from `start`.
    ///
    /// # Errors
    ///
    /// Returns the domain's [`Domain::successor`] error, typically
    /// [`RangeError::UnsupportedOperation`], if the domain is not enumerable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::range::Range;
    ///
    /// let r = Range::new('a', 'd').unwrap();
    /// assert_eq!(r.iter().unwrap().collect::<String>(), "abc");
    ///
    /// assert!(Range::new(0.5, 2.5).unwrap().iter().is_err());
    /// ```
    #[inline]
    pub fn iter(&self) -> Result<RangeIter<T>> {
        self.start.successor()?;
        Ok(RangeIter {
            current: Some(self.start.clone()),
            end: self.end.clone(),
        })
    }
}

impl<T> BitAnd for Range<T>
where
    T: Domain,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> std::fmt::Debug for Range<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl<T> TryFrom<std::ops::Range<T>> for Range<T>
where
    T: Domain,
{
    type Error = RangeError;

    #[inline]
    fn try_from(range: std::ops::Range<T>) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Range<T>> for std::ops::Range<T> {
    #[inline]
    fn from(r: Range<T>) -> Self {
        r.start..r.end
    }
}
