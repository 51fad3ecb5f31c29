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

//! # Range Containers
//!
//! A [`RangeContainer`] is a named collection of [`Range`] values kept in
//! insertion order. It performs no implicit sorting or deduplication.
//! Algorithms that need an order (merging, gap detection) sort a private copy
//! with a stable sort on `start`, so ranges sharing a start keep their
//! insertion order and results are deterministic.
//!
//! Merging produces a new container named `<name>_merged` and leaves the
//! receiver untouched. Appending through [`RangeContainer::add_range`] and
//! [`RangeContainer::add_ranges`] mutates in place.

use crate::{
    domain::{
        Domain,
        cmp::{partial_max, partial_min},
    },
    range::Range,
};
use std::cmp::Ordering;

/// A named, insertion-ordered collection of ranges.
///
/// # Examples
///
/// ```rust
/// use range_algebra::{container::RangeContainer, range::Range};
///
/// let mut container = RangeContainer::new("TestContainer");
/// container.add_range(Range::new(1, 10).unwrap());
/// container.add_range(Range::new(5, 15).unwrap());
///
/// assert_eq!(container.len(), 2);
/// assert_eq!(container.find_containing_range(&12), Some(&Range::new(5, 15).unwrap()));
/// assert_eq!(container.total_coverage(), Some(Range::new(1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RangeContainer<T> {
    name: String,
    ranges: Vec<Range<T>>,
}

#[inline]
fn by_start<T: Domain>(a: &Range<T>, b: &Range<T>) -> Ordering {
    // Valid bounds are always comparable.
    a.start().partial_cmp(b.start()).unwrap_or(Ordering::Equal)
}

impl<T> RangeContainer<T>
where
    T: Domain,
{
    /// Creates an empty container.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranges: Vec::new(),
        }
    }

    /// Creates a container holding `ranges` in the given order.
    #[inline]
    pub fn with_ranges<I>(name: impl Into<String>, ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<T>>,
    {
        Self {
            name: name.into(),
            ranges: ranges.into_iter().collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ranges in insertion order.
    #[inline]
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.ranges.iter()
    }

    /// Appends a range.
    #[inline]
    pub fn add_range(&mut self, range: Range<T>) {
        self.ranges.push(range);
    }

    /// Appends every range of `ranges`, in order.
    #[inline]
    pub fn add_ranges<I>(&mut self, ranges: I)
    where
        I: IntoIterator<Item = Range<T>>,
    {
        self.ranges.extend(ranges);
    }

    /// Returns the first range, in insertion order, that contains `value`.
    ///
    /// Use [`RangeContainer::filter_by_value`] to get every match.
    pub fn find_containing_range(&self, value: &T) -> Option<&Range<T>> {
        self.ranges.iter().find(|r| r.contains(value))
    }

    /// Returns every range that contains `value`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::{container::RangeContainer, range::Range};
    ///
    /// let container = RangeContainer::with_ranges(
    ///     "c",
    ///     [(1, 10), (5, 15), (20, 25)].map(|(s, e)| Range::new(s, e).unwrap()),
    /// );
    /// let hits: Vec<_> = container.filter_by_value(&7).collect();
    /// assert_eq!(hits, vec![&container.ranges()[0], &container.ranges()[1]]);
    /// ```
    pub fn filter_by_value<'a>(
        &'a self,
        value: &'a T,
    ) -> impl Iterator<Item = &'a Range<T>> + 'a {
        self.ranges.iter().filter(move |r| r.contains(value))
    }

    /// Merges overlapping and adjacent ranges into a new container named
    /// `<name>_merged`.
    ///
    /// The result is sorted ascending by `start`, pairwise neither
    /// overlapping nor adjacent, and covers exactly the union of the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::{container::RangeContainer, range::Range};
    ///
    /// let container = RangeContainer::with_ranges(
    ///     "Adjacent",
    ///     [(10, 15), (1, 5), (5, 10)].map(|(s, e)| Range::new(s, e).unwrap()),
    /// );
    /// let merged = container.merge_overlapping_ranges();
    /// assert_eq!(merged.name(), "Adjacent_merged");
    /// assert_eq!(merged.ranges(), &[Range::new(1, 15).unwrap()]);
    /// assert_eq!(container.len(), 3);
    /// ```
    pub fn merge_overlapping_ranges(&self) -> RangeContainer<T> {
        let mut sorted = self.ranges.clone();
        sorted.sort_by(by_start);

        let mut merged: Vec<Range<T>> = Vec::with_capacity(sorted.len());
        for current in sorted {
            match merged.last_mut() {
                Some(tail) if tail.overlaps(&current) || tail.is_adjacent_to(&current) => {
                    log::trace!("merging {:?} into {:?}", current, tail);
                    *tail = tail.span(&current);
                }
                _ => merged.push(current),
            }
        }

        log::debug!(
            "merged container '{}': {} ranges into {}",
            self.name,
            self.ranges.len(),
            merged.len()
        );

        RangeContainer {
            name: format!("{}_merged", self.name),
            ranges: merged,
        }
    }

    /// Returns the tightest single range enclosing every range of the
    /// container, or `None` if it is empty.
    ///
    /// Unlike [`RangeContainer::merge_overlapping_ranges`], gaps between the
    /// ranges are included in the result.
    pub fn total_coverage(&self) -> Option<Range<T>> {
        let mut iter = self.ranges.iter();
        let first = iter.next()?;
        let (start, end) = iter.fold(
            (first.start().clone(), first.end().clone()),
            |(start, end), r| {
                (
                    partial_min(start, r.start().clone()),
                    partial_max(end, r.end().clone()),
                )
            },
        );
        Some(Range::new_unchecked(start, end))
    }

    /// Returns the uncovered space between sort-consecutive ranges.
    ///
    /// The ranges are sorted by `start` and each consecutive pair
    /// `(current, next)` with `current.end < next.start` yields
    /// `[current.end, next.start)`. Pairs are compared as they are, without
    /// merging first, so a long range earlier in the order does not hide a
    /// gap between two later ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_algebra::{container::RangeContainer, range::Range};
    ///
    /// let container = RangeContainer::with_ranges(
    ///     "c",
    ///     [(20, 25), (1, 10), (5, 15)].map(|(s, e)| Range::new(s, e).unwrap()),
    /// );
    /// assert_eq!(container.gaps(), vec![Range::new(15, 20).unwrap()]);
    /// ```
    pub fn gaps(&self) -> Vec<Range<T>> {
        if self.ranges.len() < 2 {
            return Vec::new();
        }

        let mut sorted: Vec<&Range<T>> = self.ranges.iter().collect();
        sorted.sort_by(|a, b| by_start(a, b));

        let gaps: Vec<Range<T>> = sorted
            .windows(2)
            .filter_map(|pair| {
                let (current, next) = (pair[0], pair[1]);
                if current.end() < next.start() {
                    log::trace!("gap between {:?} and {:?}", current, next);
                    Some(Range::new_unchecked(
                        current.end().clone(),
                        next.start().clone(),
                    ))
                } else {
                    None
                }
            })
            .collect();

        log::debug!(
            "container '{}': {} gaps across {} ranges",
            self.name,
            gaps.len(),
            self.ranges.len()
        );
        gaps
    }
}

impl<T> Extend<Range<T>> for RangeContainer<T>
where
    T: Domain,
{
    #[inline]
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        self.add_ranges(iter);
    }
}

impl<'a, T> IntoIterator for &'a RangeContainer<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T> std::fmt::Display for RangeContainer<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RangeContainer '{}' ({} ranges):",
            self.name,
            self.ranges.len()
        )?;
        // One indented line per range; an empty container prints the header only.
        for r in &self.ranges {
            write!(f, "\n  {}", r)?;
        }
        Ok(())
    }
}
