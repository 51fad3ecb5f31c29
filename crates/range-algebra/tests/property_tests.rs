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

use proptest::prelude::*;
use range_algebra::{container::RangeContainer, range::Range};

fn range_strategy() -> impl Strategy<Value = Range<i32>> {
    (-1000i32..1000, 1i32..200).prop_map(|(start, len)| Range::new(start, start + len).unwrap())
}

fn container_strategy() -> impl Strategy<Value = RangeContainer<i32>> {
    prop::collection::vec(range_strategy(), 0..32)
        .prop_map(|ranges| RangeContainer::with_ranges("prop", ranges))
}

proptest! {
    #[test]
    fn test_construction_fails_iff_not_ordered(a in -500i32..500, b in -500i32..500) {
        prop_assert_eq!(Range::new(a, b).is_err(), a >= b);
    }

    #[test]
    fn test_contains_start_never_end(r in range_strategy()) {
        prop_assert!(r.contains(r.start()));
        prop_assert!(!r.contains(r.end()));
    }

    #[test]
    fn test_overlap_is_symmetric_and_reflexive(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn test_adjacent_and_overlapping_are_exclusive(a in range_strategy(), b in range_strategy()) {
        prop_assert!(!(a.is_adjacent_to(&b) && a.overlaps(&b)));
    }

    #[test]
    fn test_intersection_lies_within_both(a in range_strategy(), b in range_strategy()) {
        match a.intersection(&b) {
            Some(i) => {
                prop_assert!(a.contains_range(&i));
                prop_assert!(b.contains_range(&i));
            }
            None => prop_assert!(!a.overlaps(&b)),
        }
    }

    #[test]
    fn test_split_then_union_restores(r in range_strategy(), offset in 1i32..200) {
        let len = r.end() - r.start();
        prop_assume!(len > 1);
        let point = r.start() + 1 + offset % (len - 1);
        let (left, right) = r.split(&point).unwrap();
        let joined = left.union(&right);
        prop_assert_eq!(joined.as_slice(), &[r]);
    }

    #[test]
    fn test_iter_yields_every_value(r in range_strategy()) {
        let values: Vec<i32> = r.iter().unwrap().collect();
        let expected: Vec<i32> = (*r.start()..*r.end()).collect();
        prop_assert_eq!(values.len() as i32, r.length().unwrap());
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn test_merge_output_sorted_and_separated(container in container_strategy()) {
        let merged = container.merge_overlapping_ranges();
        for pair in merged.ranges().windows(2) {
            prop_assert!(pair[0].start() < pair[1].start());
            prop_assert!(!pair[0].overlaps(&pair[1]));
            prop_assert!(!pair[0].is_adjacent_to(&pair[1]));
        }
    }

    #[test]
    fn test_merge_is_idempotent(container in container_strategy()) {
        let once = container.merge_overlapping_ranges();
        let twice = once.merge_overlapping_ranges();
        prop_assert_eq!(once.ranges(), twice.ranges());
    }

    #[test]
    fn test_merge_covers_exactly_the_union(container in container_strategy(), probe in -1100i32..1300) {
        let merged = container.merge_overlapping_ranges();
        prop_assert_eq!(
            container.find_containing_range(&probe).is_some(),
            merged.find_containing_range(&probe).is_some()
        );
    }

    #[test]
    fn test_coverage_encloses_every_range(container in container_strategy()) {
        match container.total_coverage() {
            Some(cover) => {
                for r in &container {
                    prop_assert!(cover.contains_range(r));
                }
            }
            None => prop_assert!(container.is_empty()),
        }
    }

    #[test]
    fn test_gaps_match_sorted_consecutive_pairs(container in container_strategy()) {
        let mut bounds: Vec<(i32, i32)> = container
            .iter()
            .map(|r| (*r.start(), *r.end()))
            .collect();
        bounds.sort_by_key(|&(start, _)| start);
        let expected: Vec<(i32, i32)> = bounds
            .windows(2)
            .filter(|pair| pair[0].1 < pair[1].0)
            .map(|pair| (pair[0].1, pair[1].0))
            .collect();

        let actual: Vec<(i32, i32)> = container
            .gaps()
            .into_iter()
            .map(Range::into_bounds)
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
