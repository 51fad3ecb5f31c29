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

use super::Domain;
use crate::error::Result;
use num_traits::{CheckedAdd, CheckedSub, One};
use std::{convert::Infallible, time::Duration};

macro_rules! integer_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl Domain for $t {
                type Delta = $t;

                #[inline(always)]
                fn delta(start: &Self, end: &Self) -> Option<Self::Delta> {
                    CheckedSub::checked_sub(end, start)
                }

                #[inline(always)]
                fn successor(&self) -> Result<Option<Self>> {
                    Ok(CheckedAdd::checked_add(self, &<$t as One>::one()))
                }
            }
        )*
    };
}

integer_domain!(u8, u16, u32, u64, u128, usize);
integer_domain!(i8, i16, i32, i64, i128, isize);

macro_rules! float_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl Domain for $t {
                type Delta = $t;

                #[inline(always)]
                fn delta(start: &Self, end: &Self) -> Option<Self::Delta> {
                    Some(end - start)
                }
            }
        )*
    };
}

float_domain!(f32, f64);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xE000;

// Unicode scalar values; the surrogate block is skipped when stepping and
// is not counted by `delta`.
impl Domain for char {
    type Delta = u32;

    #[inline]
    fn delta(start: &Self, end: &Self) -> Option<Self::Delta> {
        let (start, end) = (u32::from(*start), u32::from(*end));
        let raw = end.checked_sub(start)?;
        if start < SURROGATE_START && end >= SURROGATE_END {
            Some(raw - (SURROGATE_END - SURROGATE_START))
        } else {
            Some(raw)
        }
    }

    #[inline]
    fn successor(&self) -> Result<Option<Self>> {
        let next = u32::from(*self) + 1;
        if next == SURROGATE_START {
            Ok(char::from_u32(SURROGATE_END))
        } else {
            Ok(char::from_u32(next))
        }
    }
}

impl Domain for Duration {
    type Delta = Duration;

    #[inline]
    fn delta(start: &Self, end: &Self) -> Option<Self::Delta> {
        end.checked_sub(*start)
    }
}

impl Domain for String {
    type Delta = Infallible;

    #[inline]
    fn delta(_start: &Self, _end: &Self) -> Option<Self::Delta> {
        None
    }
}

impl Domain for &str {
    type Delta = Infallible;

    #[inline]
    fn delta(_start: &Self, _end: &Self) -> Option<Self::Delta> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    #[test]
    fn test_integer_delta() {
        assert_eq!(<i32 as Domain>::delta(&-10, &10), Some(20));
        assert_eq!(<u8 as Domain>::delta(&3, &200), Some(197));
        // Signed span wider than the type.
        assert_eq!(<i8 as Domain>::delta(&-100, &100), None);
    }

    #[test]
    fn test_integer_successor() {
        assert_eq!(7_u16.successor(), Ok(Some(8)));
        assert_eq!((-1_i64).successor(), Ok(Some(0)));
        assert_eq!(u8::MAX.successor(), Ok(None));
    }

    #[test]
    fn test_float_capabilities() {
        assert_eq!(<f64 as Domain>::delta(&1.5, &5.5), Some(4.0));
        assert_eq!(
            2.5_f32.successor(),
            Err(RangeError::UnsupportedOperation {
                operation: "successor",
                domain: "f32",
            })
        );
    }

    #[test]
    fn test_char_skips_surrogates() {
        assert_eq!('a'.successor(), Ok(Some('b')));
        assert_eq!('\u{D7FF}'.successor(), Ok(Some('\u{E000}')));
        assert_eq!(char::MAX.successor(), Ok(None));
        assert_eq!(<char as Domain>::delta(&'a', &'e'), Some(4));
        assert_eq!(<char as Domain>::delta(&'\u{D7FF}', &'\u{E001}'), Some(2));
    }

    #[test]
    fn test_duration_delta() {
        let a = Duration::from_millis(250);
        let b = Duration::from_secs(1);
        assert_eq!(Duration::delta(&a, &b), Some(Duration::from_millis(750)));
        assert_eq!(Duration::delta(&b, &a), None);
    }

    #[test]
    fn test_strings_are_ordered_only() {
        assert!(String::delta(&"a".to_string(), &"b".to_string()).is_none());
        assert!(<&str as Domain>::delta(&"apple", &"pear").is_none());
        assert!("apple".successor().is_err());
        assert!("apple".to_string().successor().is_err());
        assert!(Duration::from_secs(1).successor().is_err());
    }
}
