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

//! Minimum and maximum over partially ordered values.
//!
//! `std::cmp::{min, max}` require `Ord`, which rules out float domains. These
//! helpers only need `PartialOrd` and keep the first argument whenever the
//! two values are equal or incomparable.

/// Returns the smaller of `a` and `b`, preferring `a` on ties.
///
/// # Examples
///
/// ```rust
/// # use range_algebra::domain::cmp::partial_min;
/// assert_eq!(partial_min(1.5, 0.5), 0.5);
/// assert_eq!(partial_min(2, 7), 2);
/// ```
#[inline]
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Returns the larger of `a` and `b`, preferring `a` on ties.
///
/// # Examples
///
/// ```rust
/// # use range_algebra::domain::cmp::partial_max;
/// assert_eq!(partial_max(1.5, 0.5), 1.5);
/// assert_eq!(partial_max(2, 7), 7);
/// ```
#[inline]
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::{partial_max, partial_min};

    #[test]
    fn test_ordered_values() {
        assert_eq!(partial_min(4, -2), -2);
        assert_eq!(partial_max(4, -2), 4);
        assert_eq!(partial_min("pear", "apple"), "apple");
    }

    #[test]
    fn test_incomparable_keeps_first_argument() {
        assert_eq!(partial_min(3.0, f64::NAN), 3.0);
        assert_eq!(partial_max(3.0, f64::NAN), 3.0);
    }

    #[test]
    fn test_ties_keep_first_argument() {
        assert!(partial_min(0.0_f64, -0.0).is_sign_positive());
        assert!(partial_max(-0.0_f64, 0.0).is_sign_negative());
    }
}
