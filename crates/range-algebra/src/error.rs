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

use thiserror::Error;

/// The error type for range construction and range operations.
///
/// Bounds are captured through their `Debug` rendering, which keeps the error
/// independent of the domain type it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A range was constructed with `start >= end`.
    #[error("invalid range: start ({start}) must be less than end ({end})")]
    InvalidRange { start: String, end: String },

    /// A split point lies outside of the range being split.
    ///
    /// `range` is rendered from the bounds' `Debug` form, so string domains
    /// read `["apple", "pear")` here rather than the `[apple, pear)` produced by
    /// `Range`'s `Display`.
    #[error("point {point} is not in range {range}")]
    PointNotInRange { point: String, range: String },

    /// The domain lacks the capability an operation needs.
    #[error("operation `{operation}` is not supported for domain `{domain}`")]
    UnsupportedOperation {
        operation: &'static str,
        domain: &'static str,
    },
}

impl RangeError {
    pub(crate) fn invalid_range<T: std::fmt::Debug>(start: &T, end: &T) -> Self {
        Self::InvalidRange {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }

    pub(crate) fn point_not_in_range<T: std::fmt::Debug>(
        point: &T,
        start: &T,
        end: &T,
    ) -> Self {
        Self::PointNotInRange {
            point: format!("{point:?}"),
            range: format!("[{start:?}, {end:?})"),
        }
    }

    /// Creates an [`RangeError::UnsupportedOperation`] naming `T` as the domain.
    ///
    /// Custom domains can use this when a capability is only available for
    /// some of their values.
    pub fn unsupported<T: ?Sized>(operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation,
            domain: std::any::type_name::<T>(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::RangeError;

    #[test]
    fn test_invalid_range_message() {
        let err = RangeError::invalid_range(&10, &1);
        assert_eq!(
            err.to_string(),
            "invalid range: start (10) must be less than end (1)"
        );
    }

    #[test]
    fn test_point_not_in_range_message() {
        let err = RangeError::point_not_in_range(&15, &1, &10);
        assert_eq!(err.to_string(), "point 15 is not in range [1, 10)");
    }

    #[test]
    fn test_point_not_in_range_uses_debug_bounds() {
        let err = RangeError::point_not_in_range(&"zebra", &"apple", &"pear");
        assert_eq!(
            err.to_string(),
            r#"point "zebra" is not in range ["apple", "pear")"#
        );
    }

    #[test]
    fn test_unsupported_message_names_domain() {
        let err = RangeError::unsupported::<f64>("iter");
        assert_eq!(
            err,
            RangeError::UnsupportedOperation {
                operation: "iter",
                domain: "f64",
            }
        );
        assert_eq!(
            err.to_string(),
            "operation `iter` is not supported for domain `f64`"
        );
    }
}
