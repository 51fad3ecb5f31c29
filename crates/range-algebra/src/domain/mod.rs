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

//! # Ordered Value Domains
//!
//! A [`Domain`] is any type that can bound a range. Ordering is the only
//! mandatory capability; the rest are opt-in:
//!
//! - **Distance**: [`Domain::delta`] computes `end - start`. Domains without
//!   a notion of distance return `None`, which surfaces as an absent
//!   [`Range::length`](crate::range::Range::length) rather than an error.
//! - **Stepping**: enumerable domains override [`Domain::successor`]. The
//!   default implementation reports the capability as unsupported, and
//!   ranges over such a domain refuse to iterate.
//!
//! Implementations are provided for the primitive integers and floats,
//! `char`, `Duration`, `String` and `&str`. Custom domains implement the trait
//! directly:
//!
//! ```rust
//! use range_algebra::{domain::Domain, error::Result, range::Range};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! struct Floor(u8);
//!
//! impl Domain for Floor {
//!     type Delta = u8;
//!
//!     fn delta(start: &Self, end: &Self) -> Option<u8> {
//!         end.0.checked_sub(start.0)
//!     }
//!
//!     fn successor(&self) -> Result<Option<Self>> {
//!         Ok(self.0.checked_add(1).map(Floor))
//!     }
//! }
//!
//! let lobby_to_roof = Range::new(Floor(0), Floor(3)).unwrap();
//! assert_eq!(lobby_to_roof.length(), Some(3));
//! assert_eq!(
//!     lobby_to_roof.iter().unwrap().collect::<Vec<_>>(),
//!     vec![Floor(0), Floor(1), Floor(2)]
//! );
//! ```

pub mod cmp;
mod primitive;

use crate::error::{RangeError, Result};
use std::fmt::Debug;

/// A totally ordered value type that can bound a [`Range`](crate::range::Range).
///
/// The order given by `PartialOrd` must be total over every value that is
/// used as a bound. Values that compare as unordered (such as a float `NaN`)
/// can never form a valid range, since `start < end` does not hold for them.
pub trait Domain: PartialOrd + Clone + Debug {
    /// The type of the distance `end - start`.
    type Delta;

    /// Returns `end - start`, or `None` if the domain cannot measure distances
    /// or the subtraction overflows.
    fn delta(start: &Self, end: &Self) -> Option<Self::Delta>;

    /// Returns the value immediately following `self`, or `Ok(None)` past the
    /// domain's maximum.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`RangeError::UnsupportedOperation`];
    /// only enumerable domains override it.
    #[inline]
    fn successor(&self) -> Result<Option<Self>> {
        Err(RangeError::unsupported::<Self>("successor"))
    }
}
