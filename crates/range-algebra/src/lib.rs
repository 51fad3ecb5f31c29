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

//! Half-open range algebra over ordered value domains.
//!
//! The crate is built from three layers. [`domain::Domain`] describes what a
//! bound type can do: every domain is ordered, while subtraction (for a
//! length) and unit stepping (for enumeration) are optional capabilities a
//! domain may or may not provide. [`range::Range`] is a single non-empty
//! interval `[start, end)` over such a domain, and
//! [`container::RangeContainer`] is a named collection of ranges with
//! set-like queries on top: merging, gap detection, coverage and lookup.
//!
//! ```rust
//! use range_algebra::{container::RangeContainer, range::Range};
//!
//! let mut container = RangeContainer::new("shifts");
//! container.add_ranges([
//!     Range::new(1, 10).unwrap(),
//!     Range::new(5, 15).unwrap(),
//!     Range::new(20, 25).unwrap(),
//! ]);
//!
//! let merged = container.merge_overlapping_ranges();
//! assert_eq!(merged.name(), "shifts_merged");
//! assert_eq!(
//!     merged.ranges(),
//!     &[Range::new(1, 15).unwrap(), Range::new(20, 25).unwrap()]
//! );
//! assert_eq!(container.gaps(), vec![Range::new(15, 20).unwrap()]);
//! ```

pub mod container;
pub mod domain;
pub mod error;
pub mod range;
