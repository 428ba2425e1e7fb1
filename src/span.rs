//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Half-open integer spans.

use std::cmp::{max, min};
use std::fmt;
use std::ops::Range;

/// A half-open interval `[lo, hi)` over `i64`.
///
/// A span with `lo == hi` is empty. Empty spans are returned by [`Span::intersect`] when
/// two spans do not overlap and are never stored in an [`IntervalMap`](crate::IntervalMap).
///
/// # Examples
///
/// ```rust
/// use spanmap::Span;
///
/// let span = Span::new(10, 20);
/// assert!(span.contains(10));
/// assert!(!span.contains(20));
/// assert_eq!(span.to_string(), "[10,20)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    lo: i64,
    hi: i64,
}

impl Span {
    /// Creates the span `[lo, hi)`.
    ///
    /// An inverted pair (`hi < lo`) is collapsed to the empty span at `lo`.
    #[must_use]
    pub fn new(lo: i64, hi: i64) -> Self {
        Span { lo, hi: max(lo, hi) }
    }

    /// Creates the span `[start, start + len)`, saturating at `i64::MAX`.
    #[must_use]
    pub fn with_len(start: i64, len: i64) -> Self {
        Span::new(start, start.saturating_add(len))
    }

    /// Creates the span `[start, start + len)`.
    ///
    /// Returns `None` for a negative `len` or when the end does not fit in `i64`.
    ///
    /// ```rust
    /// use spanmap::Span;
    ///
    /// assert_eq!(Span::checked_with_len(10, 5), Some(Span::new(10, 15)));
    /// assert_eq!(Span::checked_with_len(10, -5), None);
    /// assert_eq!(Span::checked_with_len(i64::MAX - 1, 2), None);
    /// ```
    #[must_use]
    pub fn checked_with_len(start: i64, len: i64) -> Option<Self> {
        if len < 0 {
            return None;
        }
        start.checked_add(len).map(|hi| Span { lo: start, hi })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Number of integers covered by the span.
    #[must_use]
    pub fn len(&self) -> i64 {
        self.hi - self.lo
    }

    /// Returns `true` if the span covers no integers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns `true` if `lo <= value < hi`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value < self.hi
    }

    /// Returns `true` if the two spans share at least one integer.
    ///
    /// Adjacent spans such as `[0,10)` and `[10,20)` do not overlap.
    ///
    /// ```rust
    /// use spanmap::Span;
    ///
    /// assert!(Span::new(0, 10).overlaps(&Span::new(9, 20)));
    /// assert!(!Span::new(0, 10).overlaps(&Span::new(10, 20)));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        !(other.hi <= self.lo || other.lo >= self.hi)
    }

    /// Returns the span covered by both `self` and `other`.
    ///
    /// When the spans do not overlap the result is empty; check [`Span::is_empty`]
    /// before treating it as a real interval.
    ///
    /// ```rust
    /// use spanmap::Span;
    ///
    /// assert_eq!(Span::new(0, 10).intersect(&Span::new(5, 20)), Span::new(5, 10));
    /// assert!(Span::new(0, 10).intersect(&Span::new(30, 40)).is_empty());
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Span) -> Span {
        let lo = max(self.lo, other.lo);
        let hi = min(self.hi, other.hi);
        if hi < lo {
            Span { lo, hi: lo }
        } else {
            Span { lo, hi }
        }
    }

    /// Moves both bounds by `delta`.
    #[must_use]
    pub fn shift(&self, delta: i64) -> Span {
        Span {
            lo: self.lo + delta,
            hi: self.hi + delta,
        }
    }

    /// Converts to a standard library range.
    #[must_use]
    pub fn as_range(&self) -> Range<i64> {
        self.lo..self.hi
    }
}

impl From<Range<i64>> for Span {
    fn from(range: Range<i64>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let span = Span::new(10, 13);
        assert!(!span.contains(9));
        assert!(span.contains(10));
        assert!(span.contains(12));
        assert!(!span.contains(13));
    }

    #[test]
    fn test_empty_span_contains_nothing() {
        let span = Span::new(5, 5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[test]
    fn test_inverted_bounds_collapse() {
        let span = Span::new(20, 10);
        assert!(span.is_empty());
        assert_eq!(span.lo(), 20);
    }

    #[test]
    fn test_overlaps() {
        let span = Span::new(10, 20);
        assert!(span.overlaps(&Span::new(15, 25))); // Right overlap
        assert!(span.overlaps(&Span::new(5, 15))); // Left overlap
        assert!(span.overlaps(&Span::new(12, 18))); // Inner
        assert!(span.overlaps(&Span::new(0, 30))); // Outer
        assert!(!span.overlaps(&Span::new(20, 30))); // Adjacent after
        assert!(!span.overlaps(&Span::new(0, 10))); // Adjacent before
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = Span::new(10, 20);
        assert_eq!(a.intersect(&Span::new(15, 25)), Span::new(15, 20));
        assert_eq!(a.intersect(&Span::new(12, 18)), Span::new(12, 18));
        assert_eq!(a.intersect(&a), a);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Span::new(10, 20);
        let b = Span::new(30, 40);
        let ab = a.intersect(&b);
        assert!(ab.is_empty());
        assert_eq!(ab.lo(), ab.hi());
        assert!(b.intersect(&a).is_empty());
        assert!(a.intersect(&Span::new(20, 30)).is_empty());
    }

    #[test]
    fn test_with_len_near_limits() {
        assert_eq!(Span::with_len(i64::MAX - 10, 100), Span::new(i64::MAX - 10, i64::MAX));
        assert_eq!(Span::checked_with_len(i64::MAX - 10, 100), None);
        assert_eq!(
            Span::checked_with_len(i64::MAX - 10, 10),
            Some(Span::new(i64::MAX - 10, i64::MAX))
        );
        assert_eq!(Span::checked_with_len(3, 0), Some(Span::new(3, 3)));
        assert_eq!(Span::checked_with_len(3, -1), None);
    }

    #[test]
    fn test_shift_and_display() {
        assert_eq!(Span::new(10, 13).shift(5), Span::new(15, 18));
        assert_eq!(Span::new(10, 13).shift(-20).to_string(), "[-10,-7)");
        assert_eq!(Span::with_len(79, 14), Span::new(79, 93));
        assert_eq!(Span::from(3..7).as_range(), 3..7);
    }
}
