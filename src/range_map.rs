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

//! Additive-offset interval maps used as value remapping stages.

use crate::interval_map::IntervalMap;
use crate::span::Span;
use std::cmp::max;
use tracing::trace;

/// An [`IntervalMap`] whose values are additive offsets.
///
/// A value `x` inside a stored span maps to `x + offset`; values outside every span
/// map to themselves.
///
/// # Examples
///
/// ```rust
/// use spanmap::{RangeMap, Span};
///
/// let mut first = RangeMap::new();
/// first.add(Span::new(10, 13), 5);
/// let mut second = RangeMap::new();
/// second.add(Span::new(12, 15), 100);
///
/// let chain = RangeMap::reduce([&first, &second]);
/// assert_eq!(chain.map(11), 16);  // 11 -> 16, outside [12,15)
/// assert_eq!(chain.map(13), 113); // 13 untouched by `first`, then +100
/// assert_eq!(chain.map(8), 8);
/// ```
pub type RangeMap = IntervalMap<i64>;

impl IntervalMap<i64> {
    /// Builds a zero-offset map over the union of `spans`.
    ///
    /// Spans may come in any order and may overlap; overlapping and touching spans are
    /// merged first.
    ///
    /// ```rust
    /// use spanmap::{RangeMap, Span};
    ///
    /// let map = RangeMap::from_spans([Span::new(15, 25), Span::new(10, 20), Span::new(30, 35)]);
    /// assert_eq!(map.to_string(), "{[10,25)->0, [30,35)->0}");
    /// ```
    pub fn from_spans<I>(spans: I) -> RangeMap
    where
        I: IntoIterator<Item = Span>,
    {
        let mut spans: Vec<Span> = spans
            .into_iter()
            .filter(|span| !span.is_empty())
            .collect();
        spans.sort_unstable_by_key(Span::lo);

        let mut map = RangeMap::new();
        let mut pending: Option<Span> = None;
        for span in spans {
            pending = match pending {
                Some(run) if span.lo() <= run.hi() => {
                    Some(Span::new(run.lo(), max(run.hi(), span.hi())))
                }
                Some(run) => {
                    map.push(run, 0);
                    Some(span)
                }
                None => Some(span),
            };
        }
        if let Some(run) = pending {
            map.push(run, 0);
        }
        map
    }

    /// Applies the map to a single value.
    #[must_use]
    pub fn map(&self, value: i64) -> i64 {
        self.get(value).map_or(value, |offset| value + offset)
    }

    /// Returns the map equivalent to applying `self` and then `next`.
    ///
    /// For every `x`, `self.compose(next).map(x) == next.map(self.map(x))`.
    ///
    /// Each entry of `self` sends its span onto an image shifted by its offset. That image
    /// is covered with `next`, summing offsets where `next` applies, and the pieces are
    /// shifted back onto the entry's own span. Regions outside `self`'s domain are then
    /// filled from `next` as-is.
    #[must_use]
    pub fn compose(&self, next: &RangeMap) -> RangeMap {
        let mut through = RangeMap::new();
        for (span, &offset) in self {
            let mut image = RangeMap::new();
            image.add(span.shift(offset), offset);

            let mapped = image
                .cover(next, |own, theirs| own + theirs)
                .intersect(&image, |total, _| *total);
            for (piece, &total) in &mapped {
                through.push(piece.shift(-offset), total);
            }
        }

        let mut composed = through.cover(next, |own, _| *own);
        composed.coalesce();
        composed
    }

    /// Composes a chain of maps left to right into one map.
    ///
    /// An empty chain yields the empty map, which is the identity.
    pub fn reduce<'a, I>(maps: I) -> RangeMap
    where
        I: IntoIterator<Item = &'a RangeMap>,
    {
        let mut result = RangeMap::new();
        for (stage, map) in maps.into_iter().enumerate() {
            result = result.compose(map);
            trace!(stage, spans = result.len(), "composed {result}");
        }
        result
    }

    /// Returns the smallest value any integer in `inputs` maps to.
    ///
    /// The inputs may overlap. They are turned into a zero-offset map, composed with `self`, and restricted
    /// back to the inputs; each resulting piece has a single offset, so only its lower
    /// bound needs checking. Returns `None` when `inputs` covers nothing.
    ///
    /// ```rust
    /// use spanmap::{RangeMap, Span};
    ///
    /// let mut map = RangeMap::new();
    /// map.add(Span::new(0, 10), 100);
    ///
    /// assert_eq!(map.min_over([Span::new(5, 20)]), Some(10));
    /// assert_eq!(map.min_over([Span::new(2, 4)]), Some(102));
    /// assert_eq!(map.min_over([]), None);
    /// ```
    #[must_use]
    pub fn min_over<I>(&self, inputs: I) -> Option<i64>
    where
        I: IntoIterator<Item = Span>,
    {
        let inputs = RangeMap::from_spans(inputs);
        inputs
            .compose(self)
            .intersect(&inputs, |offset, _| *offset)
            .iter()
            .map(|(span, offset)| span.lo() + offset)
            .min()
    }
}
