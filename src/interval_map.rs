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

use crate::result::{SpanmapError, SpanmapResult};
use crate::span::Span;
use std::cmp::{max, min};
use std::fmt;

/// An `IntervalMap` stores a set of non-overlapping spans, each carrying a value.
///
/// Entries are kept in a vector sorted by span start, so lookups are a binary search.
/// Points not covered by any span are absent; gaps are never filled in.
///
/// Two maps can be merged with [`IntervalMap::cover`] (union, combining overlapping
/// regions) or [`IntervalMap::intersect`] (overlapping regions only). Both leave their
/// inputs untouched and return a new map.
///
/// # Examples
///
/// ```rust
/// use spanmap::{IntervalMap, Span};
///
/// let mut map = IntervalMap::new();
/// map.add(Span::new(10, 20), 'a');
/// map.add(Span::new(30, 40), 'b');
///
/// assert_eq!(map.get(15), Some(&'a'));
/// assert_eq!(map.get(25), None);
/// assert_eq!(map.get(39), Some(&'b'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalMap<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for IntervalMap<T> {
    fn default() -> Self {
        IntervalMap::new()
    }
}

impl<T> IntervalMap<T> {
    /// Creates an empty `IntervalMap`.
    #[must_use]
    pub fn new() -> Self {
        IntervalMap {
            entries: Vec::new(),
        }
    }

    /// Number of stored spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no spans are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(span, value)` pairs in ascending span order.
    pub fn iter(&self) -> IntervalMapIter<'_, T> {
        IntervalMapIter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the stored spans in ascending order.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.entries.iter().map(|entry| entry.span)
    }

    /// Returns the index of the first entry that contains `value` or starts after it.
    ///
    /// Entries are sorted and disjoint, so every entry ending at or before `value`
    /// precedes that index.
    fn bisect(&self, value: i64) -> usize {
        self.entries.partition_point(|entry| entry.span.hi() <= value)
    }

    /// Returns the value of the span containing `value`, if any.
    #[must_use]
    pub fn get(&self, value: i64) -> Option<&T> {
        self.entries
            .get(self.bisect(value))
            .filter(|entry| entry.span.contains(value))
            .map(|entry| &entry.value)
    }

    /// Returns `true` if some span contains `value`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.get(value).is_some()
    }

    /// Inserts `span` with `value`.
    ///
    /// The entry is placed at the bisection point of `span.lo()`. If the entry found there
    /// overlaps `span` it is replaced in place; otherwise the new entry is inserted before
    /// it. Empty spans are ignored.
    ///
    /// The caller must not pass a span overlapping more than that one entry; doing so
    /// breaks the ordering of the map. Use [`IntervalMap::try_add`] to have overlaps
    /// rejected instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spanmap::{IntervalMap, Span};
    ///
    /// let mut map = IntervalMap::new();
    /// map.add(Span::new(10, 20), 1);
    /// map.add(Span::new(10, 20), 2); // Replaces the coincident entry
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(10), Some(&2));
    /// ```
    pub fn add(&mut self, span: Span, value: T) {
        if span.is_empty() {
            return;
        }

        let index = self.bisect(span.lo());
        match self.entries.get_mut(index) {
            Some(entry) if entry.span.overlaps(&span) => *entry = Entry { span, value },
            _ => self.entries.insert(index, Entry { span, value }),
        }
    }

    /// Inserts `span` with `value`, rejecting spans that overlap any stored entry.
    ///
    /// The map is left unchanged on error. Empty spans are accepted and ignored.
    ///
    /// ```rust
    /// use spanmap::{IntervalMap, Span};
    ///
    /// let mut map = IntervalMap::new();
    /// map.try_add(Span::new(10, 20), ()).unwrap();
    /// assert!(map.try_add(Span::new(15, 25), ()).is_err());
    /// assert!(map.try_add(Span::new(20, 25), ()).is_ok());
    /// ```
    pub fn try_add(&mut self, span: Span, value: T) -> SpanmapResult<()> {
        if span.is_empty() {
            return Ok(());
        }

        let index = self.bisect(span.lo());
        if let Some(entry) = self.entries.get(index) {
            if entry.span.overlaps(&span) {
                return Err(SpanmapError::OverlappingSpan {
                    span,
                    existing: entry.span,
                });
            }
        }
        self.entries.insert(index, Entry { span, value });
        Ok(())
    }

    /// Appends an entry known to start at or after the end of the last one.
    pub(crate) fn push(&mut self, span: Span, value: T) {
        if span.is_empty() {
            return;
        }
        debug_assert!(
            self.entries.last().is_none_or(|last| last.span.hi() <= span.lo()),
            "push out of order: {span}"
        );
        self.entries.push(Entry { span, value });
    }
}

impl<T: PartialEq> IntervalMap<T> {
    /// Merges touching entries that carry equal values.
    ///
    /// ```rust
    /// use spanmap::{IntervalMap, Span};
    ///
    /// let mut map: IntervalMap<i64> = [(Span::new(0, 5), 1), (Span::new(5, 9), 1)]
    ///     .into_iter()
    ///     .collect();
    /// map.coalesce();
    /// assert_eq!(map.to_string(), "{[0,9)->1}");
    /// ```
    pub fn coalesce(&mut self) {
        self.entries.dedup_by(|next, prev| {
            if prev.span.hi() == next.span.lo() && prev.value == next.value {
                prev.span = Span::new(prev.span.lo(), next.span.hi());
                true
            } else {
                false
            }
        });
    }
}

impl<T: Clone> IntervalMap<T> {
    /// Merges `self` and `other` into a map covering the union of their domains.
    ///
    /// Where a span of `self` overlaps a span of `other` the region gets
    /// `combine(self_value, other_value)`; regions covered by only one side keep that
    /// side's value; regions covered by neither stay absent. Covering with an empty map
    /// returns a copy of the other map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spanmap::{IntervalMap, Span};
    ///
    /// let a: IntervalMap<i64> = [(Span::new(0, 10), 1)].into_iter().collect();
    /// let b: IntervalMap<i64> = [(Span::new(5, 15), 10)].into_iter().collect();
    ///
    /// let covered = a.cover(&b, |x, y| x + y);
    /// assert_eq!(covered.to_string(), "{[0,5)->1, [5,10)->11, [10,15)->10}");
    /// ```
    #[must_use]
    pub fn cover<F>(&self, other: &IntervalMap<T>, combine: F) -> IntervalMap<T>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.sweep(other, combine, true)
    }

    /// Returns only the regions covered by both `self` and `other`, each valued
    /// `combine(self_value, other_value)`.
    ///
    /// The result's spans are exactly the non-empty pairwise intersections of the two
    /// maps' spans. Intersecting with an empty map yields an empty map.
    ///
    /// ```rust
    /// use spanmap::{IntervalMap, Span};
    ///
    /// let a: IntervalMap<i64> = [(Span::new(0, 10), 1), (Span::new(20, 30), 2)]
    ///     .into_iter()
    ///     .collect();
    /// let b: IntervalMap<i64> = [(Span::new(5, 25), 10)].into_iter().collect();
    ///
    /// let both = a.intersect(&b, |x, y| x + y);
    /// assert_eq!(both.to_string(), "{[5,10)->11, [20,25)->12}");
    /// ```
    #[must_use]
    pub fn intersect<F>(&self, other: &IntervalMap<T>, combine: F) -> IntervalMap<T>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.sweep(other, combine, false)
    }

    /// Two-pointer sweep shared by `cover` and `intersect`.
    ///
    /// `sweep` is the position up to which output has been produced. An entry that is
    /// partially consumed is read as `[max(lo, sweep), hi)`. Pointers only advance when
    /// the sweep reaches an entry's end, so the sweep never passes the end of an entry
    /// that is still current.
    fn sweep<F>(&self, other: &IntervalMap<T>, mut combine: F, keep_single: bool) -> IntervalMap<T>
    where
        F: FnMut(&T, &T) -> T,
    {
        let left = &self.entries;
        let right = &other.entries;
        let mut out = IntervalMap {
            entries: Vec::with_capacity(left.len() + right.len()),
        };

        let (mut i, mut j) = (0, 0);
        let mut sweep = match (left.first(), right.first()) {
            (Some(a), Some(b)) => min(a.span.lo(), b.span.lo()),
            _ => i64::MIN,
        };

        while i < left.len() && j < right.len() {
            let a = &left[i];
            let b = &right[j];
            let a_lo = max(a.span.lo(), sweep);
            let b_lo = max(b.span.lo(), sweep);

            let left_first = a_lo <= b_lo;
            let (first, first_lo, second, second_lo) = if left_first {
                (a, a_lo, b, b_lo)
            } else {
                (b, b_lo, a, a_lo)
            };

            // Skip the gap, if any
            sweep = first_lo;

            if second_lo < first.span.hi() {
                if keep_single {
                    out.push(Span::new(sweep, second_lo), first.value.clone());
                }
                let end = min(first.span.hi(), second.span.hi());
                out.push(Span::new(second_lo, end), combine(&a.value, &b.value));
                sweep = end;
                if a.span.hi() == end {
                    i += 1;
                }
                if b.span.hi() == end {
                    j += 1;
                }
            } else {
                if keep_single {
                    out.push(Span::new(sweep, first.span.hi()), first.value.clone());
                }
                sweep = first.span.hi();
                if left_first {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }

        if keep_single {
            for entry in left[i..].iter().chain(&right[j..]) {
                let lo = max(entry.span.lo(), sweep);
                out.push(Span::new(lo, entry.span.hi()), entry.value.clone());
            }
        }

        out
    }
}

impl<T> FromIterator<(Span, T)> for IntervalMap<T> {
    /// Builds a map by calling [`IntervalMap::add`] for each pair in order.
    fn from_iter<I: IntoIterator<Item = (Span, T)>>(iter: I) -> Self {
        let mut map = IntervalMap::new();
        for (span, value) in iter {
            map.add(span, value);
        }
        map
    }
}

impl<'a, T> IntoIterator for &'a IntervalMap<T> {
    type Item = (Span, &'a T);
    type IntoIter = IntervalMapIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for IntervalMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", entry.span, entry.value)?;
        }
        write!(f, "}}")
    }
}

/// An in-order iterator over the stored spans and their values.
pub struct IntervalMapIter<'a, T> {
    inner: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for IntervalMapIter<'a, T> {
    type Item = (Span, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.span, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntervalMapIter<'_, T> {}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry<T> {
    span: Span,
    value: T,
}
