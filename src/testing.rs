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

//! Deterministic generators shared by the unit tests.

use crate::interval_map::IntervalMap;
use crate::span::Span;

/// Small linear congruential generator so property checks are reproducible.
pub(crate) struct Lcg(pub(crate) u64);

impl Lcg {
    /// Returns a value in `[0, bound)`.
    pub(crate) fn next(&mut self, bound: i64) -> i64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as i64
    }

    /// Disjoint spans laid out left to right below `limit`.
    ///
    /// Span lengths are in `[1, max_len]` and gaps in `[0, max_gap)`. Roughly one span in
    /// `skip_one_in` is left out, and each kept span takes its value from `value`.
    pub(crate) fn disjoint<F>(
        &mut self,
        limit: i64,
        max_len: i64,
        max_gap: i64,
        skip_one_in: i64,
        mut value: F,
    ) -> IntervalMap<i64>
    where
        F: FnMut(&mut Self) -> i64,
    {
        let mut map = IntervalMap::new();
        let mut at = self.next(10);
        while at < limit {
            let len = 1 + self.next(max_len);
            if self.next(skip_one_in) > 0 {
                let value = value(self);
                map.add(Span::new(at, at + len), value);
            }
            at += len + self.next(max_gap);
        }
        map
    }
}
