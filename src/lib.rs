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

//! # Spanmap
//!
//! A Rust library for mapping half-open integer spans to values, and for composing chains of
//! range-remapping rules without enumerating the values they cover.
//!
//! ## Key Features
//!
//! - **Sorted Disjoint Storage**: Spans are kept ordered and non-overlapping, lookups are a binary search
//! - **Cover**: Sweep-line union of two maps, combining values where spans overlap
//! - **Intersect**: Overlap-only combination of two maps
//! - **Offset Maps**: `RangeMap` treats values as additive offsets and composes stage after stage
//! - **Range Minimum**: Finds the lowest image of whole input ranges in one pass over the composed map
//!
//! ## Usage Examples
//!
//! ### Basic IntervalMap Usage
//!
//! ```rust
//! use spanmap::{IntervalMap, Span};
//!
//! let mut labels = IntervalMap::new();
//! labels.add(Span::new(0, 10), "low");
//! labels.add(Span::new(20, 30), "high");
//!
//! assert_eq!(labels.get(5), Some(&"low"));
//! assert_eq!(labels.get(15), None);
//!
//! let other: IntervalMap<&str> = [(Span::new(5, 25), "mid")].into_iter().collect();
//! let merged = labels.cover(&other, |mine, _| *mine);
//! assert_eq!(merged.get(15), Some(&"mid"));
//! assert_eq!(merged.get(7), Some(&"low"));
//! ```
//!
//! ### Composing Remapping Stages
//!
//! ```rust
//! use spanmap::{RangeMap, Span};
//!
//! let mut seed_to_soil = RangeMap::new();
//! seed_to_soil.add(Span::new(98, 100), -48);
//! seed_to_soil.add(Span::new(50, 98), 2);
//!
//! let mut soil_to_water = RangeMap::new();
//! soil_to_water.add(Span::new(0, 60), 1000);
//!
//! let chain = RangeMap::reduce([&seed_to_soil, &soil_to_water]);
//! assert_eq!(chain.map(99), 1051);
//! assert_eq!(chain.map(55), 1057);
//! assert_eq!(chain.map(58), 60);
//! assert_eq!(chain.min_over([Span::new(55, 60), Span::new(98, 100)]), Some(60));
//! ```
//!
//! ## Error Handling
//!
//! The map operations themselves cannot fail. Fallible operations return
//! `SpanmapResult<T>`, which can contain the following errors:
//!
//! - `SpanmapError::OverlappingSpan`: A checked insert collided with a stored span
//! - `SpanmapError::Io`: The input file could not be read
//! - `SpanmapError::MissingSeeds`, `InvalidNumber`, `MalformedRule`, `RuleOutsideBlock`,
//!   `OddSeedCount`: The almanac text is malformed
//! - `SpanmapError::NumberOverflow`, `InvalidSeedRange`: A rule or seed range is negative or
//!   reaches past `i64::MAX`
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod almanac;
mod input;
mod interval_map;
mod range_map;
mod result;
mod span;
#[cfg(test)]
mod testing;

pub use self::almanac::{Almanac, Answers, Stage};
pub use self::input::{DEFAULT_INPUT_NAME, INPUT_ROOT, InputConfig, parse_numbers, read_lines};
pub use self::interval_map::{IntervalMap, IntervalMapIter};
pub use self::range_map::RangeMap;
pub use self::result::{SpanmapError, SpanmapResult};
pub use self::span::Span;
