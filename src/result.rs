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

//! Error types and results for the Spanmap library.

use crate::span::Span;
use std::path::PathBuf;

/// A specialized Result type for Spanmap operations.
pub type SpanmapResult<T> = Result<T, SpanmapError>;

/// Errors that can occur during Spanmap operations.
#[derive(Debug, thiserror::Error)]
pub enum SpanmapError {
    /// A checked insert was given a span overlapping an existing entry.
    #[error("span {span} overlaps existing span {existing}")]
    OverlappingSpan {
        /// The span being inserted.
        span: Span,
        /// The first stored span it collides with.
        existing: Span,
    },
    /// The input file could not be read.
    #[error("failed to read input {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The input does not start with a `seeds:` line.
    #[error("input does not start with a `seeds:` line")]
    MissingSeeds,
    /// Seed ranges are given as `start len` pairs and the count was odd.
    #[error("seed list has {0} numbers, expected start/length pairs")]
    OddSeedCount(usize),
    /// A token that should have been an integer was not.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A rule line did not have exactly three numbers.
    #[error("line {line}: expected `dest src len`, got `{text}`")]
    MalformedRule {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// A rule's source or destination range does not fit in `i64`.
    #[error("line {line}: rule range exceeds the i64 range")]
    NumberOverflow {
        /// One-based line number.
        line: usize,
    },
    /// A seed `start len` pair is negative or its end does not fit in `i64`.
    #[error("invalid seed range `{start} {len}`")]
    InvalidSeedRange {
        /// First seed of the range.
        start: i64,
        /// Number of seeds in the range.
        len: i64,
    },
    /// A rule line appeared before any `... map:` header.
    #[error("line {0}: rule appears before any map header")]
    RuleOutsideBlock(usize),
}
