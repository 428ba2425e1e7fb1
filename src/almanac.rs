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

//! Seed almanac: a list of seeds followed by blocks of remapping rules.
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Each rule `dest src len` sends `[src, src + len)` onto `[dest, dest + len)`. Values not
//! covered by any rule in a block pass through unchanged.

use crate::input::parse_numbers;
use crate::range_map::RangeMap;
use crate::result::{SpanmapError, SpanmapResult};
use crate::span::Span;
use std::str::FromStr;
use tracing::debug;

/// One rule block, e.g. `seed-to-soil`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    name: String,
    map: RangeMap,
}

impl Stage {
    /// Header text without the trailing ` map:`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules of this block as an offset map.
    #[must_use]
    pub fn map(&self) -> &RangeMap {
        &self.map
    }
}

/// Both puzzle answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Lowest location over the individual seeds.
    pub lowest_seed_location: Option<i64>,
    /// Lowest location over the seed ranges.
    pub lowest_range_location: Option<i64>,
}

/// A parsed almanac.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<Stage>,
}

impl Almanac {
    /// Parses the almanac from its lines.
    ///
    /// The first line must be `seeds: ...`. Blank lines are skipped, a line ending in `:`
    /// opens a new block, and every other line is a `dest src len` rule of the current
    /// block. Rule numbers must be non-negative and both ranges must fit in `i64`; this
    /// keeps every mapped value and composed offset inside `i64`. Rules overlapping an
    /// earlier rule of the same block are rejected.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> SpanmapResult<Self> {
        let (first, rest) = lines.split_first().ok_or(SpanmapError::MissingSeeds)?;
        let seeds = match first.as_ref().trim().strip_prefix("seeds:") {
            Some(numbers) => parse_numbers(1, numbers)?,
            None => return Err(SpanmapError::MissingSeeds),
        };
        if seeds.is_empty() {
            return Err(SpanmapError::MissingSeeds);
        }

        let mut stages: Vec<Stage> = Vec::new();
        for (index, text) in rest.iter().enumerate() {
            let line = index + 2;
            let text = text.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            if let Some(header) = text.strip_suffix(':') {
                let name = header.strip_suffix(" map").unwrap_or(header);
                stages.push(Stage {
                    name: name.to_string(),
                    map: RangeMap::new(),
                });
                continue;
            }

            let stage = stages
                .last_mut()
                .ok_or(SpanmapError::RuleOutsideBlock(line))?;
            let &[dest, src, len] = parse_numbers(line, text)?.as_slice() else {
                return Err(SpanmapError::MalformedRule {
                    line,
                    text: text.to_string(),
                });
            };
            if dest < 0 || src < 0 || len < 0 {
                return Err(SpanmapError::MalformedRule {
                    line,
                    text: text.to_string(),
                });
            }
            let (Some(span), Some(_)) = (Span::checked_with_len(src, len), dest.checked_add(len))
            else {
                return Err(SpanmapError::NumberOverflow { line });
            };
            stage.map.try_add(span, dest - src)?;
        }

        debug!(seeds = seeds.len(), stages = stages.len(), "parsed almanac");
        Ok(Almanac { seeds, stages })
    }

    /// Seed numbers in input order.
    #[must_use]
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    /// Rule blocks in input order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Reads the seed list as `start len` pairs.
    ///
    /// Ranges may overlap. A negative start or length, or an end past `i64::MAX`, is an
    /// error.
    pub fn seed_ranges(&self) -> SpanmapResult<Vec<Span>> {
        if self.seeds.len() % 2 != 0 {
            return Err(SpanmapError::OddSeedCount(self.seeds.len()));
        }
        self.seeds
            .chunks_exact(2)
            .map(|pair| {
                let (start, len) = (pair[0], pair[1]);
                Span::checked_with_len(start, len)
                    .filter(|_| start >= 0)
                    .ok_or(SpanmapError::InvalidSeedRange { start, len })
            })
            .collect()
    }

    /// Composes every block into the single seed-to-location map.
    #[must_use]
    pub fn chain(&self) -> RangeMap {
        RangeMap::reduce(self.stages.iter().map(Stage::map))
    }

    /// Computes both answers through one composed map.
    pub fn solve(&self) -> SpanmapResult<Answers> {
        let chain = self.chain();
        debug!(spans = chain.len(), "composed seed-to-location map");

        let lowest_seed_location = self.seeds.iter().map(|&seed| chain.map(seed)).min();
        let lowest_range_location = chain.min_over(self.seed_ranges()?);
        Ok(Answers {
            lowest_seed_location,
            lowest_range_location,
        })
    }
}

impl FromStr for Almanac {
    type Err = SpanmapError;

    fn from_str(text: &str) -> SpanmapResult<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Almanac::parse(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn test_parse_sample() {
        let almanac: Almanac = SAMPLE.parse().unwrap();
        assert_eq!(almanac.seeds(), &[79, 14, 55, 13]);
        assert_eq!(almanac.stages().len(), 7);
        assert_eq!(almanac.stages()[0].name(), "seed-to-soil");
        assert_eq!(
            almanac.stages()[0].map().to_string(),
            "{[50,98)->2, [98,100)->-48}"
        );
        assert_eq!(
            almanac.seed_ranges().unwrap(),
            vec![Span::new(79, 93), Span::new(55, 68)]
        );
    }

    #[test]
    fn test_solve_sample() {
        let almanac: Almanac = SAMPLE.parse().unwrap();
        assert_eq!(
            almanac.solve().unwrap(),
            Answers {
                lowest_seed_location: Some(35),
                lowest_range_location: Some(46),
            }
        );
    }

    #[test]
    fn test_chain_matches_stage_by_stage() {
        let almanac: Almanac = SAMPLE.parse().unwrap();
        let chain = almanac.chain();
        for seed in 0..110 {
            let expected = almanac
                .stages()
                .iter()
                .fold(seed, |value, stage| stage.map().map(value));
            assert_eq!(chain.map(seed), expected, "seed = {seed}");
        }
    }

    #[test]
    fn test_missing_seeds() {
        assert!(matches!(
            "seed-to-soil map:\n1 2 3".parse::<Almanac>(),
            Err(SpanmapError::MissingSeeds)
        ));
        assert!(matches!("".parse::<Almanac>(), Err(SpanmapError::MissingSeeds)));
        assert!(matches!("seeds:".parse::<Almanac>(), Err(SpanmapError::MissingSeeds)));
    }

    #[test]
    fn test_rule_before_header() {
        assert!(matches!(
            "seeds: 1 2\n\n1 2 3".parse::<Almanac>(),
            Err(SpanmapError::RuleOutsideBlock(3))
        ));
    }

    #[test]
    fn test_malformed_rule() {
        match "seeds: 1 2\na map:\n1 2".parse::<Almanac>() {
            Err(SpanmapError::MalformedRule { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "1 2");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_overlapping_rules_rejected() {
        assert!(matches!(
            "seeds: 1 2\na map:\n0 10 5\n0 12 5".parse::<Almanac>(),
            Err(SpanmapError::OverlappingSpan { .. })
        ));
    }

    #[test]
    fn test_odd_seed_count() {
        let almanac: Almanac = "seeds: 1 2 3\na map:\n0 10 5".parse().unwrap();
        assert!(matches!(
            almanac.seed_ranges(),
            Err(SpanmapError::OddSeedCount(3))
        ));
        assert!(almanac.solve().is_err());
    }

    #[test]
    fn test_overlapping_seed_ranges() {
        // [10,20) and [15,25) overlap; the union starts at 10
        let almanac: Almanac = "seeds: 10 10 15 10".parse().unwrap();
        assert_eq!(almanac.solve().unwrap().lowest_range_location, Some(10));

        let almanac: Almanac = "seeds: 15 10 10 10\na map:\n100 10 2".parse().unwrap();
        assert_eq!(almanac.solve().unwrap().lowest_range_location, Some(12));
    }

    #[test]
    fn test_rule_overflow_is_an_error() {
        assert!(matches!(
            "seeds: 1 2\na map:\n0 9223372036854775800 100".parse::<Almanac>(),
            Err(SpanmapError::NumberOverflow { line: 3 })
        ));
        assert!(matches!(
            "seeds: 1 2\na map:\n9223372036854775800 0 100".parse::<Almanac>(),
            Err(SpanmapError::NumberOverflow { line: 3 })
        ));
        assert!(
            "seeds: 1 2\na map:\n0 9223372036854775800 7"
                .parse::<Almanac>()
                .is_ok()
        );
    }

    #[test]
    fn test_negative_rule_numbers_rejected() {
        for rule in ["0 10 -5", "-1 10 5", "0 -10 5"] {
            match format!("seeds: 1 2\na map:\n{rule}").parse::<Almanac>() {
                Err(SpanmapError::MalformedRule { line, text }) => {
                    assert_eq!(line, 3);
                    assert_eq!(text, rule);
                }
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_seed_ranges() {
        let almanac: Almanac = "seeds: 10 -5".parse().unwrap();
        assert!(matches!(
            almanac.seed_ranges(),
            Err(SpanmapError::InvalidSeedRange { start: 10, len: -5 })
        ));
        assert!(almanac.solve().is_err());

        let almanac: Almanac = "seeds: -3 5".parse().unwrap();
        assert!(matches!(
            almanac.seed_ranges(),
            Err(SpanmapError::InvalidSeedRange { start: -3, len: 5 })
        ));

        let almanac: Almanac = "seeds: 9223372036854775800 100".parse().unwrap();
        assert!(matches!(
            almanac.seed_ranges(),
            Err(SpanmapError::InvalidSeedRange { .. })
        ));
    }

    #[test]
    fn test_no_stages_is_identity() {
        let almanac: Almanac = "seeds: 40 5 10 3".parse().unwrap();
        let answers = almanac.solve().unwrap();
        assert_eq!(answers.lowest_seed_location, Some(3));
        assert_eq!(answers.lowest_range_location, Some(10));
    }
}
