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

//! Locating and reading puzzle input.

use crate::result::{SpanmapError, SpanmapResult};
use std::path::{Path, PathBuf};

/// File name used when none is given.
pub const DEFAULT_INPUT_NAME: &str = "input.txt";

/// Directory holding one `dayNN` folder per puzzle.
pub const INPUT_ROOT: &str = "inputs";

/// Where a solver reads its input from.
///
/// Built once per run and handed to the solver. An explicit path wins over the
/// `inputs/dayNN/<name>` convention.
///
/// # Examples
///
/// ```rust
/// use spanmap::InputConfig;
/// use std::path::PathBuf;
///
/// let config = InputConfig::new(5);
/// assert_eq!(config.resolve(), PathBuf::from("inputs/day05/input.txt"));
///
/// let config = InputConfig::new(5).with_name("sample.txt");
/// assert_eq!(config.resolve(), PathBuf::from("inputs/day05/sample.txt"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    day: u8,
    name: String,
    path: Option<PathBuf>,
}

impl InputConfig {
    /// Creates a config for `day` using the default file name.
    #[must_use]
    pub fn new(day: u8) -> Self {
        InputConfig {
            day,
            name: DEFAULT_INPUT_NAME.to_string(),
            path: None,
        }
    }

    /// Selects a file name relative to the day's directory.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets an explicit input path, overriding the name.
    #[must_use]
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }

    /// Returns the path the input will be read from.
    #[must_use]
    pub fn resolve(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => Path::new(INPUT_ROOT)
                .join(format!("day{:02}", self.day))
                .join(&self.name),
        }
    }

    /// Reads the resolved input as lines.
    pub fn read_lines(&self) -> SpanmapResult<Vec<String>> {
        read_lines(&self.resolve())
    }
}

/// Reads a whole file and splits it into lines.
pub fn read_lines(path: &Path) -> SpanmapResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| SpanmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(String::from).collect())
}

/// Parses whitespace separated integers. `line` is only used for error reporting.
pub fn parse_numbers(line: usize, text: &str) -> SpanmapResult<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| SpanmapError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}
