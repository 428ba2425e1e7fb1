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

use anyhow::{Context, Result};
use clap::Parser;
use spanmap::{Almanac, DEFAULT_INPUT_NAME, InputConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing::info;

const DAY: u8 = 5;

#[derive(Debug, Parser)]
#[command(name = "day05")]
#[command(about = "Lowest location reachable from the almanac's seeds")]
#[command(version)]
struct Cli {
    /// Input file name, relative to inputs/day05
    #[arg(long, default_value = DEFAULT_INPUT_NAME)]
    name: String,

    /// Explicit input path (overrides --name)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input(&self) -> InputConfig {
        InputConfig::new(DAY)
            .with_name(self.name.clone())
            .with_path(self.path.clone())
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let input = cli.input();
    let path = input.resolve();
    info!(path = %path.display(), "reading almanac");

    let lines = input.read_lines()?;
    let almanac =
        Almanac::parse(&lines).with_context(|| format!("invalid almanac in {}", path.display()))?;
    let answers = almanac.solve()?;

    let part_one = answers
        .lowest_seed_location
        .context("almanac lists no seeds")?;
    let part_two = answers
        .lowest_range_location
        .context("seed ranges are all empty")?;
    println!("{part_one}");
    println!("{part_two}");
    Ok(())
}
