//! Command-line options and the validated settings built from them

use crate::sorting::Algorithm;
use crate::step::Value;
use crate::structures::StructureKind;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Sorting data shown before the user asks for anything else
pub const DEFAULT_DATA: [Value; 10] = [12, 8, 14, 19, 2, 7, 1, 3, 17, 4];

/// Length of random sorting data when `--size` is not given
pub const RANDOM_SIZE: RangeInclusive<usize> = 5..=15;

/// Range of every randomly generated value
pub const RANDOM_VALUES: RangeInclusive<Value> = 1..=20;

/// How many values a freshly created structure is seeded with
pub const STRUCTURE_SEED_COUNT: usize = 7;

/// How many values `r` adds to an existing structure
pub const STRUCTURE_TOP_UP: RangeInclusive<usize> = 3..=8;

pub const DEFAULT_DELAY_MS: u64 = 500;

pub const DEFAULT_HISTORY_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{0}' in --data: expected comma-separated integers")]
    InvalidData(String),

    #[error("--data must contain at least one value")]
    EmptyData,

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown data structure '{0}'")]
    UnknownStructure(String),

    #[error("--size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Animate sorting algorithms
    #[default]
    Sort,
    /// Animate data-structure operations
    Structure,
}

/// sortty - watch sorting algorithms and data structures work, one step at a time
#[derive(Parser, Debug)]
#[command(name = "sortty")]
#[command(about = "Step-by-step sorting algorithm and data structure visualizer")]
#[command(version)]
pub struct Cli {
    /// What to show first
    #[arg(long, value_enum, default_value_t = Mode::Sort)]
    pub mode: Mode,

    /// Sorting algorithm (bubble, insertion, selection, quick, merge)
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: String,

    /// Data structure (list, stack, queue, tree, array, heap)
    #[arg(short, long, default_value = "list")]
    pub structure: String,

    /// Comma-separated values to sort, e.g. 5,3,8
    #[arg(short, long, allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Generate this many random values instead of the default data
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for random data, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between steps while playing, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Memory budget for recorded frames, in bytes
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Print the run as JSON lines instead of opening the interface
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file (the interface owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub structure: StructureKind,
    pub data: Vec<Value>,
    pub delay: Duration,
    pub seed: Option<u64>,
    pub history_limit: usize,
    pub dump: bool,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let algorithm = cli
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| ConfigError::UnknownAlgorithm(cli.algorithm.clone()))?;
        let structure = cli
            .structure
            .parse::<StructureKind>()
            .map_err(|_| ConfigError::UnknownStructure(cli.structure.clone()))?;

        let data = match (&cli.data, cli.size) {
            (Some(raw), _) => parse_data(raw)?,
            (None, Some(size)) => {
                let max = *RANDOM_SIZE.end() * 10;
                if size == 0 || size > max {
                    return Err(ConfigError::InvalidSize { size, max });
                }
                random_values(&mut make_rng(cli.seed), size)
            }
            (None, None) if cli.seed.is_some() => random_data(&mut make_rng(cli.seed)),
            (None, None) => DEFAULT_DATA.to_vec(),
        };

        Ok(Settings {
            mode: cli.mode,
            algorithm,
            structure,
            data,
            delay: Duration::from_millis(cli.delay_ms),
            seed: cli.seed,
            history_limit: cli.history_limit,
            dump: cli.dump,
            log_file: cli.log_file,
        })
    }

    /// Random source for this session
    pub fn rng(&self) -> StdRng {
        make_rng(self.seed)
    }
}

/// Parse `--data`, e.g. `"5, 3,8"`
pub fn parse_data(raw: &str) -> Result<Vec<Value>, ConfigError> {
    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Value>()
                .map_err(|_| ConfigError::InvalidData(part.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ConfigError::EmptyData);
    }
    Ok(values)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Random sorting data of random length
pub fn random_data(rng: &mut impl Rng) -> Vec<Value> {
    let size = rng.gen_range(RANDOM_SIZE);
    random_values(rng, size)
}

pub fn random_values(rng: &mut impl Rng, count: usize) -> Vec<Value> {
    (0..count).map(|_| rng.gen_range(RANDOM_VALUES)).collect()
}
