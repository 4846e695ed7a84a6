//! Times word lookups four ways to show what tree shape does to search speed:
//!
//! 1. a linear scan of the word list,
//! 2. a tree built from a prefix of the list in file order (a chain when the list is sorted),
//! 3. a tree built from the whole list in random order,
//! 4. that same tree after [`rebalance`][crate::linked::Tree::rebalance], with the rebalance
//!    itself counted in the time.
//!
//! # Examples
//!
//! ```
//! use linked_bst::demo::{self, DemoConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let words: Vec<String> = ["apple", "banana", "cherry", "damson"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let config = DemoConfig {
//!     sample_size: 2,
//!     partial_len: 3,
//!     ..DemoConfig::default()
//! };
//!
//! let report = demo::run_with_words(&words, &config, &mut StdRng::seed_from_u64(1));
//! assert_eq!(report.file_order_height, Some(2));
//! assert_eq!(report.rebalanced_height, Some(2));
//! ```

use std::fmt;
use std::fs;
use std::hint::black_box;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::linked::Tree;

/// Word list read when no path is given.
pub const DEFAULT_WORDS_PATH: &str = "words.txt";
/// How many words are looked up in each task by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
/// How many words from the start of the list go into the file order tree by default.
pub const DEFAULT_PARTIAL_LEN: usize = 25_000;

/// Errors raised while setting up the demo.
#[derive(Error, Debug)]
pub enum DemoError {
    /// The word list could not be read.
    #[error("failed to read word list {path:?}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The word list had no non-blank lines.
    #[error("word list {0:?} has no words")]
    EmptyWordList(PathBuf),

    /// A command line argument was unknown, missing its value, or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Settings for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Word list, one word per line.
    pub words_path: PathBuf,
    /// How many words to look up in each task.
    pub sample_size: usize,
    /// How many words from the start of the list make up the file order tree.
    pub partial_len: usize,
    /// Seed for sampling and shuffling. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            sample_size: DEFAULT_SAMPLE_SIZE,
            partial_len: DEFAULT_PARTIAL_LEN,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Builds a config from command line arguments, program name excluded:
    ///
    /// ```text
    /// [WORDS_PATH] [--sample N] [--partial N] [--seed N]
    /// ```
    ///
    /// Anything not given keeps its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::demo::DemoConfig;
    ///
    /// let config = DemoConfig::from_args(["dict.txt", "--seed", "42"]).unwrap();
    ///
    /// assert_eq!(config.words_path.to_str(), Some("dict.txt"));
    /// assert_eq!(config.seed, Some(42));
    /// assert_eq!(config.sample_size, 10_000);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut path_given = false;
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sample" => config.sample_size = parse_value(&arg, args.next())?,
                "--partial" => config.partial_len = parse_value(&arg, args.next())?,
                "--seed" => config.seed = Some(parse_value(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(DemoError::InvalidArgument(format!("unknown flag {flag}")));
                }
                _ if path_given => {
                    return Err(DemoError::InvalidArgument(format!(
                        "unexpected argument {arg:?}"
                    )));
                }
                _ => {
                    config.words_path = PathBuf::from(&arg);
                    path_given = true;
                }
            }
        }
        Ok(config)
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value =
        value.ok_or_else(|| DemoError::InvalidArgument(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| DemoError::InvalidArgument(format!("{flag} expects a number, got {value:?}")))
}

/// Reads a word list: one word per line, surrounding whitespace trimmed, blank lines skipped.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();
    if words.is_empty() {
        return Err(DemoError::EmptyWordList(path.to_path_buf()));
    }

    info!("loaded {} words from {:?}", words.len(), path);
    Ok(words)
}

/// Loads the configured word list and runs every task on it.
pub fn run<R>(config: &DemoConfig, rng: &mut R) -> Result<Report>
where
    R: Rng + ?Sized,
{
    let words = load_words(&config.words_path)?;
    Ok(run_with_words(&words, config, rng))
}

/// Runs every task on an in-memory word list. Sample sizes larger than the list (or the file
/// order prefix) are cut down to fit.
pub fn run_with_words<R>(words: &[String], config: &DemoConfig, rng: &mut R) -> Report
where
    R: Rng + ?Sized,
{
    let sample: Vec<&str> = words
        .choose_multiple(rng, config.sample_size.min(words.len()))
        .map(String::as_str)
        .collect();

    let linear_scan = timed(|| {
        for word in &sample {
            black_box(words.iter().position(|w| w == word));
        }
    });
    debug!("linear scan of {} words done", words.len());

    let prefix = &words[..config.partial_len.min(words.len())];
    let prefix_sample: Vec<&str> = prefix
        .choose_multiple(rng, config.sample_size.min(prefix.len()))
        .map(String::as_str)
        .collect();
    let file_order: Tree<&str> = prefix.iter().map(String::as_str).collect();
    let file_order_height = file_order.height();
    debug!(
        "file order tree: {} words, height {:?}",
        file_order.len(),
        file_order_height
    );
    let file_order_tree = timed(|| find_all(&file_order, &prefix_sample));
    drop(file_order);

    let mut shuffled: Vec<&str> = words.iter().map(String::as_str).collect();
    shuffled.shuffle(rng);
    let mut tree: Tree<&str> = shuffled.into_iter().collect();
    let shuffled_height = tree.height();
    debug!(
        "shuffled tree: {} words, height {:?}",
        tree.len(),
        shuffled_height
    );
    let shuffled_tree = timed(|| find_all(&tree, &sample));

    let rebalanced_tree = timed(|| {
        tree.rebalance();
        find_all(&tree, &sample);
    });
    let rebalanced_height = tree.height();

    Report {
        words: words.len(),
        sampled: sample.len(),
        linear_scan,
        file_order_tree,
        shuffled_tree,
        rebalanced_tree,
        file_order_height,
        shuffled_height,
        rebalanced_height,
    }
}

fn find_all(tree: &Tree<&str>, words: &[&str]) {
    for word in words {
        black_box(tree.find(word));
    }
}

fn timed(f: impl FnOnce()) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}

/// Timings and tree heights from one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Size of the word list.
    pub words: usize,
    /// How many words were looked up per task.
    pub sampled: usize,
    /// Task 1: linear scan of the list.
    pub linear_scan: Duration,
    /// Task 2: lookups in the file order tree.
    pub file_order_tree: Duration,
    /// Task 3: lookups in the shuffled tree.
    pub shuffled_tree: Duration,
    /// Task 4: rebalancing the shuffled tree plus the lookups.
    pub rebalanced_tree: Duration,
    /// Height of the file order tree.
    pub file_order_height: Option<usize>,
    /// Height of the shuffled tree before rebalancing.
    pub shuffled_height: Option<usize>,
    /// Height of the shuffled tree after rebalancing.
    pub rebalanced_height: Option<usize>,
}

/// ANSI escapes for the report.
mod color {
    pub const HEADER: &str = "\x1b[95m";
    pub const CYAN: &str = "\x1b[96m";
    pub const BOLD: &str = "\x1b[1m";
    pub const END: &str = "\x1b[0m";
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use color::*;

        let rule = " - ".repeat(18);
        let rows = [
            (
                format!("search {} random words", self.sampled),
                self.linear_scan,
            ),
            ("search in binary tree".to_string(), self.file_order_tree),
            (
                "finding words in mixed list".to_string(),
                self.shuffled_tree,
            ),
            (
                "search in rebalanced binary tree".to_string(),
                self.rebalanced_tree,
            ),
        ];

        writeln!(f, "{rule}")?;
        writeln!(f, "{HEADER}{:<46}TIME{END}", "RESULTS")?;
        writeln!(f, "{rule}")?;
        for (task, (label, elapsed)) in rows.iter().enumerate() {
            writeln!(
                f,
                "{CYAN} Task {}     {label:<34}{HEADER}{BOLD}{:.6} s{END}",
                task + 1,
                elapsed.as_secs_f64()
            )?;
        }
        writeln!(f, "{rule}")?;
        write!(
            f,
            " {} words; tree heights: file order {}, mixed {}, rebalanced {}",
            self.words,
            height_label(self.file_order_height),
            height_label(self.shuffled_height),
            height_label(self.rebalanced_height),
        )
    }
}

fn height_label(height: Option<usize>) -> String {
    height.map_or_else(|| "-".to_string(), |height| height.to_string())
}
