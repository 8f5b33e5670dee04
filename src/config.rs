//! Settings for [`ParallelSorter`](crate::ParallelSorter).
//!
//! Defaults come from the machine, environment variables override them:
//!
//! | Variable | Field |
//! |---|---|
//! | `SORT_EXT_PARALLELISM` | `parallelism` |
//! | `SORT_EXT_PARALLEL_THRESHOLD` | `parallel_threshold` |
//! | `SORT_EXT_NUM_THREADS` | `num_threads` |

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::thread;

use crate::error::{Result, SortError};
use crate::parallel::PARALLEL_THRESHOLD;

/// Overrides [`SortConfig::parallelism`].
pub const PARALLELISM_VAR: &str = "SORT_EXT_PARALLELISM";
/// Overrides [`SortConfig::parallel_threshold`].
pub const PARALLEL_THRESHOLD_VAR: &str = "SORT_EXT_PARALLEL_THRESHOLD";
/// Sets [`SortConfig::num_threads`].
pub const NUM_THREADS_VAR: &str = "SORT_EXT_NUM_THREADS";

/// How a [`ParallelSorter`](crate::ParallelSorter) splits work and where the forks run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Budget of concurrent branches, halved at every split. `<= 1` sorts sequentially.
    pub parallelism: usize,
    /// Slices shorter than this are never split.
    pub parallel_threshold: usize,
    /// Size of a dedicated thread pool. `None` runs on rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            parallelism: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            parallel_threshold: PARALLEL_THRESHOLD,
            num_threads: None,
        }
    }
}

impl SortConfig {
    /// Builds a config from the defaults and the `SORT_EXT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`SortConfig::from_env`], but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(parallelism) = parse_var(&lookup, PARALLELISM_VAR)? {
            config.parallelism = parallelism;
        }
        if let Some(threshold) = parse_var(&lookup, PARALLEL_THRESHOLD_VAR)? {
            config.parallel_threshold = threshold;
        }
        if let Some(num_threads) = parse_var(&lookup, NUM_THREADS_VAR)? {
            config.num_threads = Some(num_threads);
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects a `parallel_threshold` below 2 and a zero-sized dedicated pool.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold < 2 {
            return Err(SortError::config(format!(
                "parallel_threshold must be at least 2, got {}",
                self.parallel_threshold
            )));
        }

        if self.num_threads == Some(0) {
            return Err(SortError::config("num_threads must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_var<V>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<V>>
where
    V: FromStr,
    V::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err| SortError::config(format!("{key}={raw:?} is invalid: {err}")))
}
