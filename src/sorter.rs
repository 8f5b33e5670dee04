//! A reusable sorter that carries its own [`SortConfig`] and, optionally, its own rayon pool.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::SortConfig;
use crate::error::Result;
use crate::parallel::{par_merge_sort, Fallback};

/// Runs the parallel merge sort under a [`SortConfig`].
///
/// With `num_threads` set the sorter owns a dedicated rayon pool and all forked halves run on it.
/// Otherwise work lands on rayon's global pool, like [`par_sort_by`](crate::par_sort_by).
pub struct ParallelSorter {
    config: SortConfig,
    pool: Option<ThreadPool>,
}

impl ParallelSorter {
    /// Validates `config` and builds the dedicated pool if `num_threads` is set.
    ///
    /// Pool threads are named `sort-ext-{index}`.
    pub fn new(config: SortConfig) -> Result<Self> {
        config.validate()?;

        let pool = match config.num_threads {
            Some(num_threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|i| format!("sort-ext-{i}"))
                    .build()?;
                tracing::debug!(
                    num_threads,
                    parallelism = config.parallelism,
                    parallel_threshold = config.parallel_threshold,
                    "built dedicated sort pool"
                );
                Some(pool)
            }
            None => None,
        };

        Ok(Self { config, pool })
    }

    /// Builds a sorter from [`SortConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(SortConfig::from_env()?)
    }

    /// The validated configuration this sorter runs with.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `v` in place, unstable. See [`par_sort_by`](crate::par_sort_by).
    pub fn sort_by<T, F>(&self, v: &mut [T], is_less: F)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        self.run(v, &is_less, Fallback::Unstable);
    }

    /// Sorts `v` in place, keeping equal elements in order. See
    /// [`par_stable_sort_by`](crate::par_stable_sort_by).
    pub fn stable_sort_by<T, F>(&self, v: &mut [T], is_less: F)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        self.run(v, &is_less, Fallback::Stable);
    }

    /// Sorts `v` in place in ascending order, unstable.
    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord + Send,
    {
        self.sort_by(v, |a: &T, b: &T| a.lt(b));
    }

    fn run<T, F>(&self, v: &mut [T], is_less: &F, fallback: Fallback)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        let SortConfig {
            parallelism,
            parallel_threshold,
            ..
        } = self.config;

        tracing::trace!(len = v.len(), parallelism, ?fallback, "sorter run");

        match &self.pool {
            Some(pool) => pool.install(|| {
                par_merge_sort(v, is_less, parallelism, parallel_threshold, fallback)
            }),
            None => par_merge_sort(v, is_less, parallelism, parallel_threshold, fallback),
        }
    }
}
