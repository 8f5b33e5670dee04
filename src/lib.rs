//! Sorting utilities built around a fork-join parallel merge sort.
//!
//! The centre piece is [`par_sort_by`], which sorts a caller owned slice in place, splitting the
//! work across rayon tasks while the parallelism budget allows it. Around it sit the sequential
//! fallbacks, a handful of search helpers and [`ParallelSorter`], which runs the parallel sort
//! under a [`SortConfig`] and optionally inside its own thread pool.
//!
//! All sort functions take an `is_less` predicate that must describe a strict weak ordering. An
//! inconsistent predicate leaves the slice in an unspecified order, but it always remains a
//! permutation of the input and the call never panics on its own.

pub mod config;
pub mod error;
mod merge;
pub mod parallel;
pub mod search;
pub mod sequential;
pub mod sorter;

pub use config::SortConfig;
pub use error::{Result, SortError};
pub use parallel::{par_sort, par_sort_by, par_stable_sort_by, PARALLEL_THRESHOLD};
pub use search::{binary_search_by, dedup_sorted, is_sorted_by};
pub use sorter::ParallelSorter;
