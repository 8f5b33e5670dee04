//! Fork-join parallel merge sort.
//!
//! The slice is split in half, the halves are sorted concurrently as rayon tasks and then merged
//! back in place. Every split halves the parallelism budget, so task creation stops after
//! `log2(parallelism)` levels and the remaining work runs on the sequential fallback.
//!
//! The two halves are disjoint `split_at_mut` borrows. The join before each merge is the only
//! synchronization point.

use crate::merge;
use crate::sequential;

/// Slices shorter than this are never split, they go straight to the sequential fallback.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Which sequential sort runs once a slice is no longer split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Fallback {
    Unstable,
    Stable,
}

/// Sorts the slice in place with an `is_less` predicate, using up to `parallelism` concurrent
/// branches.
///
/// If `parallelism <= 1` or the slice is shorter than [`PARALLEL_THRESHOLD`] this is exactly the
/// sequential [`sequential::sort_by`]. Otherwise the left half is forked as a rayon task, the
/// right half is sorted in the current task, both with `parallelism / 2`, and the two sorted
/// halves are merged through a scratch buffer of `v.len()`.
///
/// Merges prefer the left half on ties, but the sequential fallback is unstable, so the sort as a
/// whole is not stable. Use [`par_stable_sort_by`] when the order of equal elements matters.
///
/// If `is_less` panics the panic propagates to the caller and `v` still holds every original
/// element exactly once, in unspecified order.
pub fn par_sort_by<T, F>(v: &mut [T], is_less: F, parallelism: usize)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    tracing::trace!(len = v.len(), parallelism, "par_sort_by");
    par_merge_sort(v, &is_less, parallelism, PARALLEL_THRESHOLD, Fallback::Unstable);
}

/// Sorts the slice in place in ascending order, using up to `parallelism` concurrent branches.
///
/// See [`par_sort_by`].
pub fn par_sort<T>(v: &mut [T], parallelism: usize)
where
    T: Ord + Send,
{
    par_sort_by(v, |a: &T, b: &T| a.lt(b), parallelism);
}

/// Stable variant of [`par_sort_by`].
///
/// Same splitting and merging, but slices that are no longer split are sorted with
/// [`sequential::stable_sort_by`], so equal elements keep their original order.
pub fn par_stable_sort_by<T, F>(v: &mut [T], is_less: F, parallelism: usize)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    tracing::trace!(len = v.len(), parallelism, "par_stable_sort_by");
    par_merge_sort(v, &is_less, parallelism, PARALLEL_THRESHOLD, Fallback::Stable);
}

pub(crate) fn par_merge_sort<T, F>(
    v: &mut [T],
    is_less: &F,
    parallelism: usize,
    threshold: usize,
    fallback: Fallback,
) where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if parallelism <= 1 || len < threshold {
        match fallback {
            Fallback::Unstable => sequential::sort_by(v, is_less),
            Fallback::Stable => sequential::stable_sort_by(v, is_less),
        }
        return;
    }

    let mid = len / 2;
    let budget = parallelism / 2;

    {
        let (left, right) = v.split_at_mut(mid);

        // `rayon::join` runs the first closure on the current thread and makes the second one
        // available for stealing, so the left half is the forked task.
        rayon::join(
            || par_merge_sort(right, is_less, budget, threshold, fallback),
            || par_merge_sort(left, is_less, budget, threshold, fallback),
        );
    }

    merge::merge_halves(v, mid, &mut |a: &T, b: &T| is_less(a, b));
}
