//! Single threaded comparator sorts.
//!
//! These are the fallback paths of the parallel sort and are usable on their own. Unlike the
//! standard library sorts they never panic when the predicate is not a strict weak ordering.

use crate::merge;

// Slices up to this length are insertion sorted.
const SMALL_SORT_THRESHOLD: usize = 20;

/// Sorts the slice with an `is_less` predicate, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable, in-place and *O*(*n* \* log(*n*)) worst-case. Short slices use insertion
/// sort, everything else heapsort. Input that is already sorted is left untouched, equal elements
/// included.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    unstable_sort(v, &mut is_less);
}

/// Sorts the slice with an `is_less` predicate, preserving the order of equal elements.
///
/// Top-down merge sort with insertion sorted leaves. Allocates one scratch buffer of `v.len()`
/// that is shared by every merge.
pub fn stable_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        insertion_sort(v, &mut is_less);
        return;
    }

    let mut scratch = Vec::<T>::with_capacity(len);

    // SAFETY: `scratch` has room for `len` elements, which covers every sub-slice merged below.
    unsafe {
        merge_sort(v, scratch.as_mut_ptr(), &mut is_less);
    }
}

/// Sorts the slice by a key extracted from each element, comparing keys with `is_less_key`.
///
/// The key function is called on every comparison.
pub fn sort_by_key<T, K, KF, LF>(v: &mut [T], mut key: KF, mut is_less_key: LF)
where
    KF: FnMut(&T) -> K,
    LF: FnMut(&K, &K) -> bool,
{
    sort_by(v, |a, b| is_less_key(&key(a), &key(b)));
}

/// Sorts the slice by an ordered key extracted from each element.
pub fn sort_by_key_ord<T, K, KF>(v: &mut [T], mut key: KF)
where
    K: Ord,
    KF: FnMut(&T) -> K,
{
    sort_by(v, |a, b| key(a) < key(b));
}

pub(crate) fn unstable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    if v.len() <= SMALL_SORT_THRESHOLD {
        insertion_sort(v, is_less);
        return;
    }

    // Heapsort shuffles equal elements, so input that is already in order must not reach it.
    if is_presorted(v, is_less) {
        return;
    }

    heapsort(v, is_less);
}

fn is_presorted<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// # Safety
///
/// `scratch` must be valid for writes of `v.len()` elements and must not overlap `v`.
unsafe fn merge_sort<T, F>(v: &mut [T], scratch: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= SMALL_SORT_THRESHOLD {
        insertion_sort(v, is_less);
        return;
    }

    let mid = len / 2;

    // SAFETY: both halves are shorter than `v`, the caller guarantees `scratch` covers `v`.
    unsafe {
        merge_sort(&mut v[..mid], scratch, is_less);
        merge_sort(&mut v[mid..], scratch, is_less);
        merge::merge(v, mid, scratch, is_less);
    }
}

/// Stable insertion sort. Each element is swapped left while it is strictly less than its
/// neighbour.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// In-place max-heap sort, *O*(*n* \* log(*n*)) worst-case without allocating.
fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for root in (0..len / 2).rev() {
        sift_down(v, root, is_less);
    }

    for last in (1..len).rev() {
        v.swap(0, last);
        sift_down(&mut v[..last], 0, is_less);
    }
}

/// Moves `heap[root]` towards the leaves until no child compares greater.
fn sift_down<T, F>(heap: &mut [T], mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = heap.len();

    while 2 * root + 1 < len {
        let left = 2 * root + 1;
        let right = left + 1;
        let larger = if right < len && is_less(&heap[left], &heap[right]) {
            right
        } else {
            left
        };

        if !is_less(&heap[root], &heap[larger]) {
            return;
        }

        heap.swap(root, larger);
        root = larger;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg_values(len: usize, seed: u64) -> Vec<u64> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                state >> 40
            })
            .collect()
    }

    #[test]
    fn heapsort_matches_std() {
        for len in [21, 64, 257, 1000] {
            let mut v = lcg_values(len, len as u64);
            let mut expected = v.clone();
            expected.sort();

            sort_by(&mut v, |a, b| a < b);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn sorted_input_with_duplicates_keeps_positions() {
        for len in [10, 21, 100, 999] {
            let sorted: Vec<(usize, usize)> = (0..len).map(|i| (i / 10, i)).collect();

            let mut v = sorted.clone();
            sort_by(&mut v, |a, b| a.0 < b.0);
            assert_eq!(v, sorted);

            let mut v = sorted.clone();
            sort_by_key_ord(&mut v, |e| e.0);
            assert_eq!(v, sorted);
        }
    }

    #[test]
    fn insertion_sort_small() {
        let mut v = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn stable_sort_keeps_equal_order() {
        let keys = lcg_values(500, 7);
        let mut v: Vec<(u64, usize)> = keys.iter().map(|k| (k % 13, 0)).collect();
        for (i, e) in v.iter_mut().enumerate() {
            e.1 = i;
        }

        stable_sort_by(&mut v, |a, b| a.0 < b.0);

        for w in v.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }

    #[test]
    fn sort_by_key_descending() {
        let mut v = vec![("a", 3), ("b", 1), ("c", 2)];
        sort_by_key(&mut v, |e| e.1, |a, b| a > b);
        assert_eq!(v, [("a", 3), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn sort_by_key_ord_strings() {
        let mut v = vec!["pear", "fig", "banana", "kiwi"];
        sort_by_key_ord(&mut v, |s| s.len());
        assert_eq!(v[0], "fig");
        assert_eq!(v[3], "banana");
    }

    #[test]
    fn inconsistent_predicate_does_not_panic() {
        let mut v = lcg_values(300, 3);
        let mut expected = v.clone();
        expected.sort();

        let mut flip = false;
        sort_by(&mut v, |a, b| {
            flip = !flip;
            if flip {
                a < b
            } else {
                b < a
            }
        });

        let mut flip = false;
        stable_sort_by(&mut v, |a, b| {
            flip = !flip;
            flip && a != b
        });

        v.sort();
        assert_eq!(v, expected);
    }
}
