//! In-place merge of two adjacent sorted runs through a scratch buffer.

use std::ptr;

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// The whole of `v` is first copied into `scratch`. Two cursors then walk `scratch[..mid]` and
/// `scratch[mid..]`, always writing the lesser front element back into `v`. If neither element is
/// less than the other, the one from the left run is taken, which keeps the merge stable.
///
/// Only bounded cursors are advanced and every comparison result leads to exactly one copy, so a
/// predicate that is not a strict weak ordering can at most produce an unsorted permutation.
///
/// # Safety
///
/// `scratch` must be valid for writes of `v.len()` elements and must not overlap `v`. `mid` must be
/// in bounds.
pub(crate) unsafe fn merge<T, F>(v: &mut [T], mid: usize, scratch: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len);

    if mid == 0 || mid == len {
        return;
    }

    let v_ptr = v.as_mut_ptr();

    // From here on `scratch` holds the only live copy of every element and `v` is treated as
    // uninitialized output until `hole` is dropped.
    //
    // Panic safety:
    //
    // If `is_less` panics, `hole` gets dropped and copies the unconsumed parts of both runs back
    // into the tail of `v`, so `v` still holds every element it initially held exactly once.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr, scratch, len);
    }

    let mut hole = MergeHole {
        scratch,
        left: 0,
        mid,
        right: mid,
        end: len,
        dest: v_ptr,
        out: 0,
    };

    while hole.left < hole.mid && hole.right < hole.end {
        // SAFETY: `left < mid` and `right < end` keep both reads inside `scratch[..len]` and
        // `out < len` holds because `out == left + (right - mid)`.
        unsafe {
            let left_ptr = hole.scratch.add(hole.left);
            let right_ptr = hole.scratch.add(hole.right);

            let src = if is_less(&*right_ptr, &*left_ptr) {
                hole.right += 1;
                right_ptr
            } else {
                hole.left += 1;
                left_ptr
            };

            ptr::copy_nonoverlapping(src, hole.dest.add(hole.out), 1);
            hole.out += 1;
        }
    }

    // `hole` gets dropped and copies whatever remains of either run into the tail of `v`.
}

// When dropped, copies `scratch[left..mid]` followed by `scratch[right..end]` into `dest[out..]`.
struct MergeHole<T> {
    scratch: *mut T,
    left: usize,
    mid: usize,
    right: usize,
    end: usize,
    dest: *mut T,
    out: usize,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        let left_rest = self.mid - self.left;
        let right_rest = self.end - self.right;

        // SAFETY: `out + left_rest + right_rest == end`, so both copies stay within `dest[..end]`,
        // and the source ranges are the elements not yet moved back.
        unsafe {
            ptr::copy_nonoverlapping(
                self.scratch.add(self.left),
                self.dest.add(self.out),
                left_rest,
            );
            ptr::copy_nonoverlapping(
                self.scratch.add(self.right),
                self.dest.add(self.out + left_rest),
                right_rest,
            );
        }
    }
}

/// Merges `v[..mid]` and `v[mid..]` using a freshly allocated scratch buffer of `v.len()`.
pub(crate) fn merge_halves<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut scratch = Vec::<T>::with_capacity(v.len());

    // SAFETY: `scratch` has capacity for `v.len()` elements and is a separate allocation. Its
    // length stays 0, so dropping it never drops the elements that passed through it.
    unsafe {
        merge(v, mid, scratch.as_mut_ptr(), is_less);
    }
}
