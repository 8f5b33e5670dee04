//! Helpers for slices that are already sorted.

/// Returns `true` if no element is less than its predecessor according to `is_less`.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// Binary searches a slice sorted by `is_less` for `target`.
///
/// Returns `Ok(index)` of an element that is neither less nor greater than `target`, or
/// `Err(index)` with the position where `target` could be inserted while keeping the slice
/// sorted. If several elements match, any one of them may be returned.
pub fn binary_search_by<T, F>(v: &[T], target: &T, mut is_less: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = v.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let elem = &v[mid];

        if is_less(elem, target) {
            low = mid + 1;
        } else if is_less(target, elem) {
            high = mid;
        } else {
            return Ok(mid);
        }
    }

    Err(low)
}

/// Removes consecutive duplicates from a sorted slice in place.
///
/// The first element of every run of equal neighbours is moved to the front, in order. Returns the
/// number of unique elements, `v[..n]`. The elements in `v[n..]` are the removed duplicates in
/// unspecified order.
pub fn dedup_sorted<T>(v: &mut [T]) -> usize
where
    T: PartialEq,
{
    let len = v.len();
    if len < 2 {
        return len;
    }

    let mut write = 1;
    for read in 1..len {
        if v[read] != v[write - 1] {
            if read != write {
                v.swap(read, write);
            }
            write += 1;
        }
    }

    write
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_sorted_detects_descent() {
        assert!(is_sorted_by::<i32, _>(&[], |a, b| a < b));
        assert!(is_sorted_by(&[1], |a, b| a < b));
        assert!(is_sorted_by(&[1, 1, 2, 5], |a, b| a < b));
        assert!(!is_sorted_by(&[1, 3, 2], |a, b| a < b));
        assert!(is_sorted_by(&[3, 2, 2, 0], |a, b| a > b));
    }

    #[test]
    fn binary_search_hits_and_misses() {
        let v = [1, 3, 5, 7, 9, 11];
        let less = |a: &i32, b: &i32| a < b;

        assert_eq!(binary_search_by(&v, &1, less), Ok(0));
        assert_eq!(binary_search_by(&v, &7, less), Ok(3));
        assert_eq!(binary_search_by(&v, &11, less), Ok(5));
        assert_eq!(binary_search_by(&v, &0, less), Err(0));
        assert_eq!(binary_search_by(&v, &6, less), Err(3));
        assert_eq!(binary_search_by(&v, &12, less), Err(6));
        assert_eq!(binary_search_by(&[], &4, less), Err(0));
    }

    #[test]
    fn binary_search_agrees_with_std() {
        let v: Vec<u32> = (0..200).map(|i| i * 3).collect();
        for target in 0..620 {
            let found = binary_search_by(&v, &target, |a, b| a < b);
            match v.binary_search(&target) {
                Ok(i) => assert_eq!(found, Ok(i)),
                Err(i) => assert_eq!(found, Err(i)),
            }
        }
    }

    #[test]
    fn dedup_keeps_first_of_each_run() {
        let mut v = [1, 1, 2, 3, 3, 3, 4, 5, 5];
        let n = dedup_sorted(&mut v);
        assert_eq!(n, 5);
        assert_eq!(v[..n], [1, 2, 3, 4, 5]);

        let mut tail = v[n..].to_vec();
        tail.sort();
        assert_eq!(tail, [1, 3, 3, 5]);
    }

    #[test]
    fn dedup_edge_cases() {
        let mut empty: [i32; 0] = [];
        assert_eq!(dedup_sorted(&mut empty), 0);

        let mut same = ["x"; 6];
        assert_eq!(dedup_sorted(&mut same), 1);

        let mut unique = [1, 2, 3];
        assert_eq!(dedup_sorted(&mut unique), 3);
        assert_eq!(unique, [1, 2, 3]);
    }
}
