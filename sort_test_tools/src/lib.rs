//! Shared test harness for the sorts in `sort_ext`.
//!
//! A sort is wrapped in a type implementing [`Sort`] and the generic test bodies in [`tests`] are
//! instantiated for it with [`instantiate_sort_tests!`] or [`instantiate_stable_sort_tests!`].

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Send,
    {
        Self::sort_by(arr, |a: &T, b: &T| a.lt(b));
    }

    fn sort_by<T, F>(arr: &mut [T], is_less: F)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync;
}

pub mod patterns;
