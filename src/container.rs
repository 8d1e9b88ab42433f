//! Container shapes under test and the per-step operations on them.
//!
//! Random-access containers share one implementation through [`RandomAccess`].
//! `LinkedList` has no indexing and no in-place sub-range sort, so it gets its own.

use std::{
    collections::{LinkedList, VecDeque},
    ops::IndexMut,
};

use rand::RngCore;
use rand_distr::{Distribution, Exp};

/// Outcome of [`Container::sort_prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialSort {
    Sorted,
    /// The container cannot sort a sub-range in place. Contents are untouched.
    Unsupported,
}

/// A sequence of `f64` that the benchmark suite can run on.
pub trait Container: Sized {
    /// Build the primary container with `size` exponential draws, and the copy target.
    fn generate(size: usize, sampler: &Exp<f64>, rng: &mut dyn RngCore) -> (Self, Self);

    fn len(&self) -> usize;

    /// Number of elements strictly greater than `threshold`.
    fn count_greater(&self, threshold: f64) -> usize;

    /// Square the first `limit` elements in place (all of them if there are fewer).
    fn square_prefix(&mut self, limit: usize);

    /// Overwrite `target` with the elements of `self`, in order.
    fn copy_into(&self, target: &mut Self);

    /// Sort `[0, end)` ascending, leaving the rest untouched.
    fn sort_prefix(&mut self, end: usize) -> PartialSort;
}

/// Containers with O(1) indexing and a contiguous view for sorting.
pub trait RandomAccess: IndexMut<usize, Output = f64> {
    /// A zero-filled container of `size` elements.
    fn zeroed(size: usize) -> Self;

    fn length(&self) -> usize;

    fn as_contiguous_mut(&mut self) -> &mut [f64];
}

impl RandomAccess for Vec<f64> {
    fn zeroed(size: usize) -> Self {
        vec![0.0; size]
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn as_contiguous_mut(&mut self) -> &mut [f64] {
        self
    }
}

impl RandomAccess for VecDeque<f64> {
    fn zeroed(size: usize) -> Self {
        let mut deque = VecDeque::new();
        deque.resize(size, 0.0);
        deque
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn as_contiguous_mut(&mut self) -> &mut [f64] {
        self.make_contiguous()
    }
}

impl<C: RandomAccess> Container for C {
    fn generate(size: usize, sampler: &Exp<f64>, rng: &mut dyn RngCore) -> (Self, Self) {
        let mut primary = C::zeroed(size);
        let secondary = C::zeroed(size);
        for i in 0..size {
            let x = sampler.sample(rng);
            primary[i] = x;
        }
        (primary, secondary)
    }

    fn len(&self) -> usize {
        self.length()
    }

    fn count_greater(&self, threshold: f64) -> usize {
        (0..self.length()).filter(|&i| self[i] > threshold).count()
    }

    fn square_prefix(&mut self, limit: usize) {
        for i in 0..limit.min(self.length()) {
            let x = &mut self[i];
            *x = *x * *x;
        }
    }

    fn copy_into(&self, target: &mut Self) {
        debug_assert_eq!(self.length(), target.length());
        for i in 0..self.length() {
            target[i] = self[i];
        }
    }

    fn sort_prefix(&mut self, end: usize) -> PartialSort {
        let end = end.min(self.length());
        crate::sort::sort(&mut self.as_contiguous_mut()[..end]);
        PartialSort::Sorted
    }
}

impl Container for LinkedList<f64> {
    /// The copy target starts empty: copying appends.
    fn generate(size: usize, sampler: &Exp<f64>, rng: &mut dyn RngCore) -> (Self, Self) {
        let mut primary = LinkedList::new();
        for _ in 0..size {
            primary.push_back(sampler.sample(rng));
        }
        (primary, LinkedList::new())
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn count_greater(&self, threshold: f64) -> usize {
        self.iter().filter(|&&x| x > threshold).count()
    }

    fn square_prefix(&mut self, limit: usize) {
        for x in self.iter_mut().take(limit) {
            *x = *x * *x;
        }
    }

    fn copy_into(&self, target: &mut Self) {
        target.clear();
        for &x in self {
            target.push_back(x);
        }
    }

    fn sort_prefix(&mut self, _end: usize) -> PartialSort {
        PartialSort::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn exp() -> Exp<f64> {
        Exp::new(1.0).unwrap()
    }

    #[test]
    fn random_access_targets_are_presized() {
        let mut rng = StdRng::seed_from_u64(1);
        let (primary, secondary) = <Vec<f64>>::generate(10, &exp(), &mut rng);
        assert_eq!(primary.len(), 10);
        assert_eq!(secondary, vec![0.0; 10]);
        let (primary, secondary) = <VecDeque<f64>>::generate(10, &exp(), &mut rng);
        assert_eq!(primary.len(), 10);
        assert_eq!(secondary.len(), 10);
    }

    #[test]
    fn list_target_starts_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let (primary, secondary) = <LinkedList<f64>>::generate(10, &exp(), &mut rng);
        assert_eq!(Container::len(&primary), 10);
        assert!(secondary.is_empty());
    }

    #[test]
    fn kinds_consume_draws_in_the_same_order() {
        let (v, _) = <Vec<f64>>::generate(32, &exp(), &mut StdRng::seed_from_u64(9));
        let (d, _) = <VecDeque<f64>>::generate(32, &exp(), &mut StdRng::seed_from_u64(9));
        let (l, _) = <LinkedList<f64>>::generate(32, &exp(), &mut StdRng::seed_from_u64(9));
        assert!(v.iter().eq(d.iter()));
        assert!(v.iter().eq(l.iter()));
    }

    #[test]
    fn deque_sort_covers_wrapped_storage() {
        let mut deque: VecDeque<f64> = (0..6).map(|x| x as f64).collect();
        deque.rotate_left(4);
        // [4, 5, 0, 1, 2, 3], physically wrapped
        assert_eq!(deque.sort_prefix(3), PartialSort::Sorted);
        assert!(deque.iter().eq([0.0, 4.0, 5.0, 1.0, 2.0, 3.0].iter()));
    }

    #[test]
    fn sort_end_is_clamped() {
        let mut v = vec![3.0, 1.0, 2.0];
        assert_eq!(v.sort_prefix(10), PartialSort::Sorted);
        assert_eq!(v, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn list_copy_replaces_previous_contents() {
        let source: LinkedList<f64> = [1.0, 2.0].into_iter().collect();
        let mut target: LinkedList<f64> = [9.0].into_iter().collect();
        source.copy_into(&mut target);
        assert!(target.iter().eq(source.iter()));
    }
}
