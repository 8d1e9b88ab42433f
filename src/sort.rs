#[cfg(not(feature = "unstable-sort"))]
pub fn sort(slice: &mut [f64]) {
    slice.sort_by(f64::total_cmp);
}

#[cfg(feature = "unstable-sort")]
pub fn sort(slice: &mut [f64]) {
    slice.sort_unstable_by(f64::total_cmp);
}

pub fn is_sorted(slice: &[f64]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}
