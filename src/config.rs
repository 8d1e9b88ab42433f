use serde::Serialize;

use crate::suite::ContainerKind;

/// Number of elements in the smallest invocation.
pub const BASE_SIZE: usize = 10_000_000;

/// Geometric progression applied to [`BASE_SIZE`].
pub const MULTIPLIERS: [usize; 4] = [1, 2, 4, 8];

/// What to run: which container kinds, in which order, at which sizes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Profile {
    #[serde(rename = "base-size")]
    pub base_size: usize,
    pub multipliers: Vec<usize>,
    pub kinds: Vec<ContainerKind>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            base_size: BASE_SIZE,
            multipliers: MULTIPLIERS.to_vec(),
            kinds: ContainerKind::ALL.to_vec(),
        }
    }
}

impl Profile {
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.multipliers.iter().map(|m| m * self.base_size)
    }

    pub fn largest_size(&self) -> usize {
        self.sizes().max().unwrap_or(0)
    }
}
