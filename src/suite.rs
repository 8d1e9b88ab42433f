use std::{
    collections::{LinkedList, VecDeque},
    hint::black_box,
};

use rand::RngCore;
use rand_distr::Exp;
use serde::Serialize;

use crate::{
    bencher::{Bencher, Step},
    container::{Container, PartialSort},
    record::Measurement,
};

/// Rate of the exponential distribution the elements are drawn from.
pub const RATE: f64 = 1.0;
/// Values strictly above this are counted.
pub const THRESHOLD: f64 = 10.0;
/// Only this many leading elements are squared.
pub const SQUARE_LIMIT: usize = 100;

/// The two containers of one invocation. Each method is one step of the suite.
pub struct Invocation<C> {
    size: usize,
    primary: C,
    secondary: C,
}

impl<C: Container> Invocation<C> {
    pub fn generate(size: usize, sampler: &Exp<f64>, rng: &mut dyn RngCore) -> Self {
        let (primary, secondary) = C::generate(size, sampler, rng);
        Self {
            size,
            primary,
            secondary,
        }
    }

    pub fn count(&self) -> usize {
        self.primary.count_greater(THRESHOLD)
    }

    pub fn square(&mut self) {
        self.primary.square_prefix(SQUARE_LIMIT);
    }

    pub fn copy(&mut self) {
        self.primary.copy_into(&mut self.secondary);
    }

    pub fn sort(&mut self) -> PartialSort {
        self.primary.sort_prefix(self.size / 2)
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.primary, &mut self.secondary);
    }

    pub fn primary(&self) -> &C {
        &self.primary
    }

    pub fn secondary(&self) -> &C {
        &self.secondary
    }
}

/// Run the six steps on a fresh pair of `C`, timing each one.
/// Both containers are dropped before this returns.
pub fn measure<C: Container>(size: usize, rng: &mut dyn RngCore) -> anyhow::Result<Measurement> {
    let sampler = Exp::new(RATE)
        .map_err(|e| anyhow::anyhow!("Invalid exponential rate {}: {:?}", RATE, e))?;
    let bencher = Bencher::new();

    let mut invocation = bencher.time(Step::Generation, || {
        Invocation::<C>::generate(size, &sampler, rng)
    });
    let count = bencher.time(Step::Counting, || black_box(invocation.count()));
    bencher.time(Step::Square, || invocation.square());
    bencher.time(Step::Copy, || invocation.copy());
    let timer = bencher.start_timing(Step::Sort);
    match invocation.sort() {
        PartialSort::Sorted => drop(timer),
        PartialSort::Unsupported => timer.cancel(),
    }
    bencher.time(Step::Swap, || invocation.swap());
    black_box(&invocation);

    Ok(Measurement {
        size: invocation.primary().len(),
        count,
        timings: bencher.finish(),
    })
}

/// Container shapes the driver knows how to benchmark.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Vector,
    Deque,
    List,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Vector,
        ContainerKind::Deque,
        ContainerKind::List,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Vector => "Vec<f64>",
            ContainerKind::Deque => "VecDeque<f64>",
            ContainerKind::List => "LinkedList<f64>",
        }
    }

    /// Whether the sort step is timed for this kind.
    pub fn supports_partial_sort(self) -> bool {
        !matches!(self, ContainerKind::List)
    }

    pub fn measure(self, size: usize, rng: &mut dyn RngCore) -> anyhow::Result<Measurement> {
        match self {
            ContainerKind::Vector => measure::<Vec<f64>>(size, rng),
            ContainerKind::Deque => measure::<VecDeque<f64>>(size, rng),
            ContainerKind::List => measure::<LinkedList<f64>>(size, rng),
        }
    }
}
