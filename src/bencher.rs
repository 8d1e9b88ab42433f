use std::{
    cell::RefCell,
    time::{Duration, Instant},
};

/// The six timed steps of one invocation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Generation,
    Counting,
    Square,
    Copy,
    Sort,
    Swap,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Generation,
        Step::Counting,
        Step::Square,
        Step::Copy,
        Step::Sort,
        Step::Swap,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Elapsed time per step. `None` means the step was not timed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Timings {
    elapsed: [Option<Duration>; 6],
}

impl Timings {
    pub fn get(&self, step: Step) -> Option<Duration> {
        self.elapsed[step.index()]
    }

    pub fn total(&self) -> Duration {
        self.elapsed.iter().flatten().sum()
    }
}

/// Collects one duration per step of a single invocation.
pub struct Bencher {
    timings: RefCell<Timings>,
}

/// Guard returned by [`Bencher::start_timing`]. The step is recorded when the guard is dropped.
pub struct BenchTimer<'a> {
    step: Step,
    start_time: Instant,
    cancelled: bool,
    bencher: &'a Bencher,
}

impl<'a> BenchTimer<'a> {
    /// Stop the timer without recording anything for its step.
    pub fn cancel(mut self) {
        self.cancelled = true;
    }
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        if self.cancelled {
            return;
        }
        let mut timings = self.bencher.timings.borrow_mut();
        let slot = &mut timings.elapsed[self.step.index()];
        assert!(slot.is_none(), "Step {:?} timed more than once", self.step);
        *slot = Some(elapsed);
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self {
            timings: RefCell::new(Timings::default()),
        }
    }

    pub fn start_timing(&self, step: Step) -> BenchTimer {
        BenchTimer {
            step,
            start_time: Instant::now(),
            cancelled: false,
            bencher: self,
        }
    }

    pub fn time<R>(&self, step: Step, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing(step);
        f()
    }

    pub fn finish(self) -> Timings {
        self.timings.into_inner()
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}
