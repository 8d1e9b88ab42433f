use std::io::Write;

use rand::RngCore;

mod bencher;
pub mod config;
pub mod container;
mod record;
pub mod sort;
pub mod suite;

pub use bencher::{BenchTimer, Bencher, Step, Timings};
pub use config::Profile;
pub use record::{dump_header, Measurement};
pub use suite::{measure, ContainerKind, Invocation};

/// Benchmark every kind of `profile` at every size, one invocation at a time,
/// writing the report to `out`.
pub fn run(profile: &Profile, rng: &mut dyn RngCore, out: &mut impl Write) -> anyhow::Result<()> {
    for kind in &profile.kinds {
        log::info!("Benchmarking {}", kind.name());
        dump_header(out, kind.name())?;
        for size in profile.sizes() {
            let measurement = kind.measure(size, rng)?;
            log::debug!(
                "{} size={} finished in {:.3}s",
                kind.name(),
                size,
                measurement.timings.total().as_secs_f64()
            );
            measurement.dump(out)?;
            out.flush()?;
        }
    }
    Ok(())
}
