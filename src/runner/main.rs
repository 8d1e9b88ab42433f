use rand::{rngs::StdRng, SeedableRng};

use container_bench::Profile;

mod checks;
mod platform_info;

fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let profile = Profile::default();
    let seed = chrono::Local::now().timestamp() as u64;
    let run_info = platform_info::RunInfo::new(seed, &profile);
    match toml::to_string(&run_info) {
        Ok(s) => log::info!("Run info:\n{}", s),
        Err(e) => log::warn!("Failed to render run info: {}", e),
    }
    for finding in checks::pre_benchmarking_checks(run_info.platform, &profile) {
        log::warn!("{}", finding);
    }
    log::info!("Random source seeded with {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let stdout = std::io::stdout();
    container_bench::run(&profile, &mut rng, &mut stdout.lock())?;
    Ok(())
}
