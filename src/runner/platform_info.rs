use once_cell::sync::Lazy;
use serde::Serialize;
use sysinfo::{CpuExt, System, SystemExt};

use container_bench::Profile;

/// Everything logged at startup, rendered as TOML.
#[derive(Debug, Serialize)]
pub struct RunInfo<'a> {
    pub seed: u64,
    pub profile: &'a Profile,
    pub platform: &'a PlatformInfo,
}

impl<'a> RunInfo<'a> {
    pub fn new(seed: u64, profile: &'a Profile) -> Self {
        Self {
            seed,
            profile,
            platform: &PLATFORM_INFO,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PlatformInfo {
    pub host: String,
    pub os: String,
    pub arch: String,
    #[serde(rename = "kernel-version")]
    pub kernel_version: String,
    #[serde(rename = "cpu-model")]
    pub cpu_model: String,
    #[serde(rename = "cpu-frequency")]
    pub cpu_frequency: Vec<usize>,
    pub memory: usize,
    pub swap: usize,
    pub pid: usize,
    #[cfg(target_os = "linux")]
    #[serde(rename = "scaling-governor")]
    pub scaling_governor: Vec<String>,
}

#[cfg(target_os = "linux")]
fn get_scaling_governor() -> anyhow::Result<Vec<String>> {
    let mut governors = Vec::new();
    for path in (std::fs::read_dir("/sys/devices/system/cpu/")?).flatten() {
        let path = path.path().join("cpufreq/scaling_governor");
        if let Ok(governor) = std::fs::read_to_string(path) {
            governors.push(governor.trim().to_owned());
        }
    }
    Ok(governors)
}

pub static PLATFORM_INFO: Lazy<PlatformInfo> = Lazy::new(|| {
    let mut sys = System::new_all();
    sys.refresh_all();
    const UNKNOWN: &str = "<unknown>";
    PlatformInfo {
        host: sys.host_name().unwrap_or(UNKNOWN.to_string()),
        os: sys.long_os_version().unwrap_or(UNKNOWN.to_string()),
        arch: std::env::consts::ARCH.to_string(),
        kernel_version: sys.kernel_version().unwrap_or(UNKNOWN.to_string()),
        cpu_model: sys.global_cpu_info().brand().to_owned(),
        cpu_frequency: sys.cpus().iter().map(|c| c.frequency() as usize).collect(),
        memory: sys.total_memory() as usize,
        swap: sys.total_swap() as usize,
        pid: std::process::id() as usize,
        #[cfg(target_os = "linux")]
        scaling_governor: get_scaling_governor().unwrap_or_default(),
    }
});
