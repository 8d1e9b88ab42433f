use container_bench::Profile;

use crate::platform_info::PlatformInfo;

/// Payload bytes held at once by the largest invocation: two containers of `f64`.
/// Linked lists need more than this for their nodes.
fn peak_footprint(profile: &Profile) -> usize {
    if profile.kinds.is_empty() {
        return 0;
    }
    2 * profile.largest_size() * std::mem::size_of::<f64>()
}

#[cfg(target_os = "linux")]
fn check_scaling_governor(platform: &PlatformInfo) -> Vec<String> {
    let mut findings = vec![];
    for governor in &platform.scaling_governor {
        if governor != "performance" {
            findings.push(format!(
                "Scaling governor is `{}`, timings may be noisy. Prefer `performance`.",
                governor
            ));
            break;
        }
    }
    findings
}

fn check_memory(platform: &PlatformInfo, profile: &Profile) -> Vec<String> {
    let required = peak_footprint(profile);
    if platform.memory > 0 && platform.memory < required {
        vec![format!(
            "The largest invocation needs about {} MiB but only {} MiB of memory is installed.",
            required >> 20,
            platform.memory >> 20
        )]
    } else {
        vec![]
    }
}

/// Everything worth warning about before the run. Nothing here stops the benchmark.
pub fn pre_benchmarking_checks(platform: &PlatformInfo, profile: &Profile) -> Vec<String> {
    let mut findings = vec![];
    #[cfg(target_os = "linux")]
    findings.extend(check_scaling_governor(platform));
    findings.extend(check_memory(platform, profile));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(memory: usize) -> PlatformInfo {
        PlatformInfo {
            host: "test".to_owned(),
            os: "test".to_owned(),
            arch: "x86_64".to_owned(),
            kernel_version: "0".to_owned(),
            cpu_model: "test".to_owned(),
            cpu_frequency: vec![],
            memory,
            swap: 0,
            pid: 1,
            #[cfg(target_os = "linux")]
            scaling_governor: vec!["performance".to_owned()],
        }
    }

    #[test]
    fn memory_shortage_is_reported() {
        let profile = Profile::default();
        // 2 * 80M * 8 bytes
        assert_eq!(peak_footprint(&profile), 1_280_000_000);
        assert_eq!(check_memory(&platform(1 << 30), &profile).len(), 1);
        assert!(check_memory(&platform(1 << 32), &profile).is_empty());
    }

    #[test]
    fn unknown_memory_is_not_reported() {
        assert!(check_memory(&platform(0), &Profile::default()).is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn powersave_governor_is_reported() {
        let mut p = platform(1 << 40);
        p.scaling_governor = vec!["performance".to_owned(), "powersave".to_owned()];
        let findings = pre_benchmarking_checks(&p, &Profile::default());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("powersave"));
    }
}
