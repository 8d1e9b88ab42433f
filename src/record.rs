use std::{io::Write, time::Duration};

use crate::bencher::{Step, Timings};

const SEPARATOR: &str = "----------------------------";

/// Result of one invocation: the post-swap size, per-step timings and the count of large values.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub count: usize,
    pub timings: Timings,
}

impl Step {
    fn label(self) -> &'static str {
        match self {
            Step::Generation => "Generation time",
            Step::Counting => "Counting time",
            Step::Square => "Square calculation time",
            Step::Copy => "Copy time",
            Step::Sort => "Sort time",
            Step::Swap => "Swap time",
        }
    }
}

fn secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

impl Measurement {
    pub fn dump(&self, f: &mut impl Write) -> std::io::Result<()> {
        writeln!(f, "Size: {}", self.size)?;
        for step in Step::ALL {
            let label = step.label();
            match (step, self.timings.get(step)) {
                (Step::Copy, Some(t)) => {
                    writeln!(f, "{label}: {}s (value: {})", secs(t), self.count)?
                }
                (_, Some(t)) => writeln!(f, "{label}: {}s.", secs(t))?,
                (_, None) => writeln!(f, "{label}: NOT DEFINED")?,
            }
        }
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)?;
        Ok(())
    }
}

/// Section header printed before each container kind's block.
pub fn dump_header(f: &mut impl Write, kind: &str) -> std::io::Result<()> {
    writeln!(f, "*** Calculation with {kind} ***")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencher::Bencher;

    fn render(m: &Measurement) -> String {
        let mut out = Vec::new();
        m.dump(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn undefined_sort_is_marked() {
        let bencher = Bencher::new();
        for step in Step::ALL {
            if step != Step::Sort {
                bencher.time(step, || {});
            }
        }
        let m = Measurement {
            size: 3,
            count: 1,
            timings: bencher.finish(),
        };
        let text = render(&m);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Size: 3");
        assert!(lines[1].starts_with("Generation time: ") && lines[1].ends_with("s."));
        assert!(lines[2].starts_with("Counting time: "));
        assert!(lines[3].starts_with("Square calculation time: "));
        assert!(lines[4].starts_with("Copy time: ") && lines[4].ends_with("s (value: 1)"));
        assert_eq!(lines[5], "Sort time: NOT DEFINED");
        assert!(lines[6].starts_with("Swap time: "));
        assert_eq!(lines[7], SEPARATOR);
        assert_eq!(lines[8], "");
    }

    #[test]
    fn header_names_the_kind() {
        let mut out = Vec::new();
        dump_header(&mut out, "Vec<f64>").unwrap();
        assert_eq!(out, b"*** Calculation with Vec<f64> ***\n");
    }
}
