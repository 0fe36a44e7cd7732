//! Wall-clock timing of report phases (ingest, rank, export).

use std::time::{Duration, Instant};

use tracing::debug;

/// Timing for one named phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Phase timings in the order the phases ran.
#[derive(Debug, Clone, Default)]
pub struct PhaseTimings {
    phases: Vec<PhaseTiming>,
}

impl PhaseTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` and record how long it took under `name`.
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.record(name, start.elapsed());
        value
    }

    /// Record an externally measured duration. Repeated names accumulate.
    pub fn record(&mut self, name: &'static str, duration: Duration) {
        debug!(phase = name, elapsed_ms = duration.as_secs_f64() * 1000.0, "phase finished");
        match self.phases.iter_mut().find(|phase| phase.name == name) {
            Some(phase) => phase.duration += duration,
            None => self.phases.push(PhaseTiming { name, duration }),
        }
    }

    pub fn get(&self, name: &str) -> Option<Duration> {
        self.phases
            .iter()
            .find(|phase| phase.name == name)
            .map(|phase| phase.duration)
    }

    pub fn phases(&self) -> &[PhaseTiming] {
        &self.phases
    }

    pub fn total(&self) -> Duration {
        self.phases.iter().map(|phase| phase.duration).sum()
    }

    /// One line per phase plus a total line.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .phases
            .iter()
            .map(|phase| format!("{:10} : {:10.3}ms", phase.name, millis(phase.duration)))
            .collect();
        lines.push(format!("{:10} : {:10.3}ms", "total", millis(self.total())));
        lines
    }

    /// Print summary to stderr so stdout stays reserved for the report.
    pub fn print_summary(&self) {
        eprintln!("\n=== Phase Timing Summary ===");
        for line in self.summary_lines() {
            eprintln!("{line}");
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
