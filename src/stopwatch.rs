//! Named interval timing, mirroring `tools/instrument.h`'s `Stopwatch`.
//!
//! Instrumentation is diagnostic-only: a stopwatch that's never started,
//! or stopped without a matching start, must not panic or otherwise
//! disturb the computation it's timing (spec section 7, "instrumentation
//! failures are swallowed, never propagated").

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Accumulates named, possibly-resumed timing intervals.
///
/// `run()` (see [`crate::run`]) uses one of these internally to time the
/// top-level recursion; callers can also create their own to bracket
/// arbitrary sections when comparing backends or kernels.
#[derive(Debug, Default)]
pub struct Stopwatch {
    running: HashMap<String, Instant>,
    totals: HashMap<String, Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or resumes) the named interval. Starting an interval
    /// that's already running restarts it from now, discarding the
    /// in-flight span rather than panicking.
    pub fn start(&mut self, label: &str) {
        self.running.insert(label.to_string(), Instant::now());
    }

    /// Stops the named interval and adds its elapsed time to the
    /// running total. Stopping a label that was never started is a
    /// no-op — a swallowed instrumentation failure, not a bug.
    pub fn stop(&mut self, label: &str) {
        if let Some(start) = self.running.remove(label) {
            *self.totals.entry(label.to_string()).or_default() += start.elapsed();
        }
    }

    /// Total accumulated time for `label` across every start/stop pair,
    /// `Duration::ZERO` if the label was never recorded.
    pub fn elapsed(&self, label: &str) -> Duration {
        self.totals.get(label).copied().unwrap_or_default()
    }

    /// All recorded labels and their accumulated durations, for a
    /// human-readable summary. Order is unspecified.
    pub fn summary(&self) -> Vec<(String, Duration)> {
        self.totals
            .iter()
            .map(|(label, dur)| (label.clone(), *dur))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopping_an_unstarted_label_is_swallowed() {
        let mut sw = Stopwatch::new();
        sw.stop("never-started");
        assert_eq!(sw.elapsed("never-started"), Duration::ZERO);
    }

    #[test]
    fn start_stop_accumulates_across_resumes() {
        let mut sw = Stopwatch::new();
        sw.start("phase");
        sw.stop("phase");
        let first = sw.elapsed("phase");
        sw.start("phase");
        sw.stop("phase");
        assert!(sw.elapsed("phase") >= first);
    }
}
