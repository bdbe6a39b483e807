// Repeated wall-clock timing: run a callable in back-to-back batches, keep
// the fastest batch, and normalize. The minimum is used rather than the mean
// because scheduler and allocator hiccups only ever add time, so the fastest
// batch is the closest observation of the steady-state cost.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use smallvec::SmallVec;

/// Batch configuration for [`time_cost`].
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Invocations run back-to-back inside one timed batch.
    pub runs_per_repeat: u32,
    /// Number of timed batches.
    pub num_repeats: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            runs_per_repeat: 3,
            num_repeats: 5,
        }
    }
}

/// Metrics record produced by one [`time_cost`] measurement. Its `Display`
/// form is the human-readable report.
#[derive(Debug, Clone)]
pub struct TimingReport {
    pub func: String,
    pub runs_per_repeat: u32,
    pub num_repeats: u32,
    /// Minimum batch time across all batches, normalized by `num_repeats`.
    pub time_cost: Duration,
}

/// Time `f` in `num_repeats` batches of `runs_per_repeat` back-to-back calls
/// and return the normalized minimum batch time.
///
/// Every invocation recomputes from scratch; nothing is cached between calls
/// to this function. The callable's result is routed through `black_box` so
/// the measured work cannot be optimized away, and is otherwise untouched.
pub fn time_cost<R>(func: &str, config: &TimingConfig, mut f: impl FnMut() -> R) -> TimingReport {
    let mut batch_times: SmallVec<[Duration; 8]> = SmallVec::new();
    for _ in 0..config.num_repeats {
        let t0 = Instant::now();
        for _ in 0..config.runs_per_repeat {
            black_box(f());
        }
        batch_times.push(t0.elapsed());
    }

    let fastest = batch_times.iter().min().copied().unwrap_or(Duration::ZERO);
    let time_cost = if config.num_repeats > 0 {
        fastest / config.num_repeats
    } else {
        Duration::ZERO
    };

    TimingReport {
        func: func.to_string(),
        runs_per_repeat: config.runs_per_repeat,
        num_repeats: config.num_repeats,
        time_cost,
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "func={}", self.func)?;
        writeln!(f, "num_repeats={}", self.num_repeats)?;
        writeln!(f, "runs_per_repeat={}", self.runs_per_repeat)?;
        write!(f, "time_cost={:.3} sec", self.time_cost.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_the_callable_repeats_times_batches() {
        let calls = Cell::new(0u32);
        let config = TimingConfig::default();
        let report = time_cost("counter", &config, || calls.set(calls.get() + 1));
        assert_eq!(calls.get(), config.runs_per_repeat * config.num_repeats);
        assert_eq!(report.num_repeats, 5);
        assert_eq!(report.runs_per_repeat, 3);
    }

    #[test]
    fn rerunning_recomputes_independently() {
        let config = TimingConfig::default();
        let a = time_cost("noop", &config, || ());
        let b = time_cost("noop", &config, || ());
        // No shared state between runs; both are valid standalone records.
        assert_eq!(a.func, b.func);
        assert!(a.time_cost >= Duration::ZERO && b.time_cost >= Duration::ZERO);
    }

    #[test]
    fn report_formats_seconds_to_three_decimals() {
        let report = TimingReport {
            func: "find_duplicate_titles".to_string(),
            runs_per_repeat: 3,
            num_repeats: 5,
            time_cost: Duration::from_micros(1234),
        };
        let text = report.to_string();
        assert!(text.contains("func=find_duplicate_titles"));
        assert!(text.contains("num_repeats=5"));
        assert!(text.contains("runs_per_repeat=3"));
        assert!(text.contains("time_cost=0.001 sec"));
    }
}
