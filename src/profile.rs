// Scoped call profiling. A session collects per-function call counts and
// cumulative wall time from `span` guards placed at the crate's function
// boundaries; the bookkeeping is explicit and cheap enough to leave compiled
// in, and costs one thread-local check when no session is active. A span's
// elapsed time includes everything it calls, so the reported figure is
// cumulative time in the profiler sense.
//
// One session per thread at a time. The harness does not police nesting:
// wrapping a timing measurement around an already-profiled call skews both
// numbers, so callers keep the two harnesses separate.

use std::cell::RefCell;
use std::fmt;
use std::time::{Duration, Instant};

use ahash::AHashMap as HashMap;

thread_local! {
    static SESSION: RefCell<Option<SessionData>> = RefCell::new(None);
}

#[derive(Default)]
struct SessionData {
    stats: HashMap<&'static str, CallStat>,
}

#[derive(Default, Clone, Copy)]
struct CallStat {
    calls: u64,
    cumulative: Duration,
}

/// Guard recording one function invocation into the active session, if any.
/// The elapsed time is taken when the guard drops, so callee time is included.
pub struct Span {
    label: &'static str,
    start: Option<Instant>,
}

/// Open a span for `label`. When no session is active the guard holds no
/// timestamp and its drop does nothing.
pub fn span(label: &'static str) -> Span {
    let active = SESSION.with(|s| s.borrow().is_some());
    Span {
        label,
        start: active.then(Instant::now),
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            let elapsed = start.elapsed();
            SESSION.with(|s| {
                if let Some(data) = s.borrow_mut().as_mut() {
                    let stat = data.stats.entry(self.label).or_default();
                    stat.calls += 1;
                    stat.cumulative += elapsed;
                }
            });
        }
    }
}

/// Run `f` under a fresh profiling session and return its result together
/// with the collected statistics, sorted by cumulative time descending.
///
/// The callable executes exactly once: the same invocation is measured and
/// returned, so side effects are not repeated. The session is torn down on
/// every exit path; if `f` panics, the guard's drop deactivates profiling
/// before the panic continues.
pub fn profiled<R>(f: impl FnOnce() -> R) -> (R, ProfileReport) {
    let session = ActiveSession::install();
    let value = f();
    (value, session.finish())
}

struct ActiveSession {
    finished: bool,
}

impl ActiveSession {
    fn install() -> ActiveSession {
        SESSION.with(|s| {
            *s.borrow_mut() = Some(SessionData::default());
        });
        ActiveSession { finished: false }
    }

    fn finish(mut self) -> ProfileReport {
        self.finished = true;
        let data = SESSION
            .with(|s| s.borrow_mut().take())
            .unwrap_or_default();
        ProfileReport::from_stats(data.stats)
    }
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        if !self.finished {
            SESSION.with(|s| {
                s.borrow_mut().take();
            });
        }
    }
}

/// One row of the profiling table.
#[derive(Debug, Clone)]
pub struct CallRow {
    /// Full label as recorded, e.g. `scan::is_duplicate`.
    pub function: &'static str,
    pub calls: u64,
    pub cumulative: Duration,
}

impl CallRow {
    /// Cumulative time divided by the number of calls.
    pub fn per_call(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.cumulative / self.calls as u32
        }
    }
}

/// Profiling statistics for one session, sorted by cumulative time with the
/// most expensive function first.
#[derive(Debug, Clone, Default)]
pub struct ProfileReport {
    rows: Vec<CallRow>,
}

impl ProfileReport {
    fn from_stats(stats: HashMap<&'static str, CallStat>) -> ProfileReport {
        let mut rows: Vec<CallRow> = stats
            .into_iter()
            .map(|(function, stat)| CallRow {
                function,
                calls: stat.calls,
                cumulative: stat.cumulative,
            })
            .collect();
        rows.sort_by(|a, b| b.cumulative.cmp(&a.cumulative));
        ProfileReport { rows }
    }

    pub fn rows(&self) -> &[CallRow] {
        &self.rows
    }

    /// Total number of recorded calls across all functions.
    pub fn total_calls(&self) -> u64 {
        self.rows.iter().map(|r| r.calls).sum()
    }
}

// Labels are recorded with their module path; the table shows the bare
// function name, the same readability trim a profiler applies to file paths.
fn short_name(label: &str) -> &str {
    label.rsplit("::").next().unwrap_or(label)
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} function calls", self.total_calls())?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>10}  {:>10}  {:>10}  function",
            "ncalls", "cumtime", "percall"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>10}  {:>10.6}  {:>10.6}  {}",
                row.calls,
                row.cumulative.as_secs_f64(),
                row.per_call().as_secs_f64(),
                short_name(row.function),
            )?;
        }
        Ok(())
    }
}
