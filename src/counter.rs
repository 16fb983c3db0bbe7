//! Mutex-guarded counter trials.
//!
//! The classic "N workers increment a shared counter" exercise, run as
//! repeated trials with a correctness check. The counter is owned by its
//! [`TrialRunner`] rather than living in process-global state; `read()` and
//! `reset()` are available to the orchestrating caller.
//!
//! A trial whose final count differs from the expected value is an anomaly
//! to report, not an error to abort on: it is recorded in the
//! [`TrialReport`] (and logged at WARN when the `tracing` feature is on) and
//! the run continues.

use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::error::JoinResult;
use crate::group::fork_join;

/// A counter whose every write goes through one exclusive lock.
///
/// # Examples
///
/// ```
/// use joinx::GuardedCounter;
///
/// let counter = GuardedCounter::new();
/// counter.increment();
/// counter.increment();
/// assert_eq!(counter.read(), 2);
///
/// counter.reset();
/// assert_eq!(counter.read(), 0);
/// ```
pub struct GuardedCounter {
    value: Mutex<u64>,
}

impl GuardedCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Add 1 under the lock.
    pub fn increment(&self) {
        *self.value.lock() += 1;
    }

    /// Read the current value.
    pub fn read(&self) -> u64 {
        *self.value.lock()
    }

    /// Set the value back to zero.
    pub fn reset(&self) {
        *self.value.lock() = 0;
    }
}

impl Default for GuardedCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of one trial: how many workers, and how many increments each.
///
/// The default is 10 workers × 100 increments, so a clean trial observes
/// exactly 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub workers: usize,
    pub increments: usize,
}

impl TrialConfig {
    /// The count a clean trial must observe: workers × increments.
    pub fn expected(&self) -> u64 {
        self.workers as u64 * self.increments as u64
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            increments: 100,
        }
    }
}

/// One trial that finished on the wrong count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub trial: usize,
    pub observed: u64,
    pub expected: u64,
}

/// Outcome of [`TrialRunner::run_trials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialReport {
    /// How many trials ran.
    pub trials: usize,
    /// The per-trial expected count.
    pub expected: u64,
    /// Every trial that desynchronized, in trial order.
    pub mismatches: Vec<Mismatch>,
}

impl TrialReport {
    /// True when every trial observed the expected count.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs guarded-counter trials against a counter it owns.
///
/// # Examples
///
/// ```
/// use joinx::{TrialConfig, TrialRunner};
///
/// let runner = TrialRunner::new(TrialConfig::default());
/// let report = runner.run_trials(50).unwrap();
///
/// assert_eq!(report.expected, 1000);
/// assert!(report.is_clean());
/// ```
pub struct TrialRunner {
    config: TrialConfig,
    counter: GuardedCounter,
}

impl TrialRunner {
    /// Create a runner with a fresh counter.
    pub fn new(config: TrialConfig) -> Self {
        Self {
            config,
            counter: GuardedCounter::new(),
        }
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> TrialConfig {
        self.config
    }

    /// The counter, for callers that want to `read()` or `reset()` between
    /// trials.
    pub fn counter(&self) -> &GuardedCounter {
        &self.counter
    }

    /// Run a single trial and return the count it observed.
    ///
    /// Spawns `config.workers` workers, each incrementing the counter
    /// `config.increments` times, joins them all, reads the final value, and
    /// resets the counter to zero for the next trial.
    ///
    /// If a worker panics, the error is returned and the counter is NOT
    /// reset; its value is whatever the trial reached.
    pub fn run_trial(&self) -> JoinResult<u64> {
        let increments = self.config.increments;
        fork_join(self.config.workers, |_worker_id| {
            for _ in 0..increments {
                self.counter.increment();
            }
        })?;

        let observed = self.counter.read();
        self.counter.reset();
        Ok(observed)
    }

    /// Run `trials` trials and collect every mismatch.
    ///
    /// A mismatch is reported, not fatal: the remaining trials still run.
    pub fn run_trials(&self, trials: usize) -> JoinResult<TrialReport> {
        let expected = self.config.expected();

        #[cfg(feature = "tracing")]
        debug!(
            trials,
            workers = self.config.workers,
            increments = self.config.increments,
            expected,
            "running counter trials"
        );

        let mut mismatches = Vec::new();
        for trial in 0..trials {
            let observed = self.run_trial()?;
            if observed != expected {
                #[cfg(feature = "tracing")]
                warn!(trial, observed, expected, "counter desynchronized");

                mismatches.push(Mismatch {
                    trial,
                    observed,
                    expected,
                });
            }
        }

        Ok(TrialReport {
            trials,
            expected,
            mismatches,
        })
    }
}
