//! # Guarded Counter: Lock-Everything Counting
//!
//! Ten workers each increment one shared counter a hundred times, so every
//! trial must observe exactly 1000. The demo runs 1000 trials and reports
//! any that desynchronized (with the mutex in place: none).
//!
//! ## Running This Demo
//! ```bash
//! cargo run --example guarded_counter
//! ```
//!
//! ## Expected Output
//! ```text
//! Running 1000 trials of 10 workers x 100 increments...
//! All 1000 trials observed the expected 1000.
//! ```

use joinx::{TrialConfig, TrialRunner};

fn main() {
    let config = TrialConfig::default();
    let trials = 1000;

    println!(
        "Running {} trials of {} workers x {} increments...",
        trials, config.workers, config.increments
    );

    let runner = TrialRunner::new(config);
    let report = runner.run_trials(trials).expect("a worker panicked");

    for mismatch in &report.mismatches {
        println!(
            "trial {}: counter desynchronized, observed {} (expected {})",
            mismatch.trial, mismatch.observed, mismatch.expected
        );
    }

    if report.is_clean() {
        println!(
            "All {} trials observed the expected {}.",
            report.trials, report.expected
        );
    } else {
        println!(
            "{} of {} trials desynchronized.",
            report.mismatches.len(),
            report.trials
        );
    }
}
