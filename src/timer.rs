//! Execution-time reporting
//!
//! Every control path, including early returns and failures, reports the
//! elapsed execution time as its last observable action. The guard makes
//! that a drop-scoped contract instead of a call sprinkled before every
//! `return`.

use std::time::{Duration, Instant};

/// Guard that reports elapsed execution time when dropped.
pub struct ExecutionTimer {
    started: Instant,
}

impl ExecutionTimer {
    /// Start the timer.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ExecutionTimer {
    fn drop(&mut self) {
        tracing::info!(
            "Execution time is {} seconds",
            format_seconds(self.elapsed())
        );
        tracing::info!("DataDefender completed");
    }
}

fn format_seconds(elapsed: Duration) -> String {
    format!("{:.5}", elapsed.as_secs_f64())
}
