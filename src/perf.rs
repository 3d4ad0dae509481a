//! Performance monitoring for the event fold.
//!
//! ## Features
//!
//! - **Update timing**: [`UpdateMonitor`] keeps a rolling window of fold step
//!   durations and warns when one exceeds the budget
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Conditional compilation**: `profile_scope!` is free unless the
//!   `profiling` feature is on
//!
//! ## Usage
//!
//! ```ignore
//! use crate::profile_scope;
//!
//! fn all_visible(&self, viewport: &Viewport) -> Vec<&StoredEntity> {
//!     profile_scope!("entity_set::all_visible");
//!     // ...
//! }
//! ```

use crate::constants::{UPDATE_BUDGET_MS, UPDATE_SAMPLE_COUNT};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::{debug, warn};

// ============================================================================
// Profiling Macros
// ============================================================================

/// Time the enclosing scope. Compiles to nothing without the `profiling`
/// feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Rolling statistics
// ============================================================================

/// Rolling timing statistics over the most recent samples.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    capacity: usize,
    count: u64,
    sum_ms: f64,
    max_ms: f64,
}

impl OperationStats {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            count: 0,
            sum_ms: 0.0,
            max_ms: 0.0,
        }
    }

    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= self.capacity {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total samples ever recorded, including evicted ones.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Average over the retained window.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the retained window.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    /// Largest sample ever recorded.
    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

impl Default for OperationStats {
    fn default() -> Self {
        Self::with_capacity(UPDATE_SAMPLE_COUNT)
    }
}

// ============================================================================
// Update monitor
// ============================================================================

/// Tracks how long each fold step takes.
#[derive(Debug, Clone)]
pub struct UpdateMonitor {
    stats: OperationStats,
    budget_ms: f64,
    slow_count: u64,
}

impl Default for UpdateMonitor {
    fn default() -> Self {
        Self::new(UPDATE_BUDGET_MS)
    }
}

impl UpdateMonitor {
    pub fn new(budget_ms: f64) -> Self {
        Self {
            stats: OperationStats::default(),
            budget_ms,
            slow_count: 0,
        }
    }

    /// Record one step. Steps over budget are logged.
    pub fn record(&mut self, kind: &'static str, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        self.stats.record(ms);

        if ms > self.budget_ms {
            self.slow_count += 1;
            warn!(
                kind,
                elapsed_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", self.budget_ms),
                "Slow model update"
            );
        }
    }

    /// Time `f` and record it under `kind`.
    pub fn time<T>(&mut self, kind: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(kind, start.elapsed());
        result
    }

    pub fn stats(&self) -> &OperationStats {
        &self.stats
    }

    pub fn slow_count(&self) -> u64 {
        self.slow_count
    }

    pub fn log_summary(&self) {
        debug!(
            count = self.stats.count(),
            avg_ms = format!("{:.3}", self.stats.average()),
            p95_ms = format!("{:.3}", self.stats.p95()),
            max_ms = format!("{:.3}", self.stats.max()),
            slow = self.slow_count,
            "Update timings"
        );
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs the duration of a scope on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a 1ms threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}
