use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Sink for execution-time measurements.
///
/// Implementations must be safe to share across request tasks; the layer
/// calls `record_execution` concurrently without any locking of its own.
pub trait MetricSink: Send + Sync + 'static {
    /// Record one completed job execution and how long it took.
    fn record_execution(&self, elapsed: Duration);

    /// Render current values in Prometheus text format.
    fn render(&self) -> String;
}

/// Atomic timer for job executions: a count and a cumulative duration,
/// exposed as a Prometheus summary.
#[derive(Debug, Default)]
pub struct JobMetrics {
    executions: AtomicU64,
    total_nanos: AtomicU64,
}

impl JobMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of executions recorded so far.
    pub fn execution_count(&self) -> u64 {
        self.executions.load(Ordering::Relaxed)
    }

    /// Total recorded execution time in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.total_nanos.load(Ordering::Relaxed) as f64 / 1_000_000_000.0
    }
}

impl MetricSink for JobMetrics {
    fn record_execution(&self, elapsed: Duration) {
        self.executions.fetch_add(1, Ordering::Relaxed);
        self.total_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    fn render(&self) -> String {
        format!(
            "# HELP job_execution_time_seconds Time taken to execute job\n\
             # TYPE job_execution_time_seconds summary\n\
             job_execution_time_seconds_count{{endpoint=\"/job\"}} {}\n\
             job_execution_time_seconds_sum{{endpoint=\"/job\"}} {}\n",
            self.execution_count(),
            self.total_seconds(),
        )
    }
}
