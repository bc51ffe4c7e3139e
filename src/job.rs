use std::time::Duration;

use rand::Rng;

/// Inclusive lower bound of the simulated delay, in milliseconds.
pub const MIN_DELAY_MS: u64 = 500;
/// Exclusive upper bound of the simulated delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 2500;

/// Outcome of a single simulated job run.
#[derive(Debug, Clone)]
pub struct JobResult {
    /// The sampled delay the job slept for.
    pub duration_ms: u64,
    /// Human-readable completion message returned to the caller.
    pub message: String,
}

/// Simulates a unit of work by sleeping a pseudo-random duration in
/// `[MIN_DELAY_MS, MAX_DELAY_MS)` milliseconds.
///
/// The reported duration is the sampled value, not a measurement; the
/// wrapping layer measures actual wall-clock time. Dropping the returned
/// future abandons the sleep, so a cancelled job never yields a result.
pub async fn run_job() -> JobResult {
    tracing::info!("job started ...");
    let duration_ms = rand::thread_rng().gen_range(MIN_DELAY_MS..MAX_DELAY_MS);
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
    JobResult {
        duration_ms,
        message: format!("Job is done in {duration_ms}! "),
    }
}
