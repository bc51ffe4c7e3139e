//! A demonstration service with a single `GET /job` endpoint that simulates
//! a variable-duration job and reports its execution time through a timer
//! metric and a structured log line.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod job;
pub mod logging;
pub mod metrics;
pub mod timing;

pub use job::{run_job, JobResult, MAX_DELAY_MS, MIN_DELAY_MS};
pub use logging::{EncodeError, ExecutionRecord, JsonLogEncoder, LogEncoder};
pub use metrics::{JobMetrics, MetricSink};
pub use timing::ExecutionTimeLayer;


/// Builds the service router.
///
/// The timing layer wraps the job route only; `/metrics` serves the sink's
/// rendered state without being measured itself.
pub fn app(metrics: Arc<dyn MetricSink>, encoder: Arc<dyn LogEncoder>) -> Router {
    let timing = ExecutionTimeLayer::new(Arc::clone(&metrics), encoder);
    Router::new()
        .route("/job", get(job_handler).layer(timing))
        .route("/metrics", get(move || async move { metrics.render() }))
}

async fn job_handler() -> String {
    run_job().await.message
}
