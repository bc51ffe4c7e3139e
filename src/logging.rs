use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// One structured log record per intercepted job invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRecord {
    pub job: &'static str,
    pub duration_sec: f64,
}

impl ExecutionRecord {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            job: "execution_time",
            duration_sec: elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes an [`ExecutionRecord`] into a machine-parseable log line.
///
/// Encoding is a best-effort side channel: the timing layer reports a
/// failed encode at error level and lets the request complete normally.
pub trait LogEncoder: Send + Sync + 'static {
    fn encode(&self, record: &ExecutionRecord) -> Result<String, EncodeError>;
}

/// Default encoder, emitting one JSON object per record.
#[derive(Debug, Clone, Default)]
pub struct JsonLogEncoder;

impl LogEncoder for JsonLogEncoder {
    fn encode(&self, record: &ExecutionRecord) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(record)?)
    }
}
