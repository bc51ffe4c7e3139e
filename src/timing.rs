use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{ready, Context, Poll},
    time::Instant,
};

use axum::http::{Request, Response};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::logging::{ExecutionRecord, LogEncoder};
use crate::metrics::MetricSink;

/// Measures wall-clock time around the wrapped service and reports it to
/// the injected metric and log collaborators.
///
/// The two side effects are intentionally asymmetric: the log line is
/// emitted for every completed call, while the timer only records calls
/// that came back successful.
#[derive(Clone)]
pub struct ExecutionTimeLayer {
    metrics: Arc<dyn MetricSink>,
    encoder: Arc<dyn LogEncoder>,
}

impl ExecutionTimeLayer {
    pub fn new(metrics: Arc<dyn MetricSink>, encoder: Arc<dyn LogEncoder>) -> Self {
        ExecutionTimeLayer { metrics, encoder }
    }
}

impl<S> Layer<S> for ExecutionTimeLayer {
    type Service = ExecutionTimeService<S>;

    fn layer(&self, service: S) -> Self::Service {
        ExecutionTimeService {
            service,
            metrics: Arc::clone(&self.metrics),
            encoder: Arc::clone(&self.encoder),
        }
    }
}

#[derive(Clone)]
pub struct ExecutionTimeService<S> {
    service: S,
    metrics: Arc<dyn MetricSink>,
    encoder: Arc<dyn LogEncoder>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for ExecutionTimeService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        tracing::debug!(path = %req.uri().path(), "execution path");
        ResponseFuture {
            inner: self.service.call(req),
            start: Instant::now(),
            metrics: Arc::clone(&self.metrics),
            encoder: Arc::clone(&self.encoder),
        }
    }
}

pin_project! {
    pub struct ResponseFuture<F> {
        #[pin]
        inner: F,
        start: Instant,
        metrics: Arc<dyn MetricSink>,
        encoder: Arc<dyn LogEncoder>,
    }
}

impl<F, B, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<B>, E>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let result = ready!(this.inner.poll(cx));
        let elapsed = this.start.elapsed();

        // Timer records successful calls only; the log line covers both
        // outcomes.
        if matches!(&result, Ok(response) if response.status().is_success()) {
            this.metrics.record_execution(elapsed);
        }
        emit_log(this.encoder.as_ref(), ExecutionRecord::new(elapsed));

        Poll::Ready(result)
    }
}

fn emit_log(encoder: &dyn LogEncoder, record: ExecutionRecord) {
    match encoder.encode(&record) {
        Ok(line) => tracing::info!("{line}"),
        Err(err) => tracing::error!("error encoding execution record: {err}"),
    }
}
