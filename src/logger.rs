use std::time::Duration;

use url::Url;

use crate::error::TransportError;

/// Observability hooks called by the fetch engine.
///
/// These are a side channel only; nothing returned here affects the outcome
/// of a fetch.
pub trait FetchLogger: Send + Sync {
    fn attempt(&self, url: &Url, attempt: u32, max_retries: u32);

    fn transport_error(&self, url: &Url, err: &TransportError);

    fn transient_status(&self, url: &Url, status: u16);

    fn backoff(&self, url: &Url, delay: Duration);
}

/// Emits `tracing` events. The default logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl FetchLogger for TracingLogger {
    fn attempt(&self, url: &Url, attempt: u32, max_retries: u32) {
        tracing::info!(%url, attempt, max_retries, "fetching data");
    }

    fn transport_error(&self, url: &Url, err: &TransportError) {
        tracing::warn!(%url, error = %err, "unable to fetch data");
    }

    fn transient_status(&self, url: &Url, status: u16) {
        tracing::warn!(%url, status, "server error");
    }

    fn backoff(&self, url: &Url, delay: Duration) {
        tracing::debug!(%url, delay_ms = millis(delay), "sleeping before retry");
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl FetchLogger for NoopLogger {
    fn attempt(&self, _: &Url, _: u32, _: u32) {}

    fn transport_error(&self, _: &Url, _: &TransportError) {}

    fn transient_status(&self, _: &Url, _: u16) {}

    fn backoff(&self, _: &Url, _: Duration) {}
}
