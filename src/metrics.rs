use std::net::SocketAddr;

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("homework_polls_total", "Poll cycles started.");
        describe_counter!(
            "homework_poll_errors_total",
            "Poll cycles that failed with a fetch or schema error."
        );
        describe_counter!(
            "homework_notifications_total",
            "Messages delivered to the chat."
        );
        describe_counter!(
            "homework_delivery_failures_total",
            "Messages the chat API refused or never received."
        );
        describe_counter!(
            "homework_error_notifications_suppressed_total",
            "Failure alerts skipped because the error repeated."
        );
        describe_gauge!("homework_last_poll_ts", "Unix ts of the last poll cycle.");
    });
}

/// Install the Prometheus recorder with its own HTTP listener on `addr`.
/// Must be called from inside a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("prometheus: install exporter")?;
    ensure_metrics_described();
    tracing::debug!(%addr, "prometheus exporter listening");
    Ok(())
}

pub(crate) fn poll_started(now: i64) {
    counter!("homework_polls_total").increment(1);
    gauge!("homework_last_poll_ts").set(now as f64);
}

pub(crate) fn poll_failed() {
    counter!("homework_poll_errors_total").increment(1);
}

pub(crate) fn notification_sent() {
    counter!("homework_notifications_total").increment(1);
}

pub(crate) fn delivery_failed() {
    counter!("homework_delivery_failures_total").increment(1);
}

pub(crate) fn error_suppressed() {
    counter!("homework_error_notifications_suppressed_total").increment(1);
}
