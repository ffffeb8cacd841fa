// tests/metrics_poller.rs
// Own test binary: the Prometheus recorder is process-global.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};

use homework_status_bot::error::DeliveryError;
use homework_status_bot::{CycleOutcome, FetchError, HomeworkApi, Notifier, Poller};

struct FixedApi(Result<Value, FetchError>);

#[async_trait::async_trait]
impl HomeworkApi for FixedApi {
    async fn fetch(&self, _from_date: i64) -> Result<Value, FetchError> {
        self.0.clone()
    }
}

#[derive(Clone, Default)]
struct Chat {
    sent: Arc<Mutex<Vec<String>>>,
    down: bool,
}

#[async_trait::async_trait]
impl Notifier for Chat {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.down {
            return Err(DeliveryError::Status(502));
        }
        Ok(())
    }
}

fn counter_line(out: &str, name: &str) -> Option<String> {
    out.lines()
        .find(|l| l.starts_with(name) && !l.starts_with('#'))
        .map(str::to_string)
}

#[tokio::test]
async fn poll_series_are_exported() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("recorder");

    // Two identical failures while the chat is down: one alert attempt that
    // fails to deliver, then one suppressed alert.
    let unavailable = FetchError::Status {
        code: 503,
        reason: "Service Unavailable".into(),
    };
    let mut failing = Poller::new(
        FixedApi(Err(unavailable)),
        Chat {
            down: true,
            ..Chat::default()
        },
        100,
        Duration::from_secs(600),
    );
    assert!(matches!(failing.cycle().await, CycleOutcome::Failed(_)));
    assert!(matches!(failing.cycle().await, CycleOutcome::Suppressed(_)));

    // One delivered status message.
    let mut healthy = Poller::new(
        FixedApi(Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved", "reviewer_comment": "ok"}],
            "current_date": 1
        }))),
        Chat::default(),
        100,
        Duration::from_secs(600),
    );
    assert!(matches!(healthy.cycle().await, CycleOutcome::Reported(_)));

    let out = handle.render();
    for (name, value) in [
        ("homework_polls_total", "3"),
        ("homework_poll_errors_total", "2"),
        ("homework_error_notifications_suppressed_total", "1"),
        ("homework_delivery_failures_total", "1"),
        ("homework_notifications_total", "1"),
    ] {
        let line = counter_line(&out, name).unwrap_or_else(|| panic!("{name} missing:\n{out}"));
        assert_eq!(line, format!("{name} {value}"), "{out}");
    }
    assert!(out.contains("homework_last_poll_ts"));
    assert!(out.contains("# HELP homework_poll_errors_total"));
}
