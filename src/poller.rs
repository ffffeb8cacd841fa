// src/poller.rs
//! The poll loop: fetch, validate, format, notify, sleep.

use std::future::Future;
use std::time::Duration;

use tokio::time;

use crate::api::HomeworkApi;
use crate::error::PollError;
use crate::homework::{check_response, format_status};
use crate::notify::{send_message, Notifier};

/// Prefix of the chat alert sent when a cycle fails.
pub const FAILURE_PREFIX: &str = "Сбой в работе Бота";

pub fn failure_message(err: &PollError) -> String {
    format!("{FAILURE_PREFIX}: {err}")
}

/// What a single cycle ended with, after error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status message was produced and handed to the notifier.
    Reported(String),
    /// The API had nothing new.
    Quiet,
    /// The cycle failed and the chat was alerted.
    Failed(PollError),
    /// The cycle failed with the same error as last time; log only.
    Suppressed(PollError),
}

pub struct Poller<A, N> {
    api: A,
    notifier: N,
    from_date: i64,
    retry_period: Duration,
    last_error: Option<PollError>,
}

impl<A: HomeworkApi, N: Notifier> Poller<A, N> {
    /// `from_date` stays fixed for the lifetime of the poller.
    pub fn new(api: A, notifier: N, from_date: i64, retry_period: Duration) -> Self {
        crate::metrics::ensure_metrics_described();
        Self {
            api,
            notifier,
            from_date,
            retry_period,
            last_error: None,
        }
    }

    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    pub fn last_error(&self) -> Option<&PollError> {
        self.last_error.as_ref()
    }

    /// Fetch, validate and, for the newest homework, format and notify.
    pub async fn poll_once(&self) -> Result<Option<String>, PollError> {
        crate::metrics::poll_started(chrono::Utc::now().timestamp());

        let response = self.api.fetch(self.from_date).await?;
        let homeworks = check_response(&response)?;
        let Some(latest) = homeworks.first() else {
            tracing::debug!("API returned no new homework statuses");
            return Ok(None);
        };
        let message = format_status(latest)?;
        send_message(&self.notifier, &message).await;
        Ok(Some(message))
    }

    /// One poll plus error handling. Repeated identical failures alert the chat once.
    pub async fn cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(reported) => {
                self.last_error = None;
                match reported {
                    Some(msg) => CycleOutcome::Reported(msg),
                    None => CycleOutcome::Quiet,
                }
            }
            Err(err) => {
                crate::metrics::poll_failed();
                tracing::error!(error = %err, "poll cycle failed");
                if self.last_error.as_ref() == Some(&err) {
                    crate::metrics::error_suppressed();
                    tracing::debug!("same error as last cycle, chat not notified");
                    return CycleOutcome::Suppressed(err);
                }
                send_message(&self.notifier, &failure_message(&err)).await;
                self.last_error = Some(err.clone());
                CycleOutcome::Failed(err)
            }
        }
    }

    /// Poll forever, sleeping `retry_period` after every cycle.
    /// Returns once `shutdown` resolves; it is only observed while sleeping.
    pub async fn run<S>(mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            self.cycle().await;
            tokio::select! {
                _ = time::sleep(self.retry_period) => {}
                _ = &mut shutdown => {
                    tracing::debug!("shutdown requested, leaving poll loop");
                    return;
                }
            }
        }
    }
}
