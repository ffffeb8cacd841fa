//! Homework status bot: binary entrypoint.
//! Loads credentials, wires the Practicum client and Telegram notifier, and
//! runs the poll loop until Ctrl-C.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use homework_status_bot::config::{self, Config};
use homework_status_bot::{
    logging, metrics, shutdown, PracticumClient, Poller, TelegramNotifier,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();

    let log_path = std::env::var(config::ENV_LOG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(config::DEFAULT_LOG_PATH));
    logging::init(&log_path)?;

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "CRITICAL: cannot start without credentials");
            return Err(e.into());
        }
    };
    tracing::debug!(config = ?cfg, "configuration loaded");

    if let Ok(addr) = std::env::var(config::ENV_METRICS_ADDR) {
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("{} is not host:port", config::ENV_METRICS_ADDR))?;
        metrics::install_exporter(addr)?;
    }

    let api = PracticumClient::new(&cfg).context("building homework API client")?;
    let bot = TelegramNotifier::new(&cfg).context("building Telegram client")?;
    let from_date = Utc::now().timestamp();

    // Registered before the first cycle so an early Ctrl-C still stops cleanly.
    let stop = shutdown::ctrl_c();

    tracing::debug!(endpoint = api.endpoint(), from_date, "starting poll loop");
    let poller = Poller::new(api, bot, from_date, cfg.retry_period);
    poller.run(stop).await;

    tracing::debug!("poll loop stopped");
    Ok(())
}
