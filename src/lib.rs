// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod homework;
pub mod logging;
pub mod metrics;
pub mod notify;
pub mod poller;
pub mod shutdown;
pub mod verdict;

// ---- Re-exports for stable public API ----
pub use crate::api::{HomeworkApi, PracticumClient};
pub use crate::config::Config;
pub use crate::error::{ConfigError, DeliveryError, FetchError, PollError, SchemaError};
pub use crate::homework::{check_response, format_status, parse_status, HomeworkStatus};
pub use crate::notify::{send_message, Notifier, TelegramNotifier};
pub use crate::poller::{CycleOutcome, Poller};
pub use crate::verdict::Verdict;
