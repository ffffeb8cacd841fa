//! Error taxonomy for the notifier.
//!
//! Only [`ConfigError`] is fatal. Everything a poll cycle can fail with is a
//! [`PollError`], compared by value when deciding whether to notify again.

use thiserror::Error;

/// Startup configuration problem. Aborts the process before polling starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Network or HTTP failure while talking to the homework API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("API request failed: {cause}; endpoint: {endpoint}; from_date: {from_date}")]
    Transport {
        endpoint: String,
        from_date: i64,
        cause: String,
    },

    #[error("API returned HTTP {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("API body is not valid JSON: {0}")]
    Decode(String),
}

/// The API payload does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("expected a JSON object, got {found}")]
    NotAMapping { found: &'static str },

    #[error("response has no \"{0}\" key")]
    MissingKey(&'static str),

    #[error("key \"{key}\" should be {expected}, got {found}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown homework status: {0}")]
    UnknownVerdict(String),
}

/// The messaging collaborator could not deliver a message. Logged, never raised.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("sendMessage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sendMessage returned HTTP {0}")]
    Status(u16),

    #[error("sendMessage rejected: {0}")]
    Rejected(String),
}

/// Anything that can go wrong inside one poll cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
