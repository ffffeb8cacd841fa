pub mod telegram;

use crate::error::DeliveryError;

pub use telegram::TelegramNotifier;

/// Outbound chat channel.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an HTML-formatted message to the configured chat.
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Send `text`, logging and discarding any delivery failure.
/// Returns whether the message went out.
pub async fn send_message(notifier: &dyn Notifier, text: &str) -> bool {
    tracing::debug!("sending message to chat");
    match notifier.send(text).await {
        Ok(()) => {
            crate::metrics::notification_sent();
            tracing::debug!(message = text, "bot sent message");
            true
        }
        Err(e) => {
            crate::metrics::delivery_failed();
            tracing::error!(error = %e, "failed to deliver message to chat");
            false
        }
    }
}
