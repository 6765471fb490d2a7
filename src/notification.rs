use strum_macros::Display;
use tokio::sync::broadcast;

const ALERT_CHANNEL_CAPACITY: usize = 32;

/// Visual variant of a user-facing alert.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum AlertVariant {
    Success,
    Error,
}

/// A single user-facing alert emitted by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    variant: AlertVariant,
}

impl Notification {
    pub fn new(message: impl Into<String>, variant: AlertVariant) -> Self {
        Self { message: message.into(), variant }
    }
    pub fn success(message: impl Into<String>) -> Self { Self::new(message, AlertVariant::Success) }
    pub fn error(message: impl Into<String>) -> Self { Self::new(message, AlertVariant::Error) }
    pub fn message(&self) -> &str { self.message.as_str() }
    pub fn variant(&self) -> AlertVariant { self.variant }
}

/// Capability through which alerts leave the HTTP layer.
///
/// Dispatch is fire-and-forget and must not block.
pub trait NotificationSink: Send + Sync {
    fn dispatch(&self, notification: Notification);
}

/// Broadcast-backed sink; every subscriber sees every alert sent after it subscribed.
#[derive(Debug, Clone)]
pub struct AlertChannel {
    sender: broadcast::Sender<Notification>,
}

impl AlertChannel {
    pub fn new() -> Self { Self::with_capacity(ALERT_CHANNEL_CAPACITY) }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { sender: broadcast::Sender::new(capacity) }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> { self.sender.subscribe() }

    pub fn has_subscribers(&self) -> bool { self.sender.receiver_count() > 0 }
}

impl Default for AlertChannel {
    fn default() -> Self { Self::new() }
}

impl NotificationSink for AlertChannel {
    fn dispatch(&self, notification: Notification) {
        crate::event!("Alert [{}]: {}", notification.variant, notification.message);
        // no subscribers is not an error
        let _ = self.sender.send(notification);
    }
}
