//! Transient toast messages.

use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub shown_at: Instant,
}

impl Notification {
    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            shown_at: now,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_ttl() {
        let start = Instant::now();
        let toast = Notification::info("Email copied to clipboard!", start);
        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(2999)));
        assert!(toast.is_expired(start + NOTIFICATION_TTL));
    }

    #[test]
    fn test_clock_going_backwards_is_not_expired() {
        let start = Instant::now() + Duration::from_secs(10);
        let toast = Notification::error("failed", start);
        assert!(!toast.is_expired(Instant::now()));
    }
}
