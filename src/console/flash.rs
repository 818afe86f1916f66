use std::time::Duration;

use chrono::{DateTime, Utc};

/// Single-slot message that expires on its own.
///
/// The expiry belongs to the message: writing a new message replaces both
/// the text and its deadline, so an older deadline can never clear a newer
/// message.
#[derive(Debug, Clone)]
pub struct TransientMessage {
    ttl: chrono::Duration,
    slot: Option<(String, DateTime<Utc>)>,
}

impl TransientMessage {
    pub fn new(ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::seconds(5));
        Self { ttl, slot: None }
    }

    pub fn set(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.slot = Some((text.into(), now + self.ttl));
    }

    /// The message, if one is set and has not expired at `now`.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&str> {
        match &self.slot {
            Some((text, expires_at)) if now < *expires_at => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.slot.as_ref().map(|(_, at)| *at)
    }

    /// Drops the message once its deadline has passed. Returns true if it did.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match &self.slot {
            Some((_, expires_at)) if now >= *expires_at => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: i64) -> chrono::Duration {
        chrono::Duration::seconds(n)
    }

    #[test]
    fn visible_until_deadline() {
        let t0 = Utc::now();
        let mut msg = TransientMessage::new(Duration::from_secs(5));
        msg.set("User deleted successfully", t0);
        assert_eq!(msg.current(t0 + secs(4)), Some("User deleted successfully"));
        assert_eq!(msg.current(t0 + secs(5)), None);
        assert!(!msg.tick(t0 + secs(4)));
        assert!(msg.tick(t0 + secs(5)));
        assert!(msg.expires_at().is_none());
    }

    #[test]
    fn overwrite_extends_deadline() {
        let t0 = Utc::now();
        let mut msg = TransientMessage::new(Duration::from_secs(5));
        msg.set("first", t0);
        msg.set("second", t0 + secs(3));
        // the first message's deadline passes without clearing the second
        assert!(!msg.tick(t0 + secs(6)));
        assert_eq!(msg.current(t0 + secs(6)), Some("second"));
        assert!(msg.tick(t0 + secs(8)));
    }
}
