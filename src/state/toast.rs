//! Toast notifications shown in the corner of the screen

use crate::notify::NotificationSink;
use std::time::{Duration, Instant};

/// A single visible toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Toast slot with a fixed time-to-live; a new toast replaces the old one
#[derive(Debug, Clone)]
pub struct Toasts {
    current: Option<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(2500);

    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the toast once its time-to-live has passed
    pub fn expire(&mut self) {
        self.expire_at(Instant::now());
    }

    fn expire_at(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if now.duration_since(toast.shown_at) >= self.ttl {
                self.current = None;
            }
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl NotificationSink for Toasts {
    fn success(&mut self, message: &str) {
        self.current = Some(Toast {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }
}
