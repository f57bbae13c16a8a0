//! Transient notification ("toast") lifecycle.
//!
//! A toast is shown for [`TOAST_VISIBLE`], then slides out for
//! [`TOAST_SLIDE_OUT`], then expires. Time is passed in explicitly so the
//! lifecycle is testable without a clock.

use std::time::{Duration, Instant};

pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
pub const TOAST_SLIDE_OUT: Duration = Duration::from_millis(300);

/// Message shown after a record link is copied.
pub const LINK_COPIED: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    /// Sliding out; `progress_pct` runs from 0 to 99 across the slide-out window.
    Leaving { progress_pct: u8 },
    Expired,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    shown_at: Instant,
    visible_for: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self::with_duration(message, now, TOAST_VISIBLE)
    }

    pub fn with_duration(message: impl Into<String>, now: Instant, visible_for: Duration) -> Self {
        let message = message.into();
        tracing::debug!(message = %message, "toast: shown");
        Self {
            message,
            shown_at: now,
            visible_for,
        }
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < self.visible_for {
            return ToastPhase::Showing;
        }
        let leaving = elapsed - self.visible_for;
        if leaving < TOAST_SLIDE_OUT {
            let pct = leaving.as_millis() * 100 / TOAST_SLIDE_OUT.as_millis();
            ToastPhase::Leaving { progress_pct: pct as u8 }
        } else {
            ToastPhase::Expired
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.phase(now) == ToastPhase::Expired
    }
}
