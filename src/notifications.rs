//! FIFO notification display queue.
//!
//! One notification is visible at a time; the rest wait in a bounded
//! pending queue. There are no hidden timers — the owning client calls
//! [`NotificationQueue::poll`] with the current instant (typically from
//! its render/tick loop) and the queue expires and promotes notifications
//! from that. This keeps the queue synchronous and fully deterministic
//! under test.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::diagnostics::ErrorInfo;

/// How loud a notification is; decides its default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Display duration used when the caller doesn't pick one.
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Info | Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_secs(8),
        }
    }
}

/// A queued or visible notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Monotonically increasing id, unique within one queue.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// How long the notification stays visible once shown.
    pub duration: Duration,
}

struct ActiveNotification {
    notification: Notification,
    shown_at: Instant,
}

/// Bounded FIFO queue with a single visible slot.
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    current: Option<ActiveNotification>,
    max_pending: usize,
    next_id: u64,
}

impl NotificationQueue {
    pub const DEFAULT_MAX_PENDING: usize = 20;

    pub fn new(max_pending: usize) -> Self {
        NotificationQueue {
            pending: VecDeque::new(),
            current: None,
            max_pending,
            next_id: 0,
        }
    }

    /// Enqueues a notification with the severity's default duration.
    /// Returns its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push_with_duration(message, severity, severity.default_duration())
    }

    /// Enqueues a notification with an explicit display duration.
    ///
    /// When the pending queue is full the oldest pending notification is
    /// dropped (and logged) to make room; the visible one is untouched.
    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.pending.len() >= self.max_pending {
            if let Some(dropped) = self.pending.pop_front() {
                tracing::warn!(
                    id = dropped.id,
                    message = %dropped.message,
                    "Notification queue full; dropping oldest pending"
                );
            }
        }
        self.pending.push_back(Notification {
            id,
            message: message.into(),
            severity,
            duration,
        });
        id
    }

    /// Enqueues an error notification built from the error's full cause
    /// chain.
    pub fn push_error(&mut self, err: &(dyn std::error::Error + 'static)) -> u64 {
        let info = ErrorInfo::from_error(err);
        self.push(info.to_string(), Severity::Error)
    }

    /// Advances the queue: expires the visible notification when its
    /// duration has elapsed and promotes the next pending one. Returns the
    /// notification visible after advancing, if any.
    pub fn poll(&mut self, now: Instant) -> Option<&Notification> {
        if let Some(active) = &self.current {
            if now.saturating_duration_since(active.shown_at) >= active.notification.duration {
                self.current = None;
            }
        }
        if self.current.is_none() {
            if let Some(next) = self.pending.pop_front() {
                self.current = Some(ActiveNotification {
                    notification: next,
                    shown_at: now,
                });
            }
        }
        self.current.as_ref().map(|active| &active.notification)
    }

    /// The currently visible notification, without advancing the queue.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|active| &active.notification)
    }

    /// Removes the visible notification immediately. The next pending one
    /// appears on the next [`poll`](Self::poll).
    pub fn dismiss(&mut self) {
        if let Some(active) = self.current.take() {
            tracing::debug!(id = active.notification.id, "Notification dismissed");
        }
    }

    /// Drops everything, visible and pending.
    pub fn clear(&mut self) {
        self.current = None;
        self.pending.clear();
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is visible and nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PENDING)
    }
}
