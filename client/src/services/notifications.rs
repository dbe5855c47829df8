//! # Notifications
//!
//! What the core tells the user, and two sinks to deliver it:
//!
//! - [`ChannelNotifier`] hands notifications to the UI thread over an
//!   unbounded channel; the UI drains the receiver each frame and renders
//!   toasts or modals.
//! - [`LogNotifier`] writes them as tracing events (CLI and headless use).

use async_channel::{unbounded, Receiver, Sender};

use crate::core::service::Notifier;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    /// Secondary text (the error message for failures)
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    /// Title and detail joined for single-line display.
    pub fn text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.title, detail),
            None => self.title.clone(),
        }
    }
}

/// Notifier that forwards to an async channel.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: Sender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver the UI drains.
    pub fn new() -> (Self, Receiver<Notification>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.try_send(notification) {
            tracing::debug!(title = %e.into_inner().title, "Notification dropped, UI receiver closed");
        }
    }
}

/// Notifier that logs instead of rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(title = %notification.title, "Notification")
            }
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                detail = notification.detail.as_deref().unwrap_or(""),
                "Notification"
            ),
        }
    }
}
