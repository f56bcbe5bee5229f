//! Merchant-facing message channels.

use std::sync::Mutex;

use storesync_sync::{MessageChannel, Severity};

/// A message queued for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Collects messages until the host UI drains them (e.g. on next page render).
#[derive(Debug, Default)]
pub struct BufferedMessageChannel {
    notices: Mutex<Vec<Notice>>,
}

impl BufferedMessageChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => std::mem::take(&mut *notices),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.notices.lock().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageChannel for BufferedMessageChannel {
    fn display(&self, message: &str, severity: Severity) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(Notice {
                message: message.to_string(),
                severity,
            });
        }
    }
}

/// Emits messages as tracing events, for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMessageChannel;

impl MessageChannel for TracingMessageChannel {
    fn display(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(target: "storesync::notice", severity = severity.as_str(), "{message}"),
            Severity::Info => tracing::info!(target: "storesync::notice", severity = severity.as_str(), "{message}"),
        }
    }
}
