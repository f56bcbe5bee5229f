//! Reporting of operation outcomes to the logger and the merchant.

use std::sync::Arc;

use crate::error::SyncError;
use crate::ports::{Logger, MessageChannel, Severity};

/// Pairs the injected [`Logger`] and [`MessageChannel`].
#[derive(Clone)]
pub struct Reporter {
    logger: Arc<dyn Logger>,
    messages: Arc<dyn MessageChannel>,
}

impl Reporter {
    pub fn new(logger: Arc<dyn Logger>, messages: Arc<dyn MessageChannel>) -> Self {
        Self { logger, messages }
    }

    /// Log `err` under `context` and show it to the merchant; hands it back.
    pub fn failure(&self, context: &str, err: SyncError) -> SyncError {
        let message = err.to_string();
        self.logger.error(&format!("{context}: {message}"));
        self.messages.display(&message, Severity::Error);
        err
    }

    /// Informational notice; never logged as an error.
    pub fn info(&self, message: &str) {
        self.messages.display(message, Severity::Info);
    }

    /// Report the error side of `result`, if any.
    pub fn check<T>(&self, context: &str, result: Result<T, SyncError>) -> Result<T, SyncError> {
        result.map_err(|err| self.failure(context, err))
    }
}

impl core::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
