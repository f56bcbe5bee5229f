//! Capabilities the host injects into the synchronizers.

use storesync_core::StoreId;

/// Error sink for failed operations.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
}

/// Severity of a message shown to the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Merchant-facing message channel (admin UI notices, CLI output, ...).
pub trait MessageChannel: Send + Sync {
    fn display(&self, message: &str, severity: Severity);
}

/// Read-only site settings the synchronizers need.
pub trait ConfigProvider: Send + Sync {
    /// Store the catalog is synced into, if one has been set up.
    fn store_id(&self) -> Option<StoreId>;

    /// Absolute base URL of the storefront (no trailing slash required).
    fn site_base_url(&self) -> String;

    /// Name of the image field holding the product image.
    fn product_image_field(&self) -> Option<String>;
}

/// [`Logger`] that forwards to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "storesync", "{message}");
    }
}
