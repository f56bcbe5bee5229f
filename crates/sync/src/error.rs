//! Failure taxonomy of sync operations.

use thiserror::Error;

use storesync_core::ProductId;

use crate::client::ApiError;

/// Why a sync operation did not complete.
///
/// Display strings are the user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// No store is configured; nothing was sent.
    #[error("Cannot {action} without a store ID.")]
    MissingStoreId { action: &'static str },

    /// The product payload has no variants; the remote cannot hold it.
    #[error("Cannot add product {product_id} without at least one variant.")]
    NoVariants { product_id: ProductId },

    /// The remote does not know the addressed resource (404).
    #[error("{0}")]
    NotFound(String),

    /// Any other remote failure.
    #[error("{0}")]
    Remote(ApiError),
}

impl SyncError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Failures detected before any remote call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingStoreId { .. } | Self::NoVariants { .. })
    }
}

impl From<ApiError> for SyncError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(message) => Self::NotFound(message),
            other => Self::Remote(other),
        }
    }
}
