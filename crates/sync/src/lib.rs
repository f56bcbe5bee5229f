//! Synchronization of products and stores with the external marketing API.
//!
//! Every operation is one request translated into one (or, for variant
//! deletion, two) calls on an injected [`EcommerceClient`]. Failures are
//! reported at the operation boundary through the injected [`Logger`] and
//! [`MessageChannel`] and then handed back to the caller as a value.

pub mod client;
pub mod error;
pub mod ports;
pub mod product_sync;
pub mod report;
pub mod store_sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ApiError, ApiResult, EcommerceClient, NOT_FOUND};
pub use error::SyncError;
pub use ports::{ConfigProvider, Logger, MessageChannel, Severity, TracingLogger};
pub use product_sync::{ProductRef, ProductSynchronizer, UpdateOutcome, VariantDeletion};
pub use report::Reporter;
pub use store_sync::{StoreCreated, StoreEvent, StoreSynchronizer};
pub use storesync_catalog::VariationLoader;
