//! `storesync-core` — identifiers and value objects shared by the sync crates.
//!
//! This crate contains **pure domain** primitives (no IO, no remote calls).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, StoreId, VariantId};
pub use value_object::Price;
