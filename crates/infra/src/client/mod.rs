//! `EcommerceClient` implementations.
//!
//! HTTP clients for a concrete marketing API live with the host; this module
//! carries the in-process implementation used for development and tests.

pub mod in_memory;

pub use in_memory::InMemoryEcommerceClient;
