//! Infrastructure layer: configuration, client adapters, message channels.

pub mod client;
pub mod config;
pub mod messages;


pub use client::InMemoryEcommerceClient;
pub use config::{ConfigError, ConfigLoader, SyncSettings};
pub use messages::{BufferedMessageChannel, Notice, TracingMessageChannel};
