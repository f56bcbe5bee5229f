//! Integration events broadcast to extensions (e.g. "store created").
//!
//! The bus is transport-agnostic; `InMemoryEventBus` is the in-process
//! implementation used by default and in tests.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
