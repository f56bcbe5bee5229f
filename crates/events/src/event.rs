use chrono::{DateTime, Utc};

/// A fact published on the bus after a remote operation succeeded.
///
/// Listeners see the payload only; the envelope carries routing metadata
/// derived from these methods.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name listeners filter on, e.g. `"stores.store.created"`.
    fn event_type(&self) -> &'static str;

    /// Payload schema version. Bump when a field changes meaning.
    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc>;
}
