//! Store registration with the remote API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storesync_catalog::{Store, StoreProfile};
use storesync_core::StoreId;
use storesync_events::{Event, EventBus, EventEnvelope};

use crate::client::EcommerceClient;
use crate::error::SyncError;
use crate::report::Reporter;

/// Event: StoreCreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreCreated {
    /// The store as the remote recorded it.
    pub store: Store,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    StoreCreated(StoreCreated),
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::StoreCreated(_) => "stores.store.created",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::StoreCreated(e) => e.occurred_at,
        }
    }
}

/// Creates, updates and looks up the merchant's store.
///
/// Successful creations are broadcast on `bus` so extensions can react.
pub struct StoreSynchronizer<C, B> {
    client: C,
    bus: B,
    reporter: Reporter,
}

impl<C, B> StoreSynchronizer<C, B>
where
    C: EcommerceClient,
    B: EventBus<EventEnvelope<StoreEvent>>,
{
    pub fn new(client: C, bus: B, reporter: Reporter) -> Self {
        Self { client, bus, reporter }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// The remote store, or `None` if it does not exist (or the lookup failed).
    ///
    /// A missing store is an expected answer and is not reported.
    pub fn get_store(&self, store_id: &StoreId) -> Option<Store> {
        match self.client.get_store(store_id) {
            Ok(store) => Some(store),
            Err(err) if err.is_not_found() => {
                tracing::debug!(%store_id, "store not registered remotely");
                None
            }
            Err(err) => {
                self.reporter.failure("Unable to get store", SyncError::from(err));
                None
            }
        }
    }

    /// Register a store, then broadcast the created representation.
    pub fn create_store(&self, store_id: StoreId, profile: StoreProfile, platform: &str) -> Result<Store, SyncError> {
        let store = profile.into_store(store_id, platform);
        tracing::debug!(store_id = %store.id, platform, "adding store");

        let created = self
            .client
            .add_store(&store)
            .map_err(|err| self.reporter.failure("Unable to add a new store", SyncError::from(err)))?;

        let event = StoreEvent::StoreCreated(StoreCreated {
            store: created.clone(),
            occurred_at: Utc::now(),
        });
        if let Err(err) = self.bus.publish(EventEnvelope::wrap(created.id.clone(), event)) {
            tracing::warn!(store_id = %created.id, error = ?err, "failed to broadcast store creation");
        }

        tracing::info!(store_id = %created.id, "store created");
        Ok(created)
    }

    pub fn update_store(
        &self,
        store_id: &StoreId,
        name: &str,
        currency_code: &str,
        platform: &str,
    ) -> Result<(), SyncError> {
        let store = StoreProfile::new(name, currency_code).into_store(store_id.clone(), platform);
        tracing::debug!(%store_id, platform, "updating store");

        let result = self.client.update_store(&store).map_err(SyncError::from);
        self.reporter.check("Unable to update a store", result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storesync_events::{InMemoryEventBus, Subscription};

    use super::*;
    use crate::client::ApiError;
    use crate::ports::Severity;
    use crate::test_support::{Op, Recorders, ScriptedClient, store_id};

    type Bus = Arc<InMemoryEventBus<EventEnvelope<StoreEvent>>>;

    fn setup() -> (StoreSynchronizer<Arc<ScriptedClient>, Bus>, Arc<ScriptedClient>, Recorders) {
        let client = ScriptedClient::new();
        let recorders = Recorders::new();
        let sync = StoreSynchronizer::new(client.clone(), Arc::new(InMemoryEventBus::new()), recorders.reporter());
        (sync, client, recorders)
    }

    fn remote_store() -> Store {
        StoreProfile::new("Corner Shop", "EUR").into_store(store_id(), "storesync")
    }

    #[test]
    fn get_store_returns_remote_store() {
        let (sync, client, _) = setup();
        client.answer_store(remote_store());

        assert_eq!(sync.get_store(&store_id()), Some(remote_store()));
    }

    #[test]
    fn missing_store_is_not_logged() {
        let (sync, _client, recorders) = setup();

        assert_eq!(sync.get_store(&store_id()), None);
        assert!(recorders.logger.errors().is_empty());
        assert!(recorders.channel.messages().is_empty());
    }

    #[test]
    fn other_lookup_failures_are_logged() {
        for code in [400u16, 401, 403, 500, 503] {
            let (sync, client, recorders) = setup();
            client.fail(Op::GetStore, ApiError::from_code(code, "nope"));

            assert_eq!(sync.get_store(&store_id()), None);
            assert_eq!(recorders.logger.errors(), vec!["Unable to get store: nope".to_string()]);
        }
    }

    #[test]
    fn create_store_broadcasts_the_created_store() {
        let (sync, client, _) = setup();
        let listener = sync.bus().subscribe();

        let created = sync
            .create_store(store_id(), StoreProfile::new("Corner Shop", "EUR"), "storesync")
            .unwrap();

        assert_eq!(created, remote_store());
        assert_eq!(client.ops(), vec![Op::AddStore]);

        let received = listener.drain();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].event_type(), "stores.store.created");
        assert_eq!(received[0].store_id(), &store_id());
        match received[0].payload() {
            StoreEvent::StoreCreated(e) => assert_eq!(e.store, remote_store()),
        }
    }

    /// Bus whose every publish fails.
    struct BrokenBus;

    impl EventBus<EventEnvelope<StoreEvent>> for BrokenBus {
        type Error = &'static str;

        fn publish(&self, _message: EventEnvelope<StoreEvent>) -> Result<(), Self::Error> {
            Err("bus offline")
        }

        fn subscribe(&self) -> Subscription<EventEnvelope<StoreEvent>> {
            Subscription::new(std::sync::mpsc::channel().1)
        }
    }

    #[test]
    fn broadcast_failure_does_not_fail_creation() {
        let client = ScriptedClient::new();
        let recorders = Recorders::new();
        let sync = StoreSynchronizer::new(client.clone(), BrokenBus, recorders.reporter());

        let created = sync
            .create_store(store_id(), StoreProfile::new("Corner Shop", "EUR"), "storesync")
            .unwrap();

        assert_eq!(created, remote_store());
        assert_eq!(client.ops(), vec![Op::AddStore]);
        assert!(recorders.logger.errors().is_empty());
        assert!(recorders.channel.messages().is_empty());
    }

    #[test]
    fn failed_creation_broadcasts_nothing() {
        let (sync, client, recorders) = setup();
        client.fail(Op::AddStore, ApiError::from_code(400, "Store already exists"));
        let listener = sync.bus().subscribe();

        let err = sync
            .create_store(store_id(), StoreProfile::new("Corner Shop", "EUR"), "storesync")
            .unwrap_err();

        assert!(matches!(err, SyncError::Remote(_)));
        assert!(listener.drain().is_empty());
        assert_eq!(
            recorders.logger.errors(),
            vec!["Unable to add a new store: Store already exists".to_string()]
        );
        assert_eq!(
            recorders.channel.messages(),
            vec![("Store already exists".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn update_store_sends_new_settings() {
        let (sync, client, recorders) = setup();

        sync.update_store(&store_id(), "Corner Shop", "USD", "storesync").unwrap();

        assert_eq!(client.calls(), vec![(Op::UpdateStore, "store-1".to_string())]);
        assert!(recorders.logger.errors().is_empty());
    }

    #[test]
    fn update_store_failure_is_reported() {
        let (sync, client, recorders) = setup();
        client.fail(Op::UpdateStore, ApiError::not_found("Resource Not Found"));

        assert!(sync.update_store(&store_id(), "Corner Shop", "USD", "storesync").is_err());
        assert_eq!(
            recorders.logger.errors(),
            vec!["Unable to update a store: Resource Not Found".to_string()]
        );
    }
}
