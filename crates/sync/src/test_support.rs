//! Scripted client and recording ports for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use storesync_catalog::{Product, Store, Variant, VariantPage};
use storesync_core::{Price, ProductId, StoreId, VariantId};

use crate::client::{ApiError, ApiResult, EcommerceClient};
use crate::ports::{ConfigProvider, Logger, MessageChannel, Severity};
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Op {
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    AddVariant,
    GetVariant,
    GetVariants,
    DeleteVariant,
    AddStore,
    UpdateStore,
    GetStore,
}

impl Op {
    pub(crate) fn is_mutation(self) -> bool {
        !matches!(self, Op::GetVariant | Op::GetVariants | Op::GetStore)
    }
}

/// Client whose answers are set up per test; records every call.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    calls: Mutex<Vec<(Op, String)>>,
    failures: Mutex<HashMap<Op, ApiError>>,
    variant_counts: Mutex<HashMap<ProductId, u64>>,
    variant_payload: Mutex<Option<Variant>>,
    store: Mutex<Option<Store>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn fail(&self, op: Op, err: ApiError) {
        self.failures.lock().unwrap().insert(op, err);
    }

    pub(crate) fn with_variants(&self, product_id: &ProductId, count: u64) {
        self.variant_counts.lock().unwrap().insert(product_id.clone(), count);
    }

    pub(crate) fn answer_variant(&self, variant: Variant) {
        *self.variant_payload.lock().unwrap() = Some(variant);
    }

    pub(crate) fn answer_store(&self, store: Store) {
        *self.store.lock().unwrap() = Some(store);
    }

    pub(crate) fn calls(&self) -> Vec<(Op, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn ops(&self) -> Vec<Op> {
        self.calls().into_iter().map(|(op, _)| op).collect()
    }

    pub(crate) fn mutations(&self) -> Vec<(Op, String)> {
        self.calls().into_iter().filter(|(op, _)| op.is_mutation()).collect()
    }

    fn record(&self, op: Op, target: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push((op, target));
        match self.failures.lock().unwrap().get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl EcommerceClient for ScriptedClient {
    fn add_product(&self, _store_id: &StoreId, product: &Product) -> ApiResult<()> {
        self.record(Op::AddProduct, product.id.to_string())
    }

    fn update_product(&self, _store_id: &StoreId, product_id: &ProductId, _product: &Product) -> ApiResult<()> {
        self.record(Op::UpdateProduct, product_id.to_string())
    }

    fn delete_product(&self, _store_id: &StoreId, product_id: &ProductId) -> ApiResult<()> {
        self.record(Op::DeleteProduct, product_id.to_string())
    }

    fn add_product_variant(&self, _store_id: &StoreId, product_id: &ProductId, variant: &Variant) -> ApiResult<()> {
        self.record(Op::AddVariant, format!("{product_id}/{}", variant.id))
    }

    fn get_product_variant(
        &self,
        _store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<Variant> {
        self.record(Op::GetVariant, format!("{product_id}/{variant_id}"))?;
        Ok(self
            .variant_payload
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(blank_variant))
    }

    fn get_product_variants(&self, _store_id: &StoreId, product_id: &ProductId) -> ApiResult<VariantPage> {
        self.record(Op::GetVariants, product_id.to_string())?;
        let counts = self.variant_counts.lock().unwrap();
        let total = counts
            .get(product_id)
            .copied()
            .ok_or_else(|| ApiError::not_found("The requested resource could not be found."))?;
        Ok(VariantPage {
            total_items: total,
            variants: Vec::new(),
        })
    }

    fn delete_product_variant(
        &self,
        _store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<()> {
        self.record(Op::DeleteVariant, format!("{product_id}/{variant_id}"))
    }

    fn add_store(&self, store: &Store) -> ApiResult<Store> {
        self.record(Op::AddStore, store.id.to_string())?;
        Ok(store.clone())
    }

    fn update_store(&self, store: &Store) -> ApiResult<()> {
        self.record(Op::UpdateStore, store.id.to_string())
    }

    fn get_store(&self, store_id: &StoreId) -> ApiResult<Store> {
        self.record(Op::GetStore, store_id.to_string())?;
        self.store
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::not_found("The requested resource could not be found."))
    }
}

pub(crate) fn blank_variant() -> Variant {
    Variant {
        id: VariantId::from(0),
        title: String::new(),
        url: String::new(),
        image_url: String::new(),
        sku: String::new(),
        price: Price::ZERO,
        stock: 0,
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    errors: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub(crate) struct RecordingChannel {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingChannel {
    pub(crate) fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }
}

impl MessageChannel for RecordingChannel {
    fn display(&self, message: &str, severity: Severity) {
        self.messages.lock().unwrap().push((message.to_string(), severity));
    }
}

pub(crate) struct StaticConfig {
    pub(crate) store_id: Option<StoreId>,
}

impl ConfigProvider for StaticConfig {
    fn store_id(&self) -> Option<StoreId> {
        self.store_id.clone()
    }

    fn site_base_url(&self) -> String {
        "https://shop.test".to_string()
    }

    fn product_image_field(&self) -> Option<String> {
        Some("field_image".to_string())
    }
}

/// Logger + channel + reporter wired together.
pub(crate) struct Recorders {
    pub(crate) logger: Arc<RecordingLogger>,
    pub(crate) channel: Arc<RecordingChannel>,
}

impl Recorders {
    pub(crate) fn new() -> Self {
        Self {
            logger: Arc::new(RecordingLogger::default()),
            channel: Arc::new(RecordingChannel::default()),
        }
    }

    pub(crate) fn reporter(&self) -> Reporter {
        Reporter::new(self.logger.clone(), self.channel.clone())
    }
}

pub(crate) fn store_id() -> StoreId {
    StoreId::new("store-1").unwrap()
}

pub(crate) fn product_id(id: u64) -> ProductId {
    ProductId::from(id)
}

pub(crate) fn variant(id: u64, sku: &str) -> Variant {
    Variant {
        id: VariantId::from(id),
        title: "Mug".to_string(),
        url: "https://shop.test/product/1".to_string(),
        image_url: String::new(),
        sku: sku.to_string(),
        price: Price::from_minor_units(1200),
        stock: 100,
    }
}

pub(crate) fn product(id: u64, variants: Vec<Variant>) -> Product {
    Product {
        id: product_id(id),
        title: "Mug".to_string(),
        url: "https://shop.test/product/1".to_string(),
        image_url: String::new(),
        description: "Stoneware".to_string(),
        product_type: "default".to_string(),
        variants,
    }
}
