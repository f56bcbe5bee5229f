use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, RwLock};

use storesync_catalog::{Product, Store, Variant, VariantPage};
use storesync_core::{Price, ProductId, StoreId, VariantId};
use storesync_sync::{ApiError, ApiResult, EcommerceClient};

const STORE_EXISTS: &str = "A store with the provided ID already exists.";
const PRODUCT_EXISTS: &str = "A product with the provided ID already exists in the account.";
const VARIANT_EXISTS: &str = "A variant with the provided ID already exists.";
const NOT_FOUND: &str = "The requested resource could not be found.";

#[derive(Debug, Clone)]
struct RemoteStore {
    store: Store,
    products: BTreeMap<ProductId, Product>,
}

/// In-process stand-in for the remote e-commerce API.
///
/// Behaves like the remote where the sync layer cares: unknown stores and
/// products answer 404, duplicates answer 400, and a single-variant lookup
/// for an unknown variant answers with a blank variant rather than a 404.
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryEcommerceClient {
    stores: RwLock<HashMap<StoreId, RemoteStore>>,
    injected: Mutex<Option<ApiError>>,
}

impl InMemoryEcommerceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `err`, whatever it is.
    pub fn fail_next(&self, err: ApiError) {
        if let Ok(mut injected) = self.injected.lock() {
            *injected = Some(err);
        }
    }

    pub fn store(&self, store_id: &StoreId) -> Option<Store> {
        self.read(|stores| stores.get(store_id).map(|s| s.store.clone()))
    }

    pub fn product(&self, store_id: &StoreId, product_id: &ProductId) -> Option<Product> {
        self.read(|stores| stores.get(store_id).and_then(|s| s.products.get(product_id).cloned()))
    }

    pub fn product_ids(&self, store_id: &StoreId) -> Vec<ProductId> {
        self.read(|stores| {
            stores
                .get(store_id)
                .map(|s| s.products.keys().cloned().collect())
                .unwrap_or_default()
        })
    }

    fn read<T: Default>(&self, f: impl FnOnce(&HashMap<StoreId, RemoteStore>) -> T) -> T {
        self.stores.read().map(|stores| f(&stores)).unwrap_or_default()
    }

    fn take_injected(&self) -> ApiResult<()> {
        let injected = self
            .injected
            .lock()
            .map_err(|_| ApiError::from_code(500, "lock poisoned"))?
            .take();
        match injected {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn with_stores<T>(&self, f: impl FnOnce(&mut HashMap<StoreId, RemoteStore>) -> ApiResult<T>) -> ApiResult<T> {
        self.take_injected()?;
        let mut stores = self
            .stores
            .write()
            .map_err(|_| ApiError::from_code(500, "lock poisoned"))?;
        f(&mut stores)
    }

    fn with_store<T>(&self, store_id: &StoreId, f: impl FnOnce(&mut RemoteStore) -> ApiResult<T>) -> ApiResult<T> {
        self.with_stores(|stores| {
            let store = stores.get_mut(store_id).ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
            f(store)
        })
    }

    fn with_product<T>(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        f: impl FnOnce(&mut Product) -> ApiResult<T>,
    ) -> ApiResult<T> {
        self.with_store(store_id, |store| {
            let product = store
                .products
                .get_mut(product_id)
                .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
            f(product)
        })
    }
}

fn blank_variant() -> Variant {
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

impl EcommerceClient for InMemoryEcommerceClient {
    fn add_product(&self, store_id: &StoreId, product: &Product) -> ApiResult<()> {
        tracing::debug!(%store_id, product_id = %product.id, "in-memory: add product");
        self.with_store(store_id, |store| {
            if store.products.contains_key(&product.id) {
                return Err(ApiError::from_code(400, PRODUCT_EXISTS));
            }
            store.products.insert(product.id.clone(), product.clone());
            Ok(())
        })
    }

    fn update_product(&self, store_id: &StoreId, product_id: &ProductId, product: &Product) -> ApiResult<()> {
        tracing::debug!(%store_id, %product_id, "in-memory: update product");
        self.with_product(store_id, product_id, |existing| {
            // Variants are managed through their own endpoints; a payload
            // without variants leaves the current ones in place.
            let variants = if product.variants.is_empty() {
                std::mem::take(&mut existing.variants)
            } else {
                product.variants.clone()
            };
            *existing = Product {
                id: product_id.clone(),
                variants,
                ..product.clone()
            };
            Ok(())
        })
    }

    fn delete_product(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<()> {
        tracing::debug!(%store_id, %product_id, "in-memory: delete product");
        self.with_store(store_id, |store| {
            store
                .products
                .remove(product_id)
                .map(|_| ())
                .ok_or_else(|| ApiError::not_found(NOT_FOUND))
        })
    }

    fn add_product_variant(&self, store_id: &StoreId, product_id: &ProductId, variant: &Variant) -> ApiResult<()> {
        tracing::debug!(%store_id, %product_id, variant_id = %variant.id, "in-memory: add variant");
        self.with_product(store_id, product_id, |product| {
            if product.variant(&variant.id).is_some() {
                return Err(ApiError::from_code(400, VARIANT_EXISTS));
            }
            product.variants.push(variant.clone());
            Ok(())
        })
    }

    fn get_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<Variant> {
        self.with_product(store_id, product_id, |product| {
            Ok(product.variant(variant_id).cloned().unwrap_or_else(blank_variant))
        })
    }

    fn get_product_variants(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<VariantPage> {
        self.with_product(store_id, product_id, |product| {
            Ok(VariantPage::from_variants(product.variants.clone()))
        })
    }

    fn delete_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<()> {
        tracing::debug!(%store_id, %product_id, %variant_id, "in-memory: delete variant");
        self.with_product(store_id, product_id, |product| {
            let before = product.variants.len();
            product.variants.retain(|v| &v.id != variant_id);
            if product.variants.len() == before {
                return Err(ApiError::not_found(NOT_FOUND));
            }
            Ok(())
        })
    }

    fn add_store(&self, store: &Store) -> ApiResult<Store> {
        tracing::debug!(store_id = %store.id, "in-memory: add store");
        self.with_stores(|stores| {
            if stores.contains_key(&store.id) {
                return Err(ApiError::from_code(400, STORE_EXISTS));
            }
            stores.insert(
                store.id.clone(),
                RemoteStore {
                    store: store.clone(),
                    products: BTreeMap::new(),
                },
            );
            Ok(store.clone())
        })
    }

    fn update_store(&self, store: &Store) -> ApiResult<()> {
        tracing::debug!(store_id = %store.id, "in-memory: update store");
        self.with_store(&store.id, |existing| {
            existing.store = store.clone();
            Ok(())
        })
    }

    fn get_store(&self, store_id: &StoreId) -> ApiResult<Store> {
        self.with_store(store_id, |store| Ok(store.store.clone()))
    }
}
