//! The external e-commerce API, as seen by the sync layer.
//!
//! Transport, authentication and timeouts are the implementation's business.
//! The only thing this layer inspects in a failure is whether it means
//! "not found".

use std::sync::Arc;

use thiserror::Error;

use storesync_catalog::{Product, Store, Variant, VariantPage};
use storesync_core::{ProductId, StoreId, VariantId};

/// Status code the remote uses for "no such resource".
pub const NOT_FOUND: u16 = 404;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by the remote API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The addressed resource does not exist remotely (code 404).
    #[error("{0}")]
    NotFound(String),

    /// Any other failure, with the remote status code.
    #[error("{message}")]
    Remote { code: u16, message: String },
}

impl ApiError {
    /// Classify a raw status code + message.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == NOT_FOUND {
            Self::NotFound(message)
        } else {
            Self::Remote { code, message }
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::NotFound(_) => NOT_FOUND,
            Self::Remote { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Remote { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Client for the remote e-commerce endpoints.
///
/// Calls are blocking; the synchronizers never call concurrently on their own
/// but may be shared between threads, hence `Send + Sync`.
pub trait EcommerceClient: Send + Sync {
    fn add_product(&self, store_id: &StoreId, product: &Product) -> ApiResult<()>;

    fn update_product(&self, store_id: &StoreId, product_id: &ProductId, product: &Product) -> ApiResult<()>;

    fn delete_product(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<()>;

    fn add_product_variant(&self, store_id: &StoreId, product_id: &ProductId, variant: &Variant) -> ApiResult<()>;

    /// May answer with a blank variant instead of a 404; see [`Variant::exists`].
    fn get_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<Variant>;

    fn get_product_variants(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<VariantPage>;

    fn delete_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<()>;

    /// Returns the store as the remote recorded it.
    fn add_store(&self, store: &Store) -> ApiResult<Store>;

    fn update_store(&self, store: &Store) -> ApiResult<()>;

    fn get_store(&self, store_id: &StoreId) -> ApiResult<Store>;
}

impl<C> EcommerceClient for Arc<C>
where
    C: EcommerceClient + ?Sized,
{
    fn add_product(&self, store_id: &StoreId, product: &Product) -> ApiResult<()> {
        (**self).add_product(store_id, product)
    }

    fn update_product(&self, store_id: &StoreId, product_id: &ProductId, product: &Product) -> ApiResult<()> {
        (**self).update_product(store_id, product_id, product)
    }

    fn delete_product(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<()> {
        (**self).delete_product(store_id, product_id)
    }

    fn add_product_variant(&self, store_id: &StoreId, product_id: &ProductId, variant: &Variant) -> ApiResult<()> {
        (**self).add_product_variant(store_id, product_id, variant)
    }

    fn get_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<Variant> {
        (**self).get_product_variant(store_id, product_id, variant_id)
    }

    fn get_product_variants(&self, store_id: &StoreId, product_id: &ProductId) -> ApiResult<VariantPage> {
        (**self).get_product_variants(store_id, product_id)
    }

    fn delete_product_variant(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<()> {
        (**self).delete_product_variant(store_id, product_id, variant_id)
    }

    fn add_store(&self, store: &Store) -> ApiResult<Store> {
        (**self).add_store(store)
    }

    fn update_store(&self, store: &Store) -> ApiResult<()> {
        (**self).update_store(store)
    }

    fn get_store(&self, store_id: &StoreId) -> ApiResult<Store> {
        (**self).get_store(store_id)
    }
}
