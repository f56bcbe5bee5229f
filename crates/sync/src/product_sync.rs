//! Product and variant synchronization.

use std::sync::Arc;

use storesync_catalog::{
    LegacyProductRecord, LocalProduct, Product, Variant, VariationLoader, build_product,
    build_product_from_legacy,
};
use storesync_core::{ProductId, StoreId, VariantId};

use crate::client::{ApiError, ApiResult, EcommerceClient};
use crate::error::SyncError;
use crate::ports::ConfigProvider;
use crate::report::Reporter;

/// Shown when an update targets a product the remote has never seen.
pub const MISSING_PRODUCT_NOTICE: &str =
    "This product doesn't exist in the remote store. Please sync all your products.";

/// A product addressed either by id or by its local record.
#[derive(Debug, Clone, Copy)]
pub enum ProductRef<'a> {
    Id(&'a ProductId),
    Entity(&'a LocalProduct),
}

impl<'a> ProductRef<'a> {
    pub fn resolve(&self) -> &'a ProductId {
        match *self {
            ProductRef::Id(id) => id,
            ProductRef::Entity(product) => &product.id,
        }
    }
}

impl<'a> From<&'a ProductId> for ProductRef<'a> {
    fn from(id: &'a ProductId) -> Self {
        ProductRef::Id(id)
    }
}

impl<'a> From<&'a LocalProduct> for ProductRef<'a> {
    fn from(product: &'a LocalProduct) -> Self {
        ProductRef::Entity(product)
    }
}

/// How an update ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// The remote has no such product; the merchant was told to run a full sync.
    MissingRemote,
}

/// Terminal state of [`ProductSynchronizer::delete_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantDeletion {
    /// Other variants remain; only the target was removed.
    VariantDeleted,
    /// The target was the last variant, so the whole product was removed.
    ProductDeleted,
    /// The product was already gone remotely; nothing was deleted.
    AlreadyAbsent,
}

/// Pushes product and variant changes to the remote store.
///
/// Every operation needs a configured store id. Failures are logged and shown
/// to the merchant before being returned.
pub struct ProductSynchronizer<C> {
    client: C,
    config: Arc<dyn ConfigProvider>,
    reporter: Reporter,
}

impl<C> ProductSynchronizer<C>
where
    C: EcommerceClient,
{
    pub fn new(client: C, config: Arc<dyn ConfigProvider>, reporter: Reporter) -> Self {
        Self {
            client,
            config,
            reporter,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create `product`, including all of its variants.
    ///
    /// A product the remote already holds is reported like any other failure;
    /// callers wanting an upsert follow up with [`Self::update_product`].
    pub fn create_product(&self, product: &Product) -> Result<(), SyncError> {
        let result = self.store_id("add a product").and_then(|store_id| {
            if !product.has_variants() {
                return Err(SyncError::NoVariants {
                    product_id: product.id.clone(),
                });
            }
            tracing::debug!(%store_id, product_id = %product.id, variants = product.variants.len(), "adding product");
            self.client.add_product(&store_id, product).map_err(SyncError::from)
        });
        self.reporter.check("Unable to add product", result)
    }

    /// Replace the remote copy of `target` with `product`.
    pub fn update_product(&self, target: ProductRef<'_>, product: &Product) -> Result<UpdateOutcome, SyncError> {
        let product_id = target.resolve();
        let result = self.store_id("update a product").and_then(|store_id| {
            tracing::debug!(%store_id, %product_id, "updating product");
            self.client
                .update_product(&store_id, product_id, product)
                .map_err(SyncError::from)
        });

        match result {
            Ok(()) => Ok(UpdateOutcome::Updated),
            Err(SyncError::NotFound(_)) => {
                tracing::info!(%product_id, "product missing remotely; full sync required");
                self.reporter.info(MISSING_PRODUCT_NOTICE);
                Ok(UpdateOutcome::MissingRemote)
            }
            Err(err) => Err(self.reporter.failure("Unable to update product", err)),
        }
    }

    pub fn delete_product(&self, product_id: &ProductId) -> Result<(), SyncError> {
        let result = self.store_id("delete a product").and_then(|store_id| {
            tracing::debug!(%store_id, %product_id, "deleting product");
            self.client
                .delete_product(&store_id, product_id)
                .map_err(SyncError::from)
        });
        self.reporter.check("Unable to delete product", result)
    }

    pub fn add_variant(&self, product_id: &ProductId, variant: &Variant) -> Result<(), SyncError> {
        let result = self.store_id("add a product variant").and_then(|store_id| {
            tracing::debug!(%store_id, %product_id, variant_id = %variant.id, "adding variant");
            self.client
                .add_product_variant(&store_id, product_id, variant)
                .map_err(SyncError::from)
        });
        self.reporter.check("Unable to add product variant", result)
    }

    /// Remote copy of a variant, or `None` if the remote does not hold it.
    ///
    /// Failures are reported and also yield `None`.
    pub fn get_variant(&self, product_id: &ProductId, variant_id: &VariantId) -> Option<Variant> {
        let result = self.store_id("get a product variant").and_then(|store_id| {
            self.client
                .get_product_variant(&store_id, product_id, variant_id)
                .map_err(SyncError::from)
        });

        match self.reporter.check("Unable to get product variant", result) {
            Ok(variant) if variant.exists() => Some(variant),
            Ok(_) => {
                tracing::debug!(%product_id, %variant_id, "remote returned a blank variant");
                None
            }
            Err(_) => None,
        }
    }

    /// Remove a variant without ever leaving a zero-variant product behind.
    ///
    /// The last remaining variant takes the whole product with it. A product
    /// the remote no longer knows counts as already deleted.
    pub fn delete_variant(&self, product_id: &ProductId, variant_id: &VariantId) -> Result<VariantDeletion, SyncError> {
        let result = self.store_id("delete a product variant").and_then(|store_id| {
            match self.reconcile_variant_deletion(&store_id, product_id, variant_id) {
                Err(ApiError::NotFound(_)) => {
                    tracing::debug!(%product_id, %variant_id, "product not in remote store; nothing to delete");
                    Ok(VariantDeletion::AlreadyAbsent)
                }
                other => other.map_err(SyncError::from),
            }
        });
        self.reporter.check("Unable to delete product variant", result)
    }

    fn reconcile_variant_deletion(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> ApiResult<VariantDeletion> {
        let page = self.client.get_product_variants(store_id, product_id)?;

        if page.total_items > 1 {
            tracing::info!(%product_id, %variant_id, remaining = page.total_items, "deleting variant");
            self.client.delete_product_variant(store_id, product_id, variant_id)?;
            Ok(VariantDeletion::VariantDeleted)
        } else {
            tracing::info!(%product_id, %variant_id, "last variant; deleting product");
            self.client.delete_product(store_id, product_id)?;
            Ok(VariantDeletion::ProductDeleted)
        }
    }

    /// Remote payload for a local product, using the site's URL and image settings.
    pub fn build_product<L>(&self, product: &LocalProduct, loader: &L) -> Product
    where
        L: VariationLoader + ?Sized,
    {
        let image_field = self.config.product_image_field();
        build_product(product, loader, &self.config.site_base_url(), image_field.as_deref())
    }

    /// Remote payload for a legacy single-variant record.
    pub fn build_legacy_product(&self, record: &LegacyProductRecord) -> Product {
        let image_field = self.config.product_image_field();
        build_product_from_legacy(record, &self.config.site_base_url(), image_field.as_deref())
    }

    fn store_id(&self, action: &'static str) -> Result<StoreId, SyncError> {
        self.config.store_id().ok_or(SyncError::MissingStoreId { action })
    }
}
