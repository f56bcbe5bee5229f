//! Pure mapping from local records to the remote representation.

use storesync_core::{Price, ProductId, VariantId};

use crate::product::{Product, Variant};
use crate::source::{ImageFields, LegacyProductRecord, LocalProduct, VariationLoader};

/// Stock reported for every variant; local stock levels are not tracked here.
pub const DEFAULT_INVENTORY_QUANTITY: i64 = 100;

/// Absolute URL for a site-relative path.
///
/// The remote accepts an empty string when no page exists, so a missing or
/// empty path yields `""`.
pub fn build_url(base_url: &str, path: Option<&str>) -> String {
    match path.map(str::trim) {
        None | Some("") => String::new(),
        Some(path) => {
            let base = base_url.trim_end_matches('/');
            if path.starts_with('/') {
                format!("{base}{path}")
            } else {
                format!("{base}/{path}")
            }
        }
    }
}

/// Image URL stored under the configured image field, or `""`.
pub fn resolve_image_url(images: &ImageFields, field_name: Option<&str>) -> String {
    field_name
        .and_then(|field| images.get(field))
        .cloned()
        .unwrap_or_default()
}

/// One remote variant per loadable variation of `product`.
///
/// Title and URL come from the parent product. Variation currency is ignored:
/// the store currency is fixed when the store is created.
pub fn build_product_variants<L>(product: &LocalProduct, loader: &L, base_url: &str) -> Vec<Variant>
where
    L: VariationLoader + ?Sized,
{
    let url = build_url(base_url, product.path.as_deref());

    product
        .variations
        .iter()
        .filter_map(|id| {
            let variation = loader.load_variation(id);
            if variation.is_none() {
                tracing::warn!(product_id = %product.id, variation_id = %id, "skipping unloadable variation");
            }
            variation
        })
        .map(|variation| Variant {
            id: variation.id,
            title: product.title.clone(),
            url: url.clone(),
            image_url: String::new(),
            sku: variation.sku,
            price: variation.price.unwrap_or(Price::ZERO),
            stock: DEFAULT_INVENTORY_QUANTITY,
        })
        .collect()
}

/// Full create/update payload for a product with separately stored variations.
pub fn build_product<L>(
    product: &LocalProduct,
    loader: &L,
    base_url: &str,
    image_field: Option<&str>,
) -> Product
where
    L: VariationLoader + ?Sized,
{
    Product {
        id: product.id.clone(),
        title: product.title.clone(),
        url: build_url(base_url, product.path.as_deref()),
        image_url: resolve_image_url(&product.images, image_field),
        description: product.description.clone(),
        product_type: product.product_type.clone(),
        variants: build_product_variants(product, loader, base_url),
    }
}

/// Full payload for a legacy record, which is its own single variant.
pub fn build_product_from_legacy(
    record: &LegacyProductRecord,
    base_url: &str,
    image_field: Option<&str>,
) -> Product {
    let url = build_url(base_url, record.path.as_deref());
    let image_url = resolve_image_url(&record.images, image_field);

    let variant = Variant {
        id: VariantId::from(record.id),
        title: record.title.clone(),
        url: url.clone(),
        image_url: image_url.clone(),
        sku: record.model.clone(),
        price: record.price.unwrap_or(Price::ZERO),
        stock: DEFAULT_INVENTORY_QUANTITY,
    };

    Product {
        id: ProductId::from(record.id),
        title: record.title.clone(),
        url,
        image_url,
        description: record.body.clone(),
        product_type: record.node_type.clone(),
        variants: vec![variant],
    }
}
