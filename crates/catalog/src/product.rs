use serde::{Deserialize, Serialize};

use storesync_core::{Price, ProductId, VariantId};

use crate::mapping::DEFAULT_INVENTORY_QUANTITY;

/// A product as the external API represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub product_type: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// The remote side refuses products without at least one variant.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

/// One purchasable option of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: Price,
    #[serde(rename = "inventory_quantity", default = "default_stock")]
    pub stock: i64,
}

fn default_stock() -> i64 {
    DEFAULT_INVENTORY_QUANTITY
}

impl Variant {
    /// Whether this payload describes a variant the remote actually holds.
    ///
    /// The remote answers lookups of unknown variants with a blank record
    /// rather than an error; a blank SKU is the reliable tell.
    pub fn exists(&self) -> bool {
        !self.sku.is_empty()
    }
}

/// Answer to "list the variants of a product".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariantPage {
    /// Total variants the product has remotely (may exceed `variants.len()`).
    pub total_items: u64,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl VariantPage {
    pub fn from_variants(variants: Vec<Variant>) -> Self {
        Self {
            total_items: variants.len() as u64,
            variants,
        }
    }
}
