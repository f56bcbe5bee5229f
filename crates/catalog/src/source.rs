//! Local commerce records handed to the sync layer by the host system.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use storesync_core::{Price, ProductId, VariantId};

/// Image fields of a local record: field name -> resolved absolute image URL.
///
/// Which field holds "the" product image is a site setting.
pub type ImageFields = BTreeMap<String, String>;

/// A product with separately stored variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalProduct {
    pub id: ProductId,
    pub title: String,
    /// Site-relative path of the product page, if it has one.
    pub path: Option<String>,
    pub description: String,
    pub product_type: String,
    pub images: ImageFields,
    /// References to variations, in display order.
    pub variations: Vec<VariantId>,
}

/// A single purchasable variation of a [`LocalProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVariation {
    pub id: VariantId,
    pub sku: String,
    pub price: Option<Price>,
}

/// A legacy-style product: one record doubling as its only variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyProductRecord {
    pub id: u64,
    pub title: String,
    pub path: Option<String>,
    /// Model number, used as the SKU.
    pub model: String,
    pub price: Option<Price>,
    pub body: String,
    pub node_type: String,
    pub images: ImageFields,
}

/// Loads variations referenced by a [`LocalProduct`].
pub trait VariationLoader {
    fn load_variation(&self, id: &VariantId) -> Option<LocalVariation>;
}

impl VariationLoader for HashMap<VariantId, LocalVariation> {
    fn load_variation(&self, id: &VariantId) -> Option<LocalVariation> {
        self.get(id).cloned()
    }
}

impl VariationLoader for BTreeMap<VariantId, LocalVariation> {
    fn load_variation(&self, id: &VariantId) -> Option<LocalVariation> {
        self.get(id).cloned()
    }
}

impl VariationLoader for [LocalVariation] {
    fn load_variation(&self, id: &VariantId) -> Option<LocalVariation> {
        self.iter().find(|v| &v.id == id).cloned()
    }
}

impl VariationLoader for Vec<LocalVariation> {
    fn load_variation(&self, id: &VariantId) -> Option<LocalVariation> {
        self.as_slice().load_variation(id)
    }
}
