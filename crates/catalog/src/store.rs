use serde::{Deserialize, Serialize};

use storesync_core::StoreId;

/// The merchant's store as registered with the external API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub currency_code: String,
    #[serde(default)]
    pub platform: String,
}

/// Merchant-editable store settings, before an id and platform are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub currency_code: String,
}

impl StoreProfile {
    pub fn new(name: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Attach identity and platform tag, producing the remote representation.
    pub fn into_store(self, id: StoreId, platform: impl Into<String>) -> Store {
        Store {
            id,
            name: self.name,
            currency_code: self.currency_code,
            platform: platform.into(),
        }
    }
}
