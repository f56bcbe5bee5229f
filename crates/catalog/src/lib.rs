//! Catalog records exchanged with the external marketing API.
//!
//! Two families of types live here:
//! - the **remote shape** (`Product`, `Variant`, `Store`, `VariantPage`),
//!   serialized with the external API's field names;
//! - the **local records** the host commerce system hands us, plus the pure
//!   mapping functions between the two (no IO, no remote calls).

pub mod mapping;
pub mod product;
pub mod source;
pub mod store;

pub use mapping::{
    DEFAULT_INVENTORY_QUANTITY, build_product, build_product_from_legacy, build_product_variants,
    build_url, resolve_image_url,
};
pub use product::{Product, Variant, VariantPage};
pub use source::{ImageFields, LegacyProductRecord, LocalProduct, LocalVariation, VariationLoader};
pub use store::{Store, StoreProfile};
