//! Cart response bodies shared across handlers.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::{
    lines::{CartLine, CatalogEntry},
    records::CartItemRecord,
};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The product this line item refers to
    pub product_uuid: Uuid,

    /// Variant selector; empty when the product has no options
    pub selected_option: String,

    /// Number of units, always at least one
    pub quantity: u32,

    /// The date and time the item was added
    pub added_at: String,

    /// The date and time the quantity last changed
    pub updated_at: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            selected_option: item.selected_option,
            quantity: item.quantity,
            added_at: item.added_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Catalog details for a cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatalogEntryResponse {
    pub name: String,

    /// Price in pence/cents
    pub price: u64,

    pub stock: u32,
    pub thumbnail: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,

    /// `false` when the product no longer exists and placeholder details are shown
    pub available: bool,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            price: entry.price,
            stock: entry.stock,
            thumbnail: entry.thumbnail,
            brand: entry.brand,
            category: entry.category,
            available: entry.available,
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    pub item: CartItemResponse,
    pub product: CatalogEntryResponse,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            item: line.item.into(),
            product: line.product.into(),
        }
    }
}
