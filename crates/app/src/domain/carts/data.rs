//! Cart Data

use crate::domain::{
    carts::records::{CartItemRecord, CartItemUuid},
    products::records::ProductUuid,
};

/// New Cart Item Data
///
/// `quantity` is the raw requested value; non-positive requests are floored to
/// one when the item is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: i64,
    pub selected_option: String,
}

/// A selection the caller must keep in client-held state because no identity
/// was resolved for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestCartItem {
    pub product_uuid: ProductUuid,
    pub selected_option: String,
    pub quantity: u32,
}

/// Result of adding an item to a cart.
#[derive(Debug, Clone)]
pub enum AddedItem {
    /// A new line item was stored for the user.
    Persisted(CartItemRecord),

    /// Nothing was stored; the selection belongs in the guest cart.
    Guest(GuestCartItem),
}

/// Result of changing a line item's quantity.
#[derive(Debug, Clone)]
pub enum QuantityUpdate {
    /// The quantity was stored. `clamped` is set when `requested` exceeded
    /// current stock and `item.quantity` was reduced to it.
    Updated {
        item: CartItemRecord,
        requested: i64,
        clamped: bool,
    },

    /// A non-positive quantity was requested and the line item was removed.
    Deleted,
}
