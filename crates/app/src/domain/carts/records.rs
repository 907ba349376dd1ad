//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub selected_option: String,

    /// Always at least one while the row exists.
    pub quantity: u32,

    pub added_at: Timestamp,
    pub updated_at: Timestamp,
}
