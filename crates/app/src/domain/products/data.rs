//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub thumbnail: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
}
