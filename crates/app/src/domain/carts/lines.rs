//! Cart lines: stored items joined with their catalog details.

use rustc_hash::FxHashMap;

use crate::domain::{
    carts::records::CartItemRecord,
    products::records::{ProductRecord, ProductUuid},
};

/// Catalog details shown alongside a cart line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub thumbnail: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,

    /// `false` when the product no longer resolves and the fields above are
    /// placeholders.
    pub available: bool,
}

impl CatalogEntry {
    pub const PLACEHOLDER_NAME: &'static str = "Unknown Product";

    /// Details used for a line item whose product could not be resolved.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: Self::PLACEHOLDER_NAME.to_string(),
            price: 0,
            stock: 0,
            thumbnail: None,
            brand: None,
            category: None,
            available: false,
        }
    }
}

impl From<&ProductRecord> for CatalogEntry {
    fn from(product: &ProductRecord) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            thumbnail: product.thumbnail.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            available: true,
        }
    }
}

/// A single line of a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItemRecord,
    pub product: CatalogEntry,
}

/// Join stored line items with catalog details, keeping item order.
///
/// Items whose product is missing from `products` get placeholder details
/// rather than being dropped.
pub(crate) fn enrich(
    items: Vec<CartItemRecord>,
    products: &FxHashMap<ProductUuid, ProductRecord>,
) -> Vec<CartLine> {
    items
        .into_iter()
        .map(|item| {
            let product = products
                .get(&item.product_uuid)
                .map_or_else(CatalogEntry::placeholder, CatalogEntry::from);

            CartLine { item, product }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{carts::records::CartItemUuid, users::records::UserUuid};

    use super::*;

    fn item(product: ProductUuid, selected_option: &str) -> CartItemRecord {
        let now = Timestamp::now();

        CartItemRecord {
            uuid: CartItemUuid::new(),
            user_uuid: UserUuid::new(),
            product_uuid: product,
            selected_option: selected_option.to_string(),
            quantity: 1,
            added_at: now,
            updated_at: now,
        }
    }

    fn product(uuid: ProductUuid, name: &str, price: u64, stock: u32) -> ProductRecord {
        let now = Timestamp::now();

        ProductRecord {
            uuid,
            name: name.to_string(),
            price,
            stock,
            thumbnail: Some(format!("https://cdn.example.test/{name}.png")),
            brand: Some("Acme".to_string()),
            category: Some("tools".to_string()),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn enrich_copies_catalog_details_for_resolved_products() {
        let uuid = ProductUuid::new();
        let products = FxHashMap::from_iter([(uuid, product(uuid, "hammer", 1299, 8))]);

        let lines = enrich(vec![item(uuid, "")], &products);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.name, "hammer");
        assert_eq!(lines[0].product.price, 1299);
        assert_eq!(lines[0].product.stock, 8);
        assert_eq!(lines[0].product.brand.as_deref(), Some("Acme"));
        assert!(lines[0].product.available);
    }

    #[test]
    fn enrich_uses_placeholder_for_missing_products() {
        let lines = enrich(vec![item(ProductUuid::new(), "red")], &FxHashMap::default());

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product, CatalogEntry::placeholder());
        assert_eq!(lines[0].product.name, "Unknown Product");
        assert_eq!(lines[0].product.price, 0);
        assert_eq!(lines[0].product.stock, 0);
        assert!(!lines[0].product.available);
    }

    #[test]
    fn enrich_keeps_item_order_and_shares_products_across_options() {
        let known = ProductUuid::new();
        let products = FxHashMap::from_iter([(known, product(known, "shirt", 2000, 3))]);

        let items = vec![
            item(known, "small"),
            item(ProductUuid::new(), ""),
            item(known, "large"),
        ];
        let expected: Vec<CartItemUuid> = items.iter().map(|item| item.uuid).collect();

        let lines = enrich(items, &products);

        let actual: Vec<CartItemUuid> = lines.iter().map(|line| line.item.uuid).collect();
        assert_eq!(actual, expected);

        assert_eq!(lines[0].product.name, "shirt");
        assert_eq!(lines[1].product.name, CatalogEntry::PLACEHOLDER_NAME);
        assert_eq!(lines[2].product.name, "shirt");
        assert_eq!(lines[2].item.selected_option, "large");
    }

    #[test]
    fn enrich_of_empty_cart_is_empty() {
        assert!(enrich(Vec::new(), &FxHashMap::default()).is_empty());
    }
}
