//! Test Helpers

use crate::{
    domain::{
        carts::{data::NewCartItem, records::CartItemUuid},
        products::{ProductsService, data::NewProduct, records::ProductUuid},
    },
    test::TestContext,
};

pub(crate) fn new_product(uuid: ProductUuid, price: u64, stock: u32) -> NewProduct {
    NewProduct {
        uuid,
        name: format!("Product {uuid}"),
        price,
        stock,
        thumbnail: None,
        brand: None,
        category: None,
    }
}

pub(crate) fn new_cart_item(product: ProductUuid, quantity: i64, option: &str) -> NewCartItem {
    NewCartItem {
        uuid: CartItemUuid::new(),
        product_uuid: product,
        quantity,
        selected_option: option.to_string(),
    }
}

/// Create a catalog entry and return its UUID.
pub(crate) async fn create_product(ctx: &TestContext, price: u64, stock: u32) -> ProductUuid {
    let uuid = ProductUuid::new();

    ctx.products
        .create_product(new_product(uuid, price, stock))
        .await
        .expect("Failed to create test product");

    uuid
}
