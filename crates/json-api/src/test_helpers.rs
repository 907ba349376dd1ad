//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        users::records::UserUuid,
    },
};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();

    carts
}

fn state(
    products: MockProductsService,
    carts: MockCartsService,
    auth: MockAuthService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_products_mock(), strict_carts_mock(), auth)
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    state(strict_products_mock(), carts, strict_auth_mock())
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_carts_mock(), strict_auth_mock())))
            .push(route),
    )
}

/// Cart routes as seen by the signed-in [`TEST_USER_UUID`].
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}

/// Cart routes for a request that carried no identity.
pub(crate) fn guest_carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Linen Shirt".to_string(),
        price: 4_500,
        stock: 12,
        thumbnail: Some("https://cdn.example.test/linen-shirt.jpg".to_string()),
        brand: Some("Harbour".to_string()),
        category: Some("Shirts".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart_item(uuid: CartItemUuid, product_uuid: ProductUuid) -> CartItemRecord {
    CartItemRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        product_uuid,
        selected_option: "M".to_string(),
        quantity: 2,
        added_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
