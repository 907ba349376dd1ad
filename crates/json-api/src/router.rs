//! App Router

use salvo::Router;

use crate::{auth, carts, healthcheck, observability::metrics_handler, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("cart")
                .hoop(auth::middleware::handler)
                .get(carts::get::handler)
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{item}")
                                .patch(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::StatusCode,
        prelude::Service,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{
            MockCartsService,
            data::{AddedItem, GuestCartItem},
        },
        products::records::ProductUuid,
    };

    use crate::test_helpers::state_with_carts;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_carts(carts)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_anonymous_add_is_routed_as_guest() -> TestResult {
        let product_uuid = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|user, _| user.is_none())
            .return_once(move |_, item| {
                Ok(AddedItem::Guest(GuestCartItem {
                    product_uuid,
                    selected_option: item.selected_option,
                    quantity: 1,
                }))
            });

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_uuid": product_uuid.into_uuid() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::ACCEPTED));

        let body: Value = res.take_json().await?;

        assert_eq!(body["mode"], "guest");

        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_cart_read_returns_401() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_is_public() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
