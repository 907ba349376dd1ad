//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::errors::into_status_error, extensions::*, observability::record_cart_operation,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = 204, description = "Line item removed"),
        (status_code = 401, description = "Not signed in"),
        (status_code = 403, description = "Line item belongs to another user"),
        (status_code = 404, description = "Line item not found"),
    )
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .carts
        .remove_item(user, item.into_inner().into())
        .await
        .map_err(|error| into_status_error("remove", error))?;

    record_cart_operation("remove", "ok");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService, records::CartItemUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, carts_service, guest_carts_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("cart/items/{item}").delete(handler)
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let item_uuid = CartItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |user, uuid| *user == TEST_USER_UUID && *uuid == item_uuid)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/cart/items/{item_uuid}"))
            .send(&carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/cart/items/{}", Uuid::now_v7()))
            .send(&carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_foreign_item_returns_403() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Forbidden));

        let res = TestClient::delete(format!("http://example.com/cart/items/{}", Uuid::now_v7()))
            .send(&carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_identity_returns_401() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_item().never();

        let res = TestClient::delete(format!("http://example.com/cart/items/{}", Uuid::now_v7()))
            .send(&guest_carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
