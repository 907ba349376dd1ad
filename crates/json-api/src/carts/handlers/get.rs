//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, responses::CartLineResponse},
    extensions::*,
    observability::record_cart_operation,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Line items, oldest first
    pub items: Vec<CartLineResponse>,
}

/// Get Cart Handler
///
/// Returns the signed-in user's cart with product details for each line item.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let lines = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(|error| into_status_error("get", error))?;

    record_cart_operation("get", "ok");

    Ok(Json(CartResponse {
        items: lines.into_iter().map(Into::into).collect(),
    }))
}
