//! Update Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::QuantityUpdate;

use crate::{
    carts::{errors::into_status_error, responses::CartItemResponse},
    extensions::*,
    observability::record_cart_operation,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the line item
    pub quantity: i64,
}

/// Update Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum UpdateCartItemResponse {
    Updated {
        item: CartItemResponse,

        /// The quantity the client asked for
        requested_quantity: i64,

        /// Set when the stored quantity was reduced to current stock
        clamped: bool,
    },
    Deleted,
}

impl From<QuantityUpdate> for UpdateCartItemResponse {
    fn from(update: QuantityUpdate) -> Self {
        match update {
            QuantityUpdate::Updated {
                item,
                requested,
                clamped,
            } => Self::Updated {
                item: item.into(),
                requested_quantity: requested,
                clamped,
            },
            QuantityUpdate::Deleted => Self::Deleted,
        }
    }
}

/// Update Cart Item Quantity Handler
///
/// Sets a line item's quantity, capped to available stock.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = 200, description = "Quantity updated or line item removed"),
        (status_code = 401, description = "Not signed in"),
        (status_code = 403, description = "Line item belongs to another user"),
        (status_code = 404, description = "Line item not found"),
    )
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<UpdateCartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let update = state
        .app
        .carts
        .update_quantity(user, item.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(|error| into_status_error("update", error))?;

    let outcome = match &update {
        QuantityUpdate::Updated { clamped: true, .. } => "clamped",
        QuantityUpdate::Updated { .. } => "updated",
        QuantityUpdate::Deleted => "deleted",
    };

    record_cart_operation("update", outcome);

    Ok(Json(update.into()))
}
