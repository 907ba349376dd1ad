//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::{
    CartsServiceError,
    data::{AddedItem, GuestCartItem, NewCartItem},
    records::CartItemUuid,
};

use crate::{
    carts::{errors::into_status_error, responses::CartItemResponse},
    extensions::*,
    observability::record_cart_operation,
    state::State,
};

const fn default_quantity() -> i64 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// The product to add
    pub product_uuid: Uuid,

    /// Requested units; values below one are raised to one
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Variant selector such as a size or colour
    #[serde(default)]
    pub selected_option: String,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: request.product_uuid.into(),
            quantity: request.quantity,
            selected_option: request.selected_option,
        }
    }
}

/// Guest Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestCartItemResponse {
    pub product_uuid: Uuid,
    pub selected_option: String,
    pub quantity: u32,
}

impl From<GuestCartItem> for GuestCartItemResponse {
    fn from(item: GuestCartItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into(),
            selected_option: item.selected_option,
            quantity: item.quantity,
        }
    }
}

/// Add Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub(crate) enum AddCartItemResponse {
    /// Stored in the signed-in user's cart
    Persisted { item: CartItemResponse },

    /// Nothing stored; the client keeps the item in its guest cart
    Guest { item: GuestCartItemResponse },

    /// The selection is already in the cart
    Duplicate { item: Option<CartItemResponse> },
}

/// Add Cart Item Handler
///
/// Adds a product selection to the cart. Without a signed-in user the item is
/// validated and echoed back for the client's guest cart.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = 201, description = "Line item stored"),
        (status_code = 202, description = "Guest mode, nothing stored"),
        (status_code = 404, description = "Product not found"),
        (status_code = 409, description = "Selection already in cart"),
    )
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddCartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid();

    let added = match state
        .app
        .carts
        .add_item(user, json.into_inner().into())
        .await
    {
        Ok(added) => added,
        Err(CartsServiceError::Duplicate(existing)) => {
            record_cart_operation("add", "duplicate");

            res.status_code(StatusCode::CONFLICT);

            return Ok(Json(AddCartItemResponse::Duplicate {
                item: existing.map(|item| (*item).into()),
            }));
        }
        Err(error) => return Err(into_status_error("add", error)),
    };

    match added {
        AddedItem::Persisted(item) => {
            record_cart_operation("add", "persisted");

            res.add_header(LOCATION, format!("/cart/items/{}", item.uuid), true)
                .or_500("failed to set location header")?
                .status_code(StatusCode::CREATED);

            Ok(Json(AddCartItemResponse::Persisted { item: item.into() }))
        }
        AddedItem::Guest(item) => {
            record_cart_operation("add", "guest");

            res.status_code(StatusCode::ACCEPTED);

            Ok(Json(AddCartItemResponse::Guest { item: item.into() }))
        }
    }
}
