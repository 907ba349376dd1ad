//! Get Product Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::records::ProductRecord;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// Units currently in stock
    pub stock: u32,

    pub thumbnail: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// The date and time the product was deleted
    pub deleted_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            thumbnail: product.thumbnail,
            brand: product.brand,
            category: product.category,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product"
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
