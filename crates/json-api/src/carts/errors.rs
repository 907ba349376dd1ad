//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::observability::record_cart_operation;

/// Map a failed cart operation to an HTTP error, counting the outcome.
pub(crate) fn into_status_error(operation: &'static str, error: CartsServiceError) -> StatusError {
    record_cart_operation(operation, error.outcome());

    match error {
        CartsServiceError::Duplicate(_) => StatusError::conflict().brief("Cart item already exists"),
        CartsServiceError::AlreadyExists => {
            error!("failed to {operation} cart item: generated id already in use");

            StatusError::internal_server_error()
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::Forbidden => {
            StatusError::forbidden().brief("Cart item belongs to another user")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart item payload")
        }
        CartsServiceError::Sql(source) => {
            error!("failed to {operation} cart item: {source}");

            StatusError::internal_server_error()
        }
    }
}
