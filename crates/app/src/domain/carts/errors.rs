//! Carts service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::carts::records::CartItemRecord;

/// Unique index over `(user_uuid, product_uuid, selected_option)`.
pub(crate) const SELECTION_UNIQUE_CONSTRAINT: &str = "cart_items_user_product_option_key";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The user already has a line item for this product and option.
    ///
    /// Carries the existing line item when it could be read back.
    #[error("cart item already exists for this product and option")]
    Duplicate(Option<Box<CartItemRecord>>),

    #[error("cart item already exists")]
    AlreadyExists,

    #[error("cart item not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("cart item belongs to another user")]
    Forbidden,

    #[error("invalid reference")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation
                if database_error.constraint() == Some(SELECTION_UNIQUE_CONSTRAINT) =>
            {
                Self::Duplicate(None)
            }
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl CartsServiceError {
    /// Short, stable label for metrics and logs.
    #[must_use]
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Duplicate(_) | Self::AlreadyExists => "duplicate",
            Self::NotFound | Self::ProductNotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::InvalidReference | Self::MissingRequiredData | Self::InvalidData => "invalid",
            Self::Sql(_) => "error",
        }
    }
}
