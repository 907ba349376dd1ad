//! Carts
//!
//! A cart is the set of line items owned by one user. A line item is keyed by
//! `(user, product, selected option)`; the storage layer enforces that key with
//! a unique index, so concurrent adds of the same selection resolve to exactly
//! one persisted row.

pub mod data;
pub mod errors;
pub mod lines;
pub(crate) mod quantity;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
