//! Authentication
//!
//! Bearer session tokens resolve to the user that owns a cart.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
