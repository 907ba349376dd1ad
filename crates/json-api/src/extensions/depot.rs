//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::domain::users::records::UserUuid;

const USER_UUID_DEPOT_KEY: &str = "user_uuid";

/// Helpers for depot extraction and the resolved request identity.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The identity resolved for this request, if any.
    fn user_uuid(&self) -> Option<UserUuid>;

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_DEPOT_KEY, user);
    }

    fn user_uuid(&self) -> Option<UserUuid> {
        self.get::<UserUuid>(USER_UUID_DEPOT_KEY).ok().copied()
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.user_uuid()
            .ok_or_else(|| StatusError::unauthorized().brief("Sign in to manage your cart"))
    }
}
