//! Identity middleware.
//!
//! Resolves `Authorization: Bearer …` to a user and records it in the depot.
//! Requests without a usable token continue as guests; handlers that need an
//! identity reject them with 401.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use storefront_app::auth::AuthServiceError;
use tracing::{debug, error};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        ctrl.call_next(req, depot, res).await;

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user_uuid) => depot.insert_user_uuid(user_uuid),
        Err(AuthServiceError::NotFound | AuthServiceError::UnknownUser) => {
            debug!("bearer token did not resolve; continuing as guest");
        }
        Err(AuthServiceError::Token(source)) => {
            debug!("bearer token could not be processed: {source}");
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate session token: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
