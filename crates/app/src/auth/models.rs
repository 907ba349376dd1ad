//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    auth::{SessionTokenHash, SessionTokenVersion},
    domain::users::records::UserUuid,
};

/// Session data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveSession {
    /// User the session belongs to.
    pub user_uuid: UserUuid,

    /// SHA-256 verifier for the token secret material.
    pub token_hash: Vec<u8>,
}

/// Session metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct SessionMetadata {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: SessionTokenVersion,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New session persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: SessionTokenVersion,
    pub token_hash: SessionTokenHash,
    pub expires_at: Option<Timestamp>,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSessionToken {
    pub token: String,
    pub metadata: SessionMetadata,
}
