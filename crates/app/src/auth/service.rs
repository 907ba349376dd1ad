//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::{
        AuthServiceError, IssuedSessionToken, SessionTokenVersion,
        format_session_token, generate_session_token_secret,
        models::NewSession,
        parse_session_token,
        repository::PgAuthRepository,
        session_token_hash, session_token_hash_matches,
    },
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new session token for the given user.
    ///
    /// The raw token is only ever returned here; storage keeps its verifier.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UnknownUser`] when the user does not exist,
    /// or a storage error if the insert fails.
    pub async fn issue_session_token(
        &self,
        user_uuid: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedSessionToken, AuthServiceError> {
        let session_uuid = Uuid::now_v7();
        let version = SessionTokenVersion::V1;
        let secret = generate_session_token_secret();
        let token = format_session_token(session_uuid, version, &secret);
        let token_hash = session_token_hash(&session_uuid, version, &user_uuid, &secret);

        let metadata = self
            .repository
            .create_session(&NewSession {
                uuid: session_uuid,
                user_uuid,
                version,
                token_hash,
                expires_at,
            })
            .await?;

        info!(session_uuid = %metadata.uuid, user_uuid = %user_uuid, "issued session token");

        Ok(IssuedSessionToken { token, metadata })
    }

    /// Revoke a session by UUID. Returns `true` if the session was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_session_token(&self, session_uuid: Uuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_session(session_uuid).await?;

        Ok(revoked.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let parsed = parse_session_token(bearer_token)?;

        let session = self
            .repository
            .find_active_session_by_uuid(parsed.session_uuid, parsed.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let expected = session_token_hash(
            &parsed.session_uuid,
            parsed.version,
            &session.user_uuid,
            &parsed.secret,
        );

        if !session_token_hash_matches(&expected, &session.token_hash) {
            return Err(AuthServiceError::NotFound);
        }

        Ok(session.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user it was issued for.
    ///
    /// Malformed tokens fail with [`AuthServiceError::Token`]; well-formed
    /// tokens that match no active session fail with
    /// [`AuthServiceError::NotFound`].
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{Span, Timestamp};
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_as_its_user() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user().await;

        let issued = ctx.auth.issue_session_token(user, None).await?;

        assert!(issued.token.starts_with("sf_v1_"));
        assert_eq!(issued.metadata.user_uuid, user);
        assert!(issued.metadata.revoked_at.is_none());

        let resolved = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(resolved, user);

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_reports_malformed_tokens_without_querying() -> TestResult {
        // Lazy pool: a malformed token must be rejected before any connection is made.
        let pool = PgPool::connect_lazy("postgres://unused@127.0.0.1:1/unused")?;
        let auth = PgAuthService::new(pool);

        let unsupported_version = format!("sf_v9_{}.{}", Uuid::nil().simple(), "ab".repeat(32));
        let bad_secret = format!("sf_v1_{}.zz", Uuid::nil().simple());

        for token in ["not-a-token", unsupported_version.as_str(), bad_secret.as_str()] {
            let result = auth.authenticate_bearer(token).await;

            assert!(
                matches!(result, Err(AuthServiceError::Token(_))),
                "expected Token error for {token:?}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_session() -> TestResult {
        let ctx = TestContext::new().await;

        let token = format_session_token(
            Uuid::now_v7(),
            SessionTokenVersion::V1,
            &generate_session_token_secret(),
        );

        let result = ctx.auth.authenticate_bearer(&token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_tampered_secret() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user().await;

        let issued = ctx.auth.issue_session_token(user, None).await?;

        let (id, _secret) = issued.token.split_once('.').ok_or("token has no secret")?;
        let tampered = format!("{id}.{}", "0".repeat(64));

        let result = ctx.auth.authenticate_bearer(&tampered).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_revoked_session() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user().await;

        let issued = ctx.auth.issue_session_token(user, None).await?;

        assert!(ctx.auth.revoke_session_token(issued.metadata.uuid).await?);
        assert!(!ctx.auth.revoke_session_token(issued.metadata.uuid).await?);

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_expired_session() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user().await;

        let expired_at = Timestamp::now().checked_sub(Span::new().minutes(5))?;
        let issued = ctx.auth.issue_session_token(user, Some(expired_at)).await?;

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn issue_for_unknown_user_returns_unknown_user() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.issue_session_token(UserUuid::new(), None).await;

        assert!(
            matches!(result, Err(AuthServiceError::UnknownUser)),
            "expected UnknownUser, got {result:?}"
        );
    }
}
