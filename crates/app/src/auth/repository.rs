//! Auth repository.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        SessionTokenVersion,
        models::{ActiveSession, NewSession, SessionMetadata},
    },
    domain::users::records::UserUuid,
};

const FIND_ACTIVE_SESSION_BY_UUID_SQL: &str = include_str!("sql/find_active_session_by_uuid.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const REVOKE_SESSION_SQL: &str = include_str!("sql/revoke_session.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unrevoked, unexpired session with the given UUID and version.
    pub(crate) async fn find_active_session_by_uuid(
        &self,
        session_uuid: Uuid,
        version: SessionTokenVersion,
    ) -> Result<Option<ActiveSession>, sqlx::Error> {
        query_as::<Postgres, ActiveSession>(FIND_ACTIVE_SESSION_BY_UUID_SQL)
            .bind(session_uuid)
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_session(
        &self,
        session: &NewSession,
    ) -> Result<SessionMetadata, sqlx::Error> {
        query_as::<Postgres, SessionMetadata>(CREATE_SESSION_SQL)
            .bind(session.uuid)
            .bind(session.user_uuid.into_uuid())
            .bind(session.version.as_i16())
            .bind(session.token_hash.as_slice())
            .bind(session.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    /// Mark a session revoked. Returns `None` when it was unknown or already
    /// revoked.
    pub(crate) async fn revoke_session(
        &self,
        session_uuid: Uuid,
    ) -> Result<Option<SessionMetadata>, sqlx::Error> {
        query_as::<Postgres, SessionMetadata>(REVOKE_SESSION_SQL)
            .bind(session_uuid)
            .fetch_optional(&self.pool)
            .await
    }
}

fn try_get_version(row: &PgRow) -> sqlx::Result<SessionTokenVersion> {
    let version: i16 = row.try_get("version")?;

    SessionTokenVersion::try_from(version).map_err(|e| sqlx::Error::ColumnDecode {
        index: "version".to_string(),
        source: Box::new(e),
    })
}

fn try_get_optional_timestamp(row: &PgRow, column: &str) -> sqlx::Result<Option<Timestamp>> {
    Ok(row
        .try_get::<Option<SqlxTimestamp>, _>(column)?
        .map(SqlxTimestamp::to_jiff))
}

impl<'r> FromRow<'r, PgRow> for ActiveSession {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SessionMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version: try_get_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            expires_at: try_get_optional_timestamp(row, "expires_at")?,
            revoked_at: try_get_optional_timestamp(row, "revoked_at")?,
        })
    }
}
