use clap::Args;
use jiff::Timestamp;
use storefront_app::{auth::PgAuthService, database, domain::users::records::UserUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateSessionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User UUID the session authenticates as
    #[arg(long)]
    user_uuid: Uuid,

    /// Optional session expiration timestamp (RFC 3339)
    #[arg(long)]
    expires_at: Option<String>,
}

pub(crate) async fn run(args: CreateSessionArgs) -> Result<(), String> {
    let expires_at = parse_expires_at(args.expires_at.as_deref())?;

    if let Some(expires_at) = expires_at.as_ref()
        && *expires_at <= Timestamp::now()
    {
        return Err("expires-at must be in the future".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(pool);

    let issued = service
        .issue_session_token(UserUuid::from_uuid(args.user_uuid), expires_at)
        .await
        .map_err(|error| format!("failed to create session: {error}"))?;

    println!("session_uuid: {}", issued.metadata.uuid);
    println!("user_uuid: {}", issued.metadata.user_uuid);
    println!("session_version: {}", issued.metadata.version.as_i16());
    println!("session_created_at: {}", issued.metadata.created_at);
    if let Some(expires_at) = issued.metadata.expires_at {
        println!("session_expires_at: {expires_at}");
    }
    println!("session_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

fn parse_expires_at(raw: Option<&str>) -> Result<Option<Timestamp>, String> {
    raw.map(|value| {
        value
            .parse::<Timestamp>()
            .map_err(|error| format!("invalid expires-at timestamp: {error}"))
    })
    .transpose()
}
