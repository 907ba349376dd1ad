use clap::Args;
use storefront_app::{
    database,
    domain::users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Email address reported by the identity provider
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.email.trim().is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgUsersService::new(pool);
    let uuid = args.user_uuid.map_or_else(UserUuid::new, UserUuid::from_uuid);

    let user = service
        .create_user(NewUser {
            uuid,
            email: args.email,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);
    println!("user_name: {}", user.name);

    Ok(())
}
