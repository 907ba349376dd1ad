//! Storefront database settings.

use clap::Args;

/// Connection settings for the storefront `PostgreSQL` database.
///
/// Migrations are not applied by the server; run `storefront-app db migrate`
/// against the same URL first.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Upper bound on pooled connections shared by the catalog, cart, and
    /// session services
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,
}
