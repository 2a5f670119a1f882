//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod tenant;

use secrecy::SecretString;

/// Resolve the database URL from `BREADBOX_DATABASE_URL`, falling back to
/// the generic `DATABASE_URL`.
pub fn database_url() -> Result<SecretString, String> {
    dotenvy::dotenv().ok();

    std::env::var("BREADBOX_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "BREADBOX_DATABASE_URL not set".to_owned())
}
