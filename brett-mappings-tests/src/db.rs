use dotenvy::dotenv;
use std::env;

use brett_mappings::PostgresRepo;

/// Postgres-backed tests only run when `TEST_DATABASE_URL` is set.
pub fn database_url() -> Option<String> {
    dotenv().ok();

    env::var("TEST_DATABASE_URL").ok()
}

pub async fn connect() -> Option<PostgresRepo> {
    let url = database_url()?;

    let repo = PostgresRepo::connect(&url)
        .await
        .unwrap_or_else(|error| panic!("Error connecting to {url}: {error}"));

    Some(repo)
}
