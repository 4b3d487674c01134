mod migrations;

use std::sync::Arc;

use tokio_postgres::{Client, NoTls};

use super::repo::{Repo, RepoError};
use migrations::SQLikeMigrations;

/// Entities are kept in a single JSONB table keyed by `(entity_type, id)`.
#[derive(Clone)]
pub struct PostgresRepo {
    client: Arc<Client>,
}

impl std::fmt::Debug for PostgresRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresRepo").finish_non_exhaustive()
    }
}

impl PostgresRepo {
    /// Connects and runs the entity table migrations, which are idempotent.
    pub async fn connect(url: &str) -> Result<Self, RepoError> {
        let (client, conn) = tokio_postgres::connect(url, NoTls).await.map_err(to_repo_error)?;

        tokio::spawn(async move {
            if let Err(error) = conn.await {
                tracing::error!(%error, "postgres connection closed");
            }
        });

        let repo = Self {
            client: Arc::new(client),
        };
        repo.migrate().await?;

        Ok(repo)
    }

    async fn migrate(&self) -> Result<(), RepoError> {
        for migration in SQLikeMigrations::create_entities() {
            self.client.batch_execute(migration).await.map_err(to_repo_error)?;
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl Repo for PostgresRepo {
    async fn load(
        &self,
        entity_type: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        let row = self
            .client
            .query_opt(
                "SELECT data FROM brett_entities WHERE entity_type = $1 AND id = $2",
                &[&entity_type, &id],
            )
            .await
            .map_err(to_repo_error)?;

        Ok(row.map(|row| row.get::<_, serde_json::Value>(0)))
    }

    async fn save(
        &self,
        entity_type: &str,
        id: &str,
        value: serde_json::Value,
    ) -> Result<(), RepoError> {
        let written = self
            .client
            .execute(
                "INSERT INTO brett_entities (entity_type, id, data) VALUES ($1, $2, $3)
                ON CONFLICT (entity_type, id) DO UPDATE SET data = EXCLUDED.data",
                &[&entity_type, &id, &value],
            )
            .await
            .map_err(to_repo_error)?;

        if written == 1 {
            Ok(())
        } else {
            Err(RepoError::Unknown(format!(
                "upsert of {entity_type} {id} wrote {written} rows"
            )))
        }
    }

    async fn list(&self, entity_type: &str) -> Result<Vec<serde_json::Value>, RepoError> {
        let rows = self
            .client
            .query(
                "SELECT data FROM brett_entities WHERE entity_type = $1 ORDER BY id",
                &[&entity_type],
            )
            .await
            .map_err(to_repo_error)?;

        Ok(rows.iter().map(|row| row.get::<_, serde_json::Value>(0)).collect())
    }
}

fn to_repo_error(error: tokio_postgres::Error) -> RepoError {
    if error.is_closed() {
        RepoError::NotConnected
    } else {
        RepoError::Unknown(error.to_string())
    }
}
