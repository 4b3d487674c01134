use derive_more::Display;
use std::fmt::Debug;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotConnected,
    #[display("malformed {entity_type} entity {id}: {reason}")]
    Malformed {
        entity_type: String,
        id: String,
        reason: String,
    },
    Unknown(String),
}

impl std::error::Error for RepoError {}

/// Keyed entity store the handlers read from and write to.
///
/// Entities are addressed by `(entity_type, id)` and stored as JSON values.
/// `save` is an upsert: writing an existing key overwrites it.
#[async_trait::async_trait]
pub trait Repo: Send + Sync + Debug {
    async fn load(
        &self,
        entity_type: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, RepoError>;

    async fn save(
        &self,
        entity_type: &str,
        id: &str,
        value: serde_json::Value,
    ) -> Result<(), RepoError>;

    /// Returns every entity of `entity_type`, ordered by id.
    async fn list(&self, entity_type: &str) -> Result<Vec<serde_json::Value>, RepoError>;
}
