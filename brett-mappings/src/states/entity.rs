use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::handlers::HandlerContext;
use crate::RepoError;

#[async_trait::async_trait]
pub trait Entity: DeserializeOwned + Serialize + Clone + Debug + Sync + Send + 'static {
    fn entity_type() -> &'static str;

    fn id(&self) -> String;

    async fn load<C: HandlerContext>(id: &str, context: &C) -> Result<Option<Self>, RepoError> {
        let value = context.get_repo().load(Self::entity_type(), id).await?;

        value.map(|value| from_value(id, value)).transpose()
    }

    /// Upserts the entity under its id.
    async fn save<C: HandlerContext>(&self, context: &C) -> Result<(), RepoError> {
        let id = self.id();
        let value = serde_json::to_value(self).map_err(|error| RepoError::Malformed {
            entity_type: Self::entity_type().to_owned(),
            id: id.clone(),
            reason: error.to_string(),
        })?;

        context.get_repo().save(Self::entity_type(), &id, value).await
    }

    /// Loads the entity or, when absent, builds it with `create`. A created
    /// entity is only stored once the caller saves it.
    async fn get_or_create<C, F>(id: &str, context: &C, create: F) -> Result<Self, RepoError>
    where
        C: HandlerContext,
        F: FnOnce(&str) -> Self + Send,
    {
        Ok(Self::load(id, context).await?.unwrap_or_else(|| create(id)))
    }

    async fn read_all<C: HandlerContext>(context: &C) -> Result<Vec<Self>, RepoError> {
        let values = context.get_repo().list(Self::entity_type()).await?;

        values.into_iter().map(|value| from_value("*", value)).collect()
    }
}

fn from_value<T: Entity>(id: &str, value: serde_json::Value) -> Result<T, RepoError> {
    serde_json::from_value(value).map_err(|error| RepoError::Malformed {
        entity_type: T::entity_type().to_owned(),
        id: id.to_owned(),
        reason: error.to_string(),
    })
}
