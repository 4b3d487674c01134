use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::repo::{Repo, RepoError};

type EntityKey = (String, String);

/// Process-local store, cloned handles share the same entities.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepo {
    entities: Arc<Mutex<BTreeMap<EntityKey, serde_json::Value>>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self, entity_type: &str) -> usize {
        let entities = self.entities.lock().await;

        entities.keys().filter(|(stored_type, _)| stored_type == entity_type).count()
    }
}

#[async_trait::async_trait]
impl Repo for InMemoryRepo {
    async fn load(
        &self,
        entity_type: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        let entities = self.entities.lock().await;

        Ok(entities.get(&(entity_type.to_owned(), id.to_owned())).cloned())
    }

    async fn save(
        &self,
        entity_type: &str,
        id: &str,
        value: serde_json::Value,
    ) -> Result<(), RepoError> {
        let mut entities = self.entities.lock().await;
        entities.insert((entity_type.to_owned(), id.to_owned()), value);

        Ok(())
    }

    async fn list(&self, entity_type: &str) -> Result<Vec<serde_json::Value>, RepoError> {
        let entities = self.entities.lock().await;

        Ok(entities
            .iter()
            .filter(|((stored_type, _), _)| stored_type == entity_type)
            .map(|(_, value)| value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_overwrites_existing_key() {
        let repo = InMemoryRepo::new();

        repo.save("Holder", "0xaa", json!({"balance": "1"})).await.unwrap();
        repo.save("Holder", "0xaa", json!({"balance": "2"})).await.unwrap();

        assert_eq!(repo.count("Holder").await, 1);
        assert_eq!(
            repo.load("Holder", "0xaa").await.unwrap(),
            Some(json!({"balance": "2"}))
        );
    }

    #[tokio::test]
    async fn list_is_scoped_to_entity_type_and_ordered_by_id() {
        let repo = InMemoryRepo::new();

        repo.save("Holder", "0xbb", json!(2)).await.unwrap();
        repo.save("Holder", "0xaa", json!(1)).await.unwrap();
        repo.save("Transfer", "0xcc", json!(3)).await.unwrap();

        assert_eq!(repo.list("Holder").await.unwrap(), vec![json!(1), json!(2)]);
        assert_eq!(repo.load("Approval", "0xaa").await.unwrap(), None);
    }
}
