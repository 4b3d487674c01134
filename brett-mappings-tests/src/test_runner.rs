use brett_mappings::brett_token::{
    get_or_create_analytics, get_or_create_settings, Holder, TokenAnalytics,
};
use brett_mappings::logger::{self, LevelFilter};
use brett_mappings::states::Entity;
use brett_mappings::{
    handle_events, Config, Event, HandlerContext, InMemoryRepo, Mappings, MappingsError, Repo,
    RepoError,
};

use crate::factory::brett_contract;

pub fn new_config() -> Config<InMemoryRepo> {
    logger::setup_logger(LevelFilter::WARN);

    Config::new(InMemoryRepo::new()).add_contract(brett_contract())
}

pub fn new_mappings() -> Mappings<InMemoryRepo> {
    new_config().build().unwrap()
}

pub async fn run_events(events: &[Event]) -> Result<Mappings<InMemoryRepo>, MappingsError> {
    let mappings = new_mappings();
    handle_events(&mappings, events).await?;

    Ok(mappings)
}

/// Read-only view over a repo, for asserting on stored entities.
pub struct RepoReader<'a> {
    repo: &'a dyn Repo,
}

impl<'a> RepoReader<'a> {
    pub fn new(repo: &'a dyn Repo) -> Self {
        Self { repo }
    }

    pub async fn holder(&self, address: &ethers::types::Address) -> Option<Holder> {
        Holder::load(&brett_mappings::brett_token::address_key(address), self).await.unwrap()
    }

    pub async fn holders(&self) -> Vec<Holder> {
        Holder::read_all(self).await.unwrap()
    }

    pub async fn stored_analytics(&self) -> Option<TokenAnalytics> {
        TokenAnalytics::load(brett_mappings::brett_token::ANALYTICS_ID, self).await.unwrap()
    }

    pub async fn analytics(&self) -> TokenAnalytics {
        get_or_create_analytics(self).await.unwrap()
    }

    pub async fn settings(&self) -> brett_mappings::brett_token::GlobalSettings {
        get_or_create_settings(self).await.unwrap()
    }

    pub async fn load<T: Entity>(&self, id: &str) -> Option<T> {
        T::load(id, self).await.unwrap()
    }
}

impl<'a> HandlerContext for RepoReader<'a> {
    fn get_repo(&self) -> &dyn Repo {
        self.repo
    }

    fn get_block_timestamp(&self) -> u64 {
        0
    }
}

/// Serves reads from an inner repo and fails every write.
#[derive(Clone, Debug, Default)]
pub struct ReadOnlyRepo {
    inner: InMemoryRepo,
}

#[async_trait::async_trait]
impl Repo for ReadOnlyRepo {
    async fn load(
        &self,
        entity_type: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        self.inner.load(entity_type, id).await
    }

    async fn save(
        &self,
        _entity_type: &str,
        _id: &str,
        _value: serde_json::Value,
    ) -> Result<(), RepoError> {
        Err(RepoError::NotConnected)
    }

    async fn list(&self, entity_type: &str) -> Result<Vec<serde_json::Value>, RepoError> {
        self.inner.list(entity_type).await
    }
}
