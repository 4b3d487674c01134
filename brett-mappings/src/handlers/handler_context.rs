use crate::Repo;

pub trait HandlerContext: Send + Sync {
    fn get_repo(&self) -> &dyn Repo;
    fn get_block_timestamp(&self) -> u64;
}
