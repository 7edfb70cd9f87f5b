mod inmemory;

pub use inmemory::InMemoryCategoryRepo;

use collegeprep_domain::{Category, ID};

/// `Category`s are read-only for the mapper services; the write side
/// exists so a store can be seeded.
#[async_trait::async_trait]
pub trait ICategoryRepo: Send + Sync {
    async fn insert(&self, category: &Category) -> anyhow::Result<()>;
    async fn find(&self, category_id: ID) -> Option<Category>;
}
