use super::ICategoryRepo;
use crate::repos::shared::inmemory_repo::*;
use collegeprep_domain::{Category, ID};
use std::sync::Arc;

pub struct InMemoryCategoryRepo {
    db: Arc<InMemoryDb>,
}

impl InMemoryCategoryRepo {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ICategoryRepo for InMemoryCategoryRepo {
    async fn insert(&self, category: &Category) -> anyhow::Result<()> {
        insert(category, &self.db.categories);
        Ok(())
    }

    async fn find(&self, category_id: ID) -> Option<Category> {
        find(category_id, &self.db.categories)
    }
}
