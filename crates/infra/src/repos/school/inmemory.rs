use super::ISchoolRepo;
use crate::repos::shared::inmemory_repo::*;
use collegeprep_domain::{School, ID};
use std::sync::Arc;

pub struct InMemorySchoolRepo {
    db: Arc<InMemoryDb>,
}

impl InMemorySchoolRepo {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ISchoolRepo for InMemorySchoolRepo {
    async fn insert(&self, school: &School) -> anyhow::Result<()> {
        insert(school, &self.db.schools);
        Ok(())
    }

    async fn find(&self, school_id: ID) -> Option<School> {
        find(school_id, &self.db.schools)
    }
}
