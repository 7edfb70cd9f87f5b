use super::ITimeframeRepo;
use crate::repos::shared::inmemory_repo::*;
use collegeprep_domain::{Timeframe, ID};
use std::sync::Arc;

pub struct InMemoryTimeframeRepo {
    db: Arc<InMemoryDb>,
}

impl InMemoryTimeframeRepo {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ITimeframeRepo for InMemoryTimeframeRepo {
    async fn insert(&self, timeframe: &Timeframe) -> anyhow::Result<()> {
        insert(timeframe, &self.db.timeframes);
        Ok(())
    }

    async fn find(&self, timeframe_id: ID) -> Option<Timeframe> {
        find(timeframe_id, &self.db.timeframes)
    }
}
