mod inmemory;

pub use inmemory::InMemoryTimeframeRepo;

use collegeprep_domain::{Timeframe, ID};

/// `Timeframe`s are read-only for the mapper services; the write side
/// exists so a store can be seeded.
#[async_trait::async_trait]
pub trait ITimeframeRepo: Send + Sync {
    async fn insert(&self, timeframe: &Timeframe) -> anyhow::Result<()>;
    async fn find(&self, timeframe_id: ID) -> Option<Timeframe>;
}
