mod inmemory;

pub use inmemory::InMemorySchoolRepo;

use collegeprep_domain::{School, ID};

/// `School`s are read-only for the mapper services; the write side
/// exists so a store can be seeded.
#[async_trait::async_trait]
pub trait ISchoolRepo: Send + Sync {
    async fn insert(&self, school: &School) -> anyhow::Result<()>;
    async fn find(&self, school_id: ID) -> Option<School>;
}
