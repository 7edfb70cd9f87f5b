mod inmemory;

pub use inmemory::InMemoryBaseReminderRepo;

use collegeprep_domain::{
    BaseReminder, BaseReminderFields, BaseReminderWithRelations, BaseReminderWithTimeframes,
    Timeframe, ID,
};

#[async_trait::async_trait]
pub trait IBaseReminderRepo: Send + Sync {
    /// Inserts the scalar columns as a new row. The store assigns the id.
    async fn insert(&self, fields: &BaseReminderFields) -> anyhow::Result<BaseReminder>;
    async fn save(&self, base_reminder: &BaseReminder) -> anyhow::Result<()>;
    async fn find(&self, base_reminder_id: ID) -> Option<BaseReminder>;
    async fn find_with_relations(
        &self,
        base_reminder_id: ID,
    ) -> anyhow::Result<Option<BaseReminderWithRelations>>;
    async fn find_all(&self) -> anyhow::Result<Vec<BaseReminderWithRelations>>;
    async fn find_all_with_timeframes(&self) -> anyhow::Result<Vec<BaseReminderWithTimeframes>>;
    async fn delete(&self, base_reminder_id: ID) -> Option<BaseReminder>;
    /// Replaces the `Timeframe` association set with exactly the given
    /// ids, keeping their order.
    async fn set_timeframes(&self, base_reminder_id: ID, timeframe_ids: &[ID])
        -> anyhow::Result<()>;
    async fn get_timeframes(&self, base_reminder_id: ID) -> anyhow::Result<Vec<Timeframe>>;
}
