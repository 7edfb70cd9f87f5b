use super::IBaseReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use collegeprep_domain::{
    BaseReminder, BaseReminderFields, BaseReminderWithRelations, BaseReminderWithTimeframes,
    Category, Timeframe, ID,
};
use std::sync::Arc;
use tracing::error;

pub struct InMemoryBaseReminderRepo {
    db: Arc<InMemoryDb>,
}

impl InMemoryBaseReminderRepo {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }

    fn category_for(&self, base_reminder: &BaseReminder) -> anyhow::Result<Category> {
        match find(base_reminder.category_id, &self.db.categories) {
            Some(category) => Ok(category),
            None => {
                error!(
                    "Base reminder {} references missing category {}",
                    base_reminder.id, base_reminder.category_id
                );
                anyhow::bail!(
                    "Base reminder {} references missing category {}",
                    base_reminder.id,
                    base_reminder.category_id
                )
            }
        }
    }

    fn timeframes_for(&self, base_reminder_id: ID) -> anyhow::Result<Vec<Timeframe>> {
        let association_rows = find_by(&self.db.base_reminder_timeframes, |row| {
            row.base_reminder_id == base_reminder_id
        });
        let mut timeframes = Vec::with_capacity(association_rows.len());
        for row in association_rows {
            match find(row.timeframe_id, &self.db.timeframes) {
                Some(timeframe) => timeframes.push(timeframe),
                None => {
                    error!(
                        "Base reminder {} is associated with missing timeframe {}",
                        base_reminder_id, row.timeframe_id
                    );
                    anyhow::bail!(
                        "Base reminder {} is associated with missing timeframe {}",
                        base_reminder_id,
                        row.timeframe_id
                    )
                }
            }
        }
        Ok(timeframes)
    }

    fn with_relations(
        &self,
        base_reminder: BaseReminder,
    ) -> anyhow::Result<BaseReminderWithRelations> {
        let category = self.category_for(&base_reminder)?;
        let timeframes = self.timeframes_for(base_reminder.id)?;
        Ok(BaseReminderWithRelations {
            base_reminder,
            category,
            timeframes,
        })
    }
}

#[async_trait::async_trait]
impl IBaseReminderRepo for InMemoryBaseReminderRepo {
    async fn insert(&self, fields: &BaseReminderFields) -> anyhow::Result<BaseReminder> {
        let base_reminder = BaseReminder {
            id: next_id(&self.db.base_reminders),
            name: fields.name.clone(),
            message: fields.message.clone(),
            detail: fields.detail.clone(),
            late_message: fields.late_message.clone(),
            late_detail: fields.late_detail.clone(),
            category_id: fields.category_id,
        };
        insert(&base_reminder, &self.db.base_reminders);
        Ok(base_reminder)
    }

    async fn save(&self, base_reminder: &BaseReminder) -> anyhow::Result<()> {
        save(base_reminder, &self.db.base_reminders);
        Ok(())
    }

    async fn find(&self, base_reminder_id: ID) -> Option<BaseReminder> {
        find(base_reminder_id, &self.db.base_reminders)
    }

    async fn find_with_relations(
        &self,
        base_reminder_id: ID,
    ) -> anyhow::Result<Option<BaseReminderWithRelations>> {
        match find(base_reminder_id, &self.db.base_reminders) {
            Some(base_reminder) => Ok(Some(self.with_relations(base_reminder)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<BaseReminderWithRelations>> {
        let base_reminders = find_all(&self.db.base_reminders);
        let mut joined = Vec::with_capacity(base_reminders.len());
        for base_reminder in base_reminders {
            joined.push(self.with_relations(base_reminder)?);
        }
        Ok(joined)
    }

    async fn find_all_with_timeframes(&self) -> anyhow::Result<Vec<BaseReminderWithTimeframes>> {
        let base_reminders = find_all(&self.db.base_reminders);
        let mut joined = Vec::with_capacity(base_reminders.len());
        for base_reminder in base_reminders {
            let timeframes = self.timeframes_for(base_reminder.id)?;
            joined.push(BaseReminderWithTimeframes {
                base_reminder,
                timeframes,
            });
        }
        Ok(joined)
    }

    async fn delete(&self, base_reminder_id: ID) -> Option<BaseReminder> {
        delete(base_reminder_id, &self.db.base_reminders)
    }

    async fn set_timeframes(
        &self,
        base_reminder_id: ID,
        timeframe_ids: &[ID],
    ) -> anyhow::Result<()> {
        let mut association_rows = self.db.base_reminder_timeframes.lock().unwrap();
        association_rows.retain(|row| row.base_reminder_id != base_reminder_id);
        for timeframe_id in timeframe_ids {
            association_rows.push(BaseReminderTimeframe {
                base_reminder_id,
                timeframe_id: *timeframe_id,
            });
        }
        Ok(())
    }

    async fn get_timeframes(&self, base_reminder_id: ID) -> anyhow::Result<Vec<Timeframe>> {
        self.timeframes_for(base_reminder_id)
    }
}
