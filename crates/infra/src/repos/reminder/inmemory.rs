use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::ReminderQuery;
use collegeprep_domain::{NewReminder, Reminder, ReminderWithRelations};
use std::sync::Arc;
use tracing::error;

pub struct InMemoryReminderRepo {
    db: Arc<InMemoryDb>,
}

impl InMemoryReminderRepo {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }

    fn with_relations(&self, reminder: Reminder) -> anyhow::Result<ReminderWithRelations> {
        let base_reminder = match find(reminder.base_reminder_id, &self.db.base_reminders) {
            Some(base_reminder) => base_reminder,
            None => {
                error!(
                    "Reminder {} references missing base reminder {}",
                    reminder.id, reminder.base_reminder_id
                );
                anyhow::bail!(
                    "Reminder {} references missing base reminder {}",
                    reminder.id,
                    reminder.base_reminder_id
                )
            }
        };
        let category = match find(base_reminder.category_id, &self.db.categories) {
            Some(category) => category,
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
        };
        let school = match find(reminder.school_id, &self.db.schools) {
            Some(school) => school,
            None => {
                error!(
                    "Reminder {} references missing school {}",
                    reminder.id, reminder.school_id
                );
                anyhow::bail!(
                    "Reminder {} references missing school {}",
                    reminder.id,
                    reminder.school_id
                )
            }
        };
        Ok(ReminderWithRelations {
            reminder,
            base_reminder,
            category,
            school,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn find_with_relations(
        &self,
        query: &ReminderQuery,
    ) -> anyhow::Result<Vec<ReminderWithRelations>> {
        let matches = find_by(&self.db.reminders, |reminder| {
            query.id.map_or(true, |id| reminder.id == id)
                && query.user_id.map_or(true, |user_id| reminder.user_id == user_id)
                && query
                    .school_id
                    .map_or(true, |school_id| reminder.school_id == school_id)
                && query
                    .due_date
                    .map_or(true, |due_date| reminder.due_date == due_date)
        });
        let mut joined = Vec::with_capacity(matches.len());
        for reminder in matches {
            joined.push(self.with_relations(reminder)?);
        }
        Ok(joined)
    }

    async fn bulk_insert(&self, reminders: &[NewReminder]) -> anyhow::Result<Vec<Reminder>> {
        let mut created = Vec::with_capacity(reminders.len());
        for new_reminder in reminders {
            let id = match new_reminder.id {
                Some(id) => id,
                None => next_id(&self.db.reminders),
            };
            let reminder = Reminder {
                id,
                user_id: new_reminder.user_id,
                school_id: new_reminder.school_id,
                base_reminder_id: new_reminder.base_reminder_id,
                due_date: new_reminder.due_date,
                timeframe: new_reminder.timeframe.clone(),
            };
            insert(&reminder, &self.db.reminders);
            created.push(reminder);
        }
        Ok(created)
    }
}
