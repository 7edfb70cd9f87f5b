use super::dtos::ReminderDTO;
use chrono::NaiveDate;
use collegeprep_domain::{NewReminder, ID};
use collegeprep_infra::{IReminderRepo, ReminderQuery};
use std::sync::Arc;
use tracing::debug;

/// Read access to `Reminder` instances as flat records. Every finder is
/// the same join-and-flatten over a different filter; the result order
/// is whatever the store returns for the filtered join.
pub struct ReminderService {
    reminder_repo: Arc<dyn IReminderRepo>,
}

impl ReminderService {
    pub fn new(reminder_repo: Arc<dyn IReminderRepo>) -> Self {
        Self { reminder_repo }
    }

    async fn find_with_base_reminders(
        &self,
        query: ReminderQuery,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        let reminders = self.reminder_repo.find_with_relations(&query).await?;
        Ok(reminders.into_iter().map(ReminderDTO::new).collect())
    }

    pub async fn find_by_date_with_base_reminders(
        &self,
        due_date: NaiveDate,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        self.find_with_base_reminders(ReminderQuery {
            due_date: Some(due_date),
            ..Default::default()
        })
        .await
    }

    pub async fn find_by_date_for_user_with_base_reminders(
        &self,
        due_date: NaiveDate,
        user_id: ID,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        self.find_with_base_reminders(ReminderQuery {
            due_date: Some(due_date),
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    pub async fn find_by_user_with_base_reminders(
        &self,
        user_id: ID,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        self.find_with_base_reminders(ReminderQuery {
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    pub async fn find_by_user_for_school_with_base_reminders(
        &self,
        user_id: ID,
        school_id: ID,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        self.find_with_base_reminders(ReminderQuery {
            user_id: Some(user_id),
            school_id: Some(school_id),
            ..Default::default()
        })
        .await
    }

    /// Resolves with a vec of zero or one records; still a vec for
    /// uniformity with the other finders.
    pub async fn find_by_id_for_user_with_base_reminders(
        &self,
        id: ID,
        user_id: ID,
    ) -> anyhow::Result<Vec<ReminderDTO>> {
        self.find_with_base_reminders(ReminderQuery {
            id: Some(id),
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    /// Inserts every record in one batch and resolves with the count of
    /// inserted rows, not the rows themselves.
    pub async fn bulk_create(&self, reminders: &[NewReminder]) -> anyhow::Result<usize> {
        let created = self.reminder_repo.bulk_insert(reminders).await?;
        debug!("bulk inserted {} reminders", created.len());
        Ok(created.len())
    }
}
