use super::dtos::{
    BaseReminderDTO, BaseReminderInput, BaseReminderWithTimeframesDTO, SavedBaseReminderDTO,
};
use collegeprep_domain::ID;
use collegeprep_infra::IBaseReminderRepo;
use std::sync::Arc;
use tracing::debug;

/// Read and write access to `BaseReminder` templates as flat records.
/// Joined `Category`/`Timeframes` rows never leak to callers: reads
/// collapse them into derived fields, writes rewire the association set.
pub struct BaseReminderService {
    base_reminder_repo: Arc<dyn IBaseReminderRepo>,
}

impl BaseReminderService {
    pub fn new(base_reminder_repo: Arc<dyn IBaseReminderRepo>) -> Self {
        Self { base_reminder_repo }
    }

    pub async fn find_all(&self) -> anyhow::Result<Vec<BaseReminderDTO>> {
        let base_reminders = self.base_reminder_repo.find_all().await?;
        Ok(base_reminders.into_iter().map(BaseReminderDTO::new).collect())
    }

    pub async fn find_all_including_timeframes(
        &self,
    ) -> anyhow::Result<Vec<BaseReminderWithTimeframesDTO>> {
        let base_reminders = self.base_reminder_repo.find_all_with_timeframes().await?;
        Ok(base_reminders
            .into_iter()
            .map(BaseReminderWithTimeframesDTO::new)
            .collect())
    }

    /// Resolves with a vec of zero or one records, never an error for a
    /// missing id.
    pub async fn find_by_id(&self, base_reminder_id: ID) -> anyhow::Result<Vec<BaseReminderDTO>> {
        let base_reminder = self
            .base_reminder_repo
            .find_with_relations(base_reminder_id)
            .await?;
        Ok(base_reminder.into_iter().map(BaseReminderDTO::new).collect())
    }

    /// Inserts the scalar columns and sets the `Timeframe` association
    /// set to exactly `input.timeframe_ids` (absent means empty).
    ///
    /// The resolved record mirrors the input as given: the id the store
    /// generated is not merged back into it.
    pub async fn create(
        &self,
        input: BaseReminderInput,
    ) -> anyhow::Result<Vec<SavedBaseReminderDTO>> {
        let created = self.base_reminder_repo.insert(&input.fields()).await?;
        let timeframe_ids = input.timeframe_ids.clone().unwrap_or_default();
        self.base_reminder_repo
            .set_timeframes(created.id, &timeframe_ids)
            .await?;
        debug!("created base reminder {}", created.id);
        Ok(vec![SavedBaseReminderDTO::new(&input, timeframe_ids)])
    }

    /// Resolves with `None` when no row matches `base_reminder_id`.
    /// A present, non-empty `timeframe_ids` replaces the association
    /// set; otherwise the existing associations are left untouched and
    /// read back into the echoed record.
    pub async fn update(
        &self,
        base_reminder_id: ID,
        input: BaseReminderInput,
    ) -> anyhow::Result<Option<Vec<SavedBaseReminderDTO>>> {
        let mut base_reminder = match self.base_reminder_repo.find(base_reminder_id).await {
            Some(base_reminder) => base_reminder,
            None => return Ok(None),
        };

        base_reminder.update_fields(&input.fields());
        self.base_reminder_repo.save(&base_reminder).await?;

        let timeframe_ids = match &input.timeframe_ids {
            Some(timeframe_ids) if !timeframe_ids.is_empty() => {
                self.base_reminder_repo
                    .set_timeframes(base_reminder_id, timeframe_ids)
                    .await?;
                timeframe_ids.clone()
            }
            _ => self
                .base_reminder_repo
                .get_timeframes(base_reminder_id)
                .await?
                .into_iter()
                .map(|timeframe| timeframe.id)
                .collect(),
        };
        debug!("updated base reminder {}", base_reminder_id);
        Ok(Some(vec![SavedBaseReminderDTO::new(&input, timeframe_ids)]))
    }

    /// Resolves with `false` when no row matches `base_reminder_id`.
    /// The `Timeframe` associations are cleared before the row goes
    /// away.
    pub async fn destroy(&self, base_reminder_id: ID) -> anyhow::Result<bool> {
        let base_reminder = match self.base_reminder_repo.find(base_reminder_id).await {
            Some(base_reminder) => base_reminder,
            None => return Ok(false),
        };

        self.base_reminder_repo
            .set_timeframes(base_reminder.id, &[])
            .await?;
        let deleted = self.base_reminder_repo.delete(base_reminder.id).await;
        debug!("destroyed base reminder {}", base_reminder.id);
        Ok(deleted.is_some())
    }
}
