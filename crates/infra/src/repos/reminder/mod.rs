mod inmemory;

pub use inmemory::InMemoryReminderRepo;

use crate::repos::shared::query_structs::ReminderQuery;
use collegeprep_domain::{NewReminder, Reminder, ReminderWithRelations};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Filtered read of `Reminder` rows joined with their `BaseReminder`
    /// (and its `Category`) and `School`. Result order is the store's
    /// row order.
    async fn find_with_relations(
        &self,
        query: &ReminderQuery,
    ) -> anyhow::Result<Vec<ReminderWithRelations>>;
    /// Inserts every row in one batch and returns the created rows.
    /// Counts are derived by the caller.
    async fn bulk_insert(&self, reminders: &[NewReminder]) -> anyhow::Result<Vec<Reminder>>;
}

#[cfg(test)]
mod tests {
    use super::IReminderRepo;
    use crate::repos::shared::query_structs::ReminderQuery;
    use crate::{IBaseReminderRepo, ICategoryRepo, ISchoolRepo, Repos};
    use chrono::NaiveDate;
    use collegeprep_domain::{BaseReminderFields, Category, NewReminder, School};

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 2, 1).unwrap()
    }

    fn new_reminder(id: Option<i32>, user_id: i32, school_id: i32) -> NewReminder {
        NewReminder {
            id,
            user_id,
            school_id,
            base_reminder_id: 1,
            due_date: due_date(),
            timeframe: "One week before".into(),
        }
    }

    async fn seed_relations(repos: &Repos) {
        repos
            .category_repo
            .insert(&Category {
                id: 1,
                name: "Essays".into(),
            })
            .await
            .unwrap();
        repos
            .school_repo
            .insert(&School {
                id: 1,
                name: "Temple".into(),
                due_date: due_date(),
            })
            .await
            .unwrap();
        repos
            .base_reminder_repo
            .insert(&BaseReminderFields {
                name: "Write Essay".into(),
                message: "Better get writing!".into(),
                detail: "Some help for writing your essay".into(),
                late_message: "Too late".into(),
                late_detail: "Should have started sooner".into(),
                category_id: 1,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn bulk_insert_assigns_missing_ids() {
        let repos = Repos::create_inmemory();
        seed_relations(&repos).await;

        let created = repos
            .reminder_repo
            .bulk_insert(&[
                new_reminder(Some(7), 1, 1),
                new_reminder(None, 1, 1),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].id, 7);
        assert_eq!(created[1].id, 8);
    }

    #[tokio::test]
    async fn find_with_relations_filters_and_joins() {
        let repos = Repos::create_inmemory();
        seed_relations(&repos).await;

        repos
            .reminder_repo
            .bulk_insert(&[
                new_reminder(Some(1), 1, 1),
                new_reminder(Some(2), 2, 1),
            ])
            .await
            .unwrap();

        let for_user = repos
            .reminder_repo
            .find_with_relations(&ReminderQuery {
                user_id: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(for_user.len(), 1);
        assert_eq!(for_user[0].reminder.id, 1);
        assert_eq!(for_user[0].base_reminder.name, "Write Essay");
        assert_eq!(for_user[0].category.name, "Essays");
        assert_eq!(for_user[0].school.name, "Temple");

        let for_date = repos
            .reminder_repo
            .find_with_relations(&ReminderQuery {
                due_date: Some(due_date()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(for_date.len(), 2);

        let none = repos
            .reminder_repo
            .find_with_relations(&ReminderQuery {
                user_id: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
