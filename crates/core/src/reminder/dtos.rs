use chrono::NaiveDate;
use collegeprep_domain::{ReminderWithRelations, ID};
use serde::{Deserialize, Serialize};

/// One flat record per `Reminder` instance: the instance's own columns
/// plus the denormalized fields of its `BaseReminder` (and that
/// template's `Category`) and its `School`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub due_date: NaiveDate,
    pub timeframe: String,
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category: String,
    pub base_reminder_id: ID,
    pub school_name: String,
    pub school_id: ID,
    pub school_due_date: NaiveDate,
    pub user_id: ID,
}

impl ReminderDTO {
    pub fn new(joined: ReminderWithRelations) -> Self {
        let ReminderWithRelations {
            reminder,
            base_reminder,
            category,
            school,
        } = joined;
        Self {
            id: reminder.id,
            due_date: reminder.due_date,
            timeframe: reminder.timeframe,
            name: base_reminder.name,
            message: base_reminder.message,
            detail: base_reminder.detail,
            late_message: base_reminder.late_message,
            late_detail: base_reminder.late_detail,
            category: category.name,
            base_reminder_id: base_reminder.id,
            school_name: school.name,
            school_id: school.id,
            school_due_date: school.due_date,
            user_id: reminder.user_id,
        }
    }
}
