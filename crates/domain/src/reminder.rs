use crate::base_reminder::BaseReminder;
use crate::category::Category;
use crate::school::School;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A concrete occurrence of a `BaseReminder` for one user and one
/// school, with its own due date. The `timeframe` field is the free-text
/// label the instance was scheduled under (e.g. "One week before"), not
/// a reference to a `Timeframe` entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ID,
    pub user_id: ID,
    pub school_id: ID,
    pub base_reminder_id: ID,
    pub due_date: NaiveDate,
    pub timeframe: String,
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}

/// Bulk-insert input row for `Reminder`s. The store assigns an id when
/// `id` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub id: Option<ID>,
    pub user_id: ID,
    pub school_id: ID,
    pub base_reminder_id: ID,
    pub due_date: NaiveDate,
    pub timeframe: String,
}

/// A `Reminder` row joined with its `BaseReminder`, that template's
/// `Category`, and the `School` it is due for. Every instance references
/// exactly one existing template and school; a joined read never carries
/// a missing association.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderWithRelations {
    pub reminder: Reminder,
    pub base_reminder: BaseReminder,
    pub category: Category,
    pub school: School,
}
