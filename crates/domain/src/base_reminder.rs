use crate::category::Category;
use crate::shared::entity::{Entity, ID};
use crate::timeframe::Timeframe;
use serde::{Deserialize, Serialize};

/// A reusable reminder template: the text shown to a user before and
/// after a deadline, not tied to any specific user or school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReminder {
    pub id: ID,
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category_id: ID,
}

impl BaseReminder {
    pub fn update_fields(&mut self, fields: &BaseReminderFields) {
        self.name = fields.name.clone();
        self.message = fields.message.clone();
        self.detail = fields.detail.clone();
        self.late_message = fields.late_message.clone();
        self.late_detail = fields.late_detail.clone();
        self.category_id = fields.category_id;
    }
}

impl Entity for BaseReminder {
    fn id(&self) -> ID {
        self.id
    }
}

/// The insertable scalar columns of a `BaseReminder`. The store assigns
/// the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReminderFields {
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category_id: ID,
}

/// A `BaseReminder` row joined with its `Category` and `Timeframes`.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseReminderWithRelations {
    pub base_reminder: BaseReminder,
    pub category: Category,
    pub timeframes: Vec<Timeframe>,
}

/// A `BaseReminder` row joined with its `Timeframes` only.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseReminderWithTimeframes {
    pub base_reminder: BaseReminder,
    pub timeframes: Vec<Timeframe>,
}
