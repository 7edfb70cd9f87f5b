use collegeprep_domain::{
    BaseReminderFields, BaseReminderWithRelations, BaseReminderWithTimeframes, Timeframe,
    TimeframeType, ID,
};
use serde::{Deserialize, Serialize};

/// The flat client-facing shape of a `BaseReminder` joined with its
/// `Category` and `Timeframes`: associations are collapsed into
/// `timeframeIds`, `timeframes` (names) and `categoryName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReminderDTO {
    pub id: ID,
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category_id: ID,
    pub timeframe_ids: Vec<ID>,
    pub timeframes: Vec<String>,
    pub category_name: String,
}

impl BaseReminderDTO {
    pub fn new(joined: BaseReminderWithRelations) -> Self {
        let BaseReminderWithRelations {
            base_reminder,
            category,
            timeframes,
        } = joined;
        Self {
            id: base_reminder.id,
            name: base_reminder.name,
            message: base_reminder.message,
            detail: base_reminder.detail,
            late_message: base_reminder.late_message,
            late_detail: base_reminder.late_detail,
            category_id: base_reminder.category_id,
            timeframe_ids: timeframes.iter().map(|t| t.id).collect(),
            timeframes: timeframes.into_iter().map(|t| t.name).collect(),
            category_name: category.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeDTO {
    pub id: ID,
    pub name: String,
    #[serde(rename = "type")]
    pub timeframe_type: TimeframeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl TimeframeDTO {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            id: timeframe.id,
            name: timeframe.name,
            timeframe_type: timeframe.timeframe_type,
            formula: timeframe.formula,
        }
    }
}

/// The projection used by `find_all_including_timeframes`: `Timeframes`
/// stay nested as full objects and no category is joined at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReminderWithTimeframesDTO {
    pub id: ID,
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub timeframes: Vec<TimeframeDTO>,
    pub category_id: ID,
}

impl BaseReminderWithTimeframesDTO {
    pub fn new(joined: BaseReminderWithTimeframes) -> Self {
        let BaseReminderWithTimeframes {
            base_reminder,
            timeframes,
        } = joined;
        Self {
            id: base_reminder.id,
            name: base_reminder.name,
            message: base_reminder.message,
            detail: base_reminder.detail,
            late_message: base_reminder.late_message,
            late_detail: base_reminder.late_detail,
            timeframes: timeframes.into_iter().map(TimeframeDTO::new).collect(),
            category_id: base_reminder.category_id,
        }
    }
}

/// Write-path input for `BaseReminder`s. All scalar columns are
/// required; `timeframeIds` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseReminderInput {
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category_id: ID,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe_ids: Option<Vec<ID>>,
}

impl BaseReminderInput {
    pub fn fields(&self) -> BaseReminderFields {
        BaseReminderFields {
            name: self.name.clone(),
            message: self.message.clone(),
            detail: self.detail.clone(),
            late_message: self.late_message.clone(),
            late_detail: self.late_detail.clone(),
            category_id: self.category_id,
        }
    }
}

/// The write-path echo: mirrors the caller's input plus the
/// authoritative timeframe ids. Carries no id on purpose, see
/// `BaseReminderService::create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBaseReminderDTO {
    pub name: String,
    pub message: String,
    pub detail: String,
    pub late_message: String,
    pub late_detail: String,
    pub category_id: ID,
    pub timeframe_ids: Vec<ID>,
}

impl SavedBaseReminderDTO {
    pub fn new(input: &BaseReminderInput, timeframe_ids: Vec<ID>) -> Self {
        Self {
            name: input.name.clone(),
            message: input.message.clone(),
            detail: input.detail.clone(),
            late_message: input.late_message.clone(),
            late_detail: input.late_detail.clone(),
            category_id: input.category_id,
            timeframe_ids,
        }
    }
}
