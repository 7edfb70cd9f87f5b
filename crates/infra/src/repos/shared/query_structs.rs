use chrono::NaiveDate;
use collegeprep_domain::ID;
use serde::{Deserialize, Serialize};

/// Filter for `Reminder` instance queries. Fields set to `None` do not
/// constrain the result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderQuery {
    pub id: Option<ID>,
    pub user_id: Option<ID>,
    pub school_id: Option<ID>,
    pub due_date: Option<NaiveDate>,
}
