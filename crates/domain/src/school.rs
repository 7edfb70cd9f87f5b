use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A school a user is applying to, with its application deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: ID,
    pub name: String,
    pub due_date: NaiveDate,
}

impl Entity for School {
    fn id(&self) -> ID {
        self.id
    }
}
