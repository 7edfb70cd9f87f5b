use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A grouping label for `BaseReminder`s, e.g. "Essays" or
/// "Recommendations". Read-only from the data-access layer's
/// perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: ID,
    pub name: String,
}

impl Entity for Category {
    fn id(&self) -> ID {
        self.id
    }
}
