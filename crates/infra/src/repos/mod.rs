mod base_reminder;
mod category;
mod reminder;
mod school;
mod shared;
mod timeframe;

use shared::inmemory_repo::InMemoryDb;
use std::sync::Arc;

pub use base_reminder::{IBaseReminderRepo, InMemoryBaseReminderRepo};
pub use category::{ICategoryRepo, InMemoryCategoryRepo};
pub use reminder::{IReminderRepo, InMemoryReminderRepo};
pub use school::{ISchoolRepo, InMemorySchoolRepo};
pub use shared::query_structs::ReminderQuery;
pub use timeframe::{ITimeframeRepo, InMemoryTimeframeRepo};

#[derive(Clone)]
pub struct Repos {
    pub base_reminder_repo: Arc<dyn IBaseReminderRepo>,
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub timeframe_repo: Arc<dyn ITimeframeRepo>,
    pub category_repo: Arc<dyn ICategoryRepo>,
    pub school_repo: Arc<dyn ISchoolRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        let db = Arc::new(InMemoryDb::new());
        Self {
            base_reminder_repo: Arc::new(InMemoryBaseReminderRepo::new(db.clone())),
            reminder_repo: Arc::new(InMemoryReminderRepo::new(db.clone())),
            timeframe_repo: Arc::new(InMemoryTimeframeRepo::new(db.clone())),
            category_repo: Arc::new(InMemoryCategoryRepo::new(db.clone())),
            school_repo: Arc::new(InMemorySchoolRepo::new(db)),
        }
    }
}
