mod repos;

pub use repos::{
    IBaseReminderRepo, ICategoryRepo, IReminderRepo, ISchoolRepo, ITimeframeRepo,
    InMemoryBaseReminderRepo, InMemoryCategoryRepo, InMemoryReminderRepo, InMemorySchoolRepo,
    InMemoryTimeframeRepo, ReminderQuery, Repos,
};
