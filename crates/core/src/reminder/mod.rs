mod dtos;
mod service;

pub use dtos::ReminderDTO;
pub use service::ReminderService;
