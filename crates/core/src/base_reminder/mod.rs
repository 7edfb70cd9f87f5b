mod dtos;
mod service;

pub use dtos::{
    BaseReminderDTO, BaseReminderInput, BaseReminderWithTimeframesDTO, SavedBaseReminderDTO,
    TimeframeDTO,
};
pub use service::BaseReminderService;
