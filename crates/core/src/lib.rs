mod base_reminder;
mod reminder;

pub use base_reminder::{
    BaseReminderDTO, BaseReminderInput, BaseReminderService, BaseReminderWithTimeframesDTO,
    SavedBaseReminderDTO, TimeframeDTO,
};
pub use reminder::{ReminderDTO, ReminderService};
