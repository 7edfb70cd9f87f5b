mod base_reminder;
mod category;
mod reminder;
mod school;
mod shared;
mod timeframe;

pub use base_reminder::{
    BaseReminder, BaseReminderFields, BaseReminderWithRelations, BaseReminderWithTimeframes,
};
pub use category::Category;
pub use reminder::{NewReminder, Reminder, ReminderWithRelations};
pub use school::School;
pub use shared::entity::{Entity, ID};
pub use timeframe::{InvalidTimeframeTypeError, Timeframe, TimeframeType};
