use collegeprep_domain::{
    BaseReminder, Category, Entity, Reminder, School, Timeframe, ID,
};
use std::sync::Mutex;

/// Useful functions for the inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    for i in 0..collection.len() {
        if collection[i].id() == val.id() {
            collection.splice(i..i + 1, vec![val.clone()]);
        }
    }
}

pub fn find<T: Clone + Entity>(val_id: ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    for item in collection.iter() {
        if item.id() == val_id {
            return Some(item.clone());
        }
    }
    None
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection.clone()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T: Clone + Entity>(val_id: ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    for i in 0..collection.len() {
        if collection[i].id() == val_id {
            let deleted_val = collection.remove(i);
            return Some(deleted_val);
        }
    }
    None
}

pub fn next_id<T: Entity>(collection: &Mutex<Vec<T>>) -> ID {
    let collection = collection.lock().unwrap();
    collection.iter().map(|item| item.id()).max().unwrap_or(0) + 1
}

/// One row of the `BaseReminder` <-> `Timeframe` many-to-many
/// association table.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseReminderTimeframe {
    pub base_reminder_id: ID,
    pub timeframe_id: ID,
}

/// The inmemory tables. One instance is shared by every inmemory
/// repository so joined reads can resolve associations across entities.
pub struct InMemoryDb {
    pub base_reminders: Mutex<Vec<BaseReminder>>,
    pub timeframes: Mutex<Vec<Timeframe>>,
    pub categories: Mutex<Vec<Category>>,
    pub schools: Mutex<Vec<School>>,
    pub reminders: Mutex<Vec<Reminder>>,
    pub base_reminder_timeframes: Mutex<Vec<BaseReminderTimeframe>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self {
            base_reminders: Mutex::new(Vec::new()),
            timeframes: Mutex::new(Vec::new()),
            categories: Mutex::new(Vec::new()),
            schools: Mutex::new(Vec::new()),
            reminders: Mutex::new(Vec::new()),
            base_reminder_timeframes: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryDb {
    fn default() -> Self {
        Self::new()
    }
}
