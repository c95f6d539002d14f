mod error;
mod in_memory;
pub mod mongo;
mod reminder;
mod settings;

pub use error::StorageError;
pub use in_memory::InMemoryReminderStorage;
pub use mongo::{MongoReminderConnection, MongoReminderStorage};
pub use reminder::{NewReminder, ReminderConnection, ReminderStorage};
pub use settings::DatabaseSettings;

#[cfg(test)]
mod tests;
