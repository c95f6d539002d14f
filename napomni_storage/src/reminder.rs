use async_trait::async_trait;

use napomni_models::reminder::{Reminder, ReminderId, ReminderTime};

use crate::StorageError;

pub struct NewReminder {
    pub text: String,
    pub time: ReminderTime,
}

/// Entry point to the reminder store.
///
/// Every unit of work opens its own connection with [`ReminderStorage::connect`].
/// The returned handle owns the underlying client and releases it when dropped,
/// so the connection is closed on every exit path of the caller, early returns
/// and unwinding included.
#[async_trait]
pub trait ReminderStorage: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn ReminderConnection>, StorageError>;
}

/// Operations over the reminder collection through an open connection.
///
/// None of these fail: data-access errors are logged and turned into the
/// absence marker (`None`, or nothing for operations without a result).
/// A malformed id is treated the same way as an unknown one.
#[async_trait]
pub trait ReminderConnection: Send + Sync {
    /// Inserts a new reminder. The store assigns its id, which is not returned.
    async fn save(&self, reminder: NewReminder);
    /// All reminders in the store's natural order, or `None` if the query failed.
    async fn get_all(&self) -> Option<Vec<Reminder>>;
    async fn get_by_id(&self, id: &ReminderId) -> Option<Reminder>;
    /// Removes the reminder if it exists. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: &ReminderId);
    /// Id of the first reminder whose text matches exactly.
    async fn get_id_by_text(&self, text: &str) -> Option<ReminderId>;
}
