use std::sync::Arc;

use async_trait::async_trait;
use napomni_models::reminder::{Reminder, ReminderId};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{NewReminder, ReminderConnection, ReminderStorage, StorageError};

/// Process local store. Ids are uuids, anything that does not parse as one is
/// a malformed id.
#[derive(Default, Clone)]
pub struct InMemoryReminderStorage {
    store: Arc<RwLock<Vec<Reminder>>>,
}

impl InMemoryReminderStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReminderStorage for InMemoryReminderStorage {
    async fn connect(&self) -> Result<Box<dyn ReminderConnection>, StorageError> {
        Ok(Box::new(InMemoryReminderConnection {
            store: self.store.clone(),
        }))
    }
}

struct InMemoryReminderConnection {
    store: Arc<RwLock<Vec<Reminder>>>,
}

fn is_well_formed(id: &ReminderId) -> bool {
    match Uuid::parse_str(id.as_str()) {
        Ok(_) => true,
        Err(error) => {
            log::warn!("Malformed reminder id {:?}: {}", id.as_str(), error);
            false
        }
    }
}

#[async_trait]
impl ReminderConnection for InMemoryReminderConnection {
    async fn save(&self, reminder: NewReminder) {
        let mut store = self.store.write().await;
        let id = ReminderId::new(Uuid::new_v4().to_string());
        log::debug!("Saving reminder {}", id);
        store.push(Reminder {
            id,
            text: reminder.text,
            time: reminder.time,
        });
    }

    async fn get_all(&self) -> Option<Vec<Reminder>> {
        let store = self.store.read().await;
        Some(store.clone())
    }

    async fn get_by_id(&self, id: &ReminderId) -> Option<Reminder> {
        if !is_well_formed(id) {
            return None;
        }
        let store = self.store.read().await;
        store.iter().find(|reminder| &reminder.id == id).cloned()
    }

    async fn delete_by_id(&self, id: &ReminderId) {
        if !is_well_formed(id) {
            return;
        }
        let mut store = self.store.write().await;
        store.retain(|reminder| &reminder.id != id);
    }

    async fn get_id_by_text(&self, text: &str) -> Option<ReminderId> {
        let store = self.store.read().await;
        store
            .iter()
            .find(|reminder| reminder.text == text)
            .map(|reminder| reminder.id.clone())
    }
}
