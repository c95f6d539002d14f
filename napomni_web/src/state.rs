use std::sync::Arc;

use napomni_storage::ReminderStorage;

use crate::templates::Templates;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ReminderStorage>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ReminderStorage>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            storage,
            templates: Arc::new(Templates::new()?),
        })
    }
}
