//! MongoDB backed reminder store.
//!
//! Reminders live in a single `reminders` collection of documents shaped as
//! `{ _id: ObjectId, text: string, time: datetime }`. Each [`MongoReminderConnection`]
//! owns its own client; there is no pooling across connections.
pub(crate) mod model;

use async_trait::async_trait;
use model::ReminderDocument;
use mongodb::{
    Client, Collection, Database,
    bson::{doc, oid::ObjectId},
    error::ErrorKind,
    options::ClientOptions,
};
use napomni_models::reminder::{Reminder, ReminderId};

use crate::{DatabaseSettings, NewReminder, ReminderConnection, ReminderStorage, StorageError};

pub const REMINDERS_COLLECTION: &str = "reminders";

const NAMESPACE_EXISTS_CODE: i32 = 48;

pub struct MongoReminderStorage {
    settings: DatabaseSettings,
}

impl MongoReminderStorage {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }
}

#[async_trait]
impl ReminderStorage for MongoReminderStorage {
    async fn connect(&self) -> Result<Box<dyn ReminderConnection>, StorageError> {
        let connection = MongoReminderConnection::open(&self.settings).await?;
        Ok(Box::new(connection))
    }
}

pub struct MongoReminderConnection {
    _client: Client,
    database: Database,
    reminders: Collection<ReminderDocument>,
}

impl MongoReminderConnection {
    /// Opens a client, authenticating when credentials are configured, and makes
    /// sure the reminders collection exists.
    pub async fn open(settings: &DatabaseSettings) -> Result<Self, StorageError> {
        let options = client_options(settings).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&settings.name);

        // Round trip to the server; connection and authentication errors show up here.
        let collections = database.list_collection_names().await?;
        if !collections.iter().any(|name| name == REMINDERS_COLLECTION) {
            log::info!(
                "Creating collection {} in database {}",
                REMINDERS_COLLECTION,
                settings.name
            );
            if let Err(error) = database.create_collection(REMINDERS_COLLECTION).await {
                if !is_namespace_exists(&error) {
                    return Err(error.into());
                }
            }
        }

        let reminders = database.collection::<ReminderDocument>(REMINDERS_COLLECTION);
        log::debug!("Opened connection to {}:{}", settings.host, settings.port);

        Ok(Self {
            _client: client,
            database,
            reminders,
        })
    }

    /// Drops the whole database behind this connection.
    pub async fn drop_database(&self) -> Result<(), StorageError> {
        self.database.drop().await?;
        Ok(())
    }

    async fn fetch_all(&self) -> mongodb::error::Result<Vec<Reminder>> {
        let mut cursor = self.reminders.find(doc! {}).await?;
        let mut reminders = Vec::new();
        while cursor.advance().await? {
            let document = cursor.deserialize_current()?;
            reminders.push(document.into());
        }

        Ok(reminders)
    }
}

impl Drop for MongoReminderConnection {
    fn drop(&mut self) {
        log::debug!("Releasing connection to database {}", self.database.name());
    }
}

#[async_trait]
impl ReminderConnection for MongoReminderConnection {
    async fn save(&self, reminder: NewReminder) {
        let document = ReminderDocument::from(reminder);
        if let Err(error) = self.reminders.insert_one(document).await {
            log::error!("Error saving reminder: {}", error);
        }
    }

    async fn get_all(&self) -> Option<Vec<Reminder>> {
        match self.fetch_all().await {
            Ok(reminders) => Some(reminders),
            Err(error) => {
                log::error!("Error fetching reminders: {}", error);
                None
            }
        }
    }

    async fn get_by_id(&self, id: &ReminderId) -> Option<Reminder> {
        let object_id = parse_object_id(id)?;
        match self.reminders.find_one(doc! { "_id": object_id }).await {
            Ok(document) => document.map(Into::into),
            Err(error) => {
                log::error!("Error fetching reminder by _id {}: {}", id, error);
                None
            }
        }
    }

    async fn delete_by_id(&self, id: &ReminderId) {
        let Some(object_id) = parse_object_id(id) else {
            return;
        };
        if let Err(error) = self.reminders.delete_one(doc! { "_id": object_id }).await {
            log::error!("Error deleting reminder {}: {}", id, error);
        }
    }

    async fn get_id_by_text(&self, text: &str) -> Option<ReminderId> {
        match self.reminders.find_one(doc! { "text": text }).await {
            Ok(document) => document.map(|document| ReminderId::new(document.id.to_hex())),
            Err(error) => {
                log::error!("Error getting reminder by text: {}", error);
                None
            }
        }
    }
}

/// Driver options for `settings`, with the credential attached separately so
/// that usernames and passwords need no URL encoding.
pub async fn client_options(
    settings: &DatabaseSettings,
) -> mongodb::error::Result<ClientOptions> {
    let mut options = ClientOptions::parse(settings.connection_uri()).await?;
    options.credential = settings.credential();
    Ok(options)
}

pub(crate) fn parse_object_id(id: &ReminderId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str())
        .map_err(|error| log::warn!("Malformed reminder id {:?}: {}", id.as_str(), error))
        .ok()
}

pub(crate) fn is_namespace_exists(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Command(command_error) if command_error.code == NAMESPACE_EXISTS_CODE
    )
}
