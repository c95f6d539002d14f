use mongodb::bson::{self, oid::ObjectId};
use napomni_models::{
    chrono::{DateTime, NaiveDateTime},
    reminder::{Reminder, ReminderId, ReminderTime},
};
use serde::{Deserialize, Serialize};

use crate::NewReminder;

#[derive(Serialize, Deserialize)]
pub struct ReminderDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub time: bson::DateTime,
}

impl From<NewReminder> for ReminderDocument {
    fn from(value: NewReminder) -> Self {
        let millis = value.time.into_datetime().and_utc().timestamp_millis();
        Self {
            id: ObjectId::new(),
            text: value.text,
            time: bson::DateTime::from_millis(millis),
        }
    }
}

impl From<ReminderDocument> for Reminder {
    fn from(value: ReminderDocument) -> Self {
        Self {
            id: ReminderId::new(value.id.to_hex()),
            text: value.text,
            time: ReminderTime::new(naive_from_bson(value.time)),
        }
    }
}

fn naive_from_bson(time: bson::DateTime) -> NaiveDateTime {
    DateTime::from_timestamp_millis(time.timestamp_millis())
        .map(|datetime| datetime.naive_utc())
        .unwrap_or_else(|| {
            log::warn!("Reminder time {} is out of range, defaulting to epoch", time);
            NaiveDateTime::default()
        })
}
