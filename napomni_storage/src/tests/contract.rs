//! Behaviour every reminder store has to show, shared by the in-memory and
//! MongoDB test suites.
use napomni_models::{
    chrono::{NaiveDate, NaiveDateTime, NaiveTime},
    reminder::{ReminderId, ReminderTime},
};

use crate::{NewReminder, ReminderStorage};

pub fn time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ReminderTime {
    ReminderTime::new(NaiveDateTime::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
    ))
}

pub fn new_reminder(text: &str, time: ReminderTime) -> NewReminder {
    NewReminder {
        text: text.to_string(),
        time,
    }
}

pub async fn saved_reminder_is_listed(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();
    let reminder_time = time(2024, 1, 1, 9, 0);

    connection
        .save(new_reminder("Test reminder", reminder_time))
        .await;
    let reminders = connection.get_all().await.unwrap();

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].text, "Test reminder");
    assert_eq!(reminders[0].time, reminder_time);
}

pub async fn get_by_id_finds_saved_reminder_until_deleted(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();
    let reminder_time = time(2024, 3, 15, 18, 30);
    connection
        .save(new_reminder("Call mom", reminder_time))
        .await;
    let id = connection.get_all().await.unwrap()[0].id.clone();

    let found = connection.get_by_id(&id).await.unwrap();
    assert_eq!(found.text, "Call mom");
    assert_eq!(found.time, reminder_time);

    connection.delete_by_id(&id).await;

    assert!(connection.get_by_id(&id).await.is_none());
}

pub async fn deleting_unknown_id_changes_nothing(storage: &dyn ReminderStorage, unknown: ReminderId) {
    let connection = storage.connect().await.unwrap();
    connection
        .save(new_reminder("Water plants", time(2023, 6, 1, 7, 0)))
        .await;
    let before = connection.get_all().await.unwrap();

    connection.delete_by_id(&unknown).await;
    connection
        .delete_by_id(&ReminderId::new("not-a-valid-id-format"))
        .await;

    assert_eq!(connection.get_all().await.unwrap(), before);
}

pub async fn id_by_text_points_at_matching_reminder(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();
    connection
        .save(new_reminder("Pay rent", time(2024, 2, 1, 10, 0)))
        .await;
    connection
        .save(new_reminder("Renew passport", time(2024, 5, 20, 12, 0)))
        .await;

    let id = connection.get_id_by_text("Renew passport").await.unwrap();
    let reminder = connection.get_by_id(&id).await.unwrap();

    assert_eq!(reminder.text, "Renew passport");
    assert!(connection.get_id_by_text("Renew").await.is_none());
    assert!(connection.get_id_by_text("Feed the cat").await.is_none());
}

pub async fn get_all_is_stable_without_writes(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();
    connection
        .save(new_reminder("First", time(2024, 1, 1, 8, 0)))
        .await;
    connection
        .save(new_reminder("Second", time(2020, 1, 1, 8, 0)))
        .await;

    let first = connection.get_all().await.unwrap();
    let second = connection.get_all().await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

pub async fn buy_milk_scenario(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();
    connection
        .save(new_reminder("Buy milk", time(2024, 1, 1, 9, 0)))
        .await;

    let reminders = connection.get_all().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].text, "Buy milk");

    connection.delete_by_id(&reminders[0].id).await;

    assert!(connection.get_all().await.unwrap().is_empty());
}

pub async fn malformed_id_is_absent(storage: &dyn ReminderStorage) {
    let connection = storage.connect().await.unwrap();

    let reminder = connection
        .get_by_id(&ReminderId::new("not-a-valid-id-format"))
        .await;

    assert!(reminder.is_none());
}

pub async fn writes_are_visible_to_new_connections(storage: &dyn ReminderStorage) {
    {
        let connection = storage.connect().await.unwrap();
        connection
            .save(new_reminder("Dentist", time(2025, 9, 9, 15, 45)))
            .await;
    }

    let connection = storage.connect().await.unwrap();
    let id = connection.get_id_by_text("Dentist").await.unwrap();
    assert_eq!(
        connection.get_by_id(&id).await.unwrap().time,
        time(2025, 9, 9, 15, 45)
    );
}
