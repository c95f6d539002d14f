use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use napomni_models::{
    chrono::NaiveDateTime,
    reminder::{ReminderId, ReminderTime},
};
use napomni_storage::NewReminder;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

pub const HOME_PATH: &str = "/reminders/";

const FORM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Deserialize)]
pub struct ReminderForm {
    pub reminder: String,
    pub date: String,
    pub time: String,
}

impl ReminderForm {
    /// Combines the `YYYY-MM-DD` date and `HH:MM` time fields.
    pub fn reminder_time(&self) -> Result<ReminderTime, AppError> {
        let date_str = format!("{} {}", self.date.trim(), self.time.trim());
        NaiveDateTime::parse_from_str(&date_str, FORM_DATETIME_FORMAT)
            .map(ReminderTime::new)
            .map_err(|e| {
                AppError::MalformedPayload(format!("invalid date/time {:?}: {}", date_str, e))
            })
    }
}

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
}

pub async fn base_page() -> Redirect {
    Redirect::temporary(HOME_PATH)
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let upcoming_reminders = {
        let connection = state.storage.connect().await?;
        connection.get_all().await
    };

    let page = state
        .templates
        .render_home(upcoming_reminders.as_deref())?;
    Ok(Html(page))
}

pub async fn create_reminder(
    State(state): State<AppState>,
    Form(form): Form<ReminderForm>,
) -> Result<Redirect, AppError> {
    let time = form.reminder_time()?;

    let connection = state.storage.connect().await?;
    connection
        .save(NewReminder {
            text: form.reminder,
            time,
        })
        .await;

    Ok(Redirect::to(HOME_PATH))
}

pub async fn remove_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = ReminderId::new(id);

    let connection = state.storage.connect().await?;
    if connection.get_by_id(&id).await.is_none() {
        return Err(AppError::NotFound);
    }
    connection.delete_by_id(&id).await;

    Ok(Redirect::to(HOME_PATH))
}

pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok" })
}
