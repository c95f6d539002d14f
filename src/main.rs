mod appsettings;

use std::sync::Arc;

use appsettings::AppSettings;
use napomni_storage::{InMemoryReminderStorage, MongoReminderStorage, ReminderStorage};
use napomni_web::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = AppSettings::new()?;

    pretty_env_logger::formatted_builder()
        .parse_filters(&settings.app.log_filter())
        .init();

    let storage: Arc<dyn ReminderStorage> = if settings.in_memory {
        log::warn!("Using in-memory reminder storage, reminders will not survive a restart");
        Arc::new(InMemoryReminderStorage::new())
    } else {
        log::info!(
            "Using MongoDB at {}:{}, database {}, authenticated: {}",
            settings.database.host,
            settings.database.port,
            settings.database.name,
            settings.database.has_credentials()
        );
        Arc::new(MongoReminderStorage::new(settings.database.clone()))
    };

    let state = AppState::new(storage)?;

    let address = settings.app.address();
    log::info!("Binding to {}", address);
    let listener = TcpListener::bind(&address).await?;
    log::info!("Server running on {}", address);

    napomni_web::serve(listener, state).await?;
    Ok(())
}
