//! HTTP front of the reminder store.
//!
//! Every handler opens its own store connection and lets it go when it returns;
//! nothing about reminders is kept between requests.
use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};

pub mod error;
pub mod routes;
pub mod state;
pub mod templates;

use routes::{base_page, create_reminder, healthcheck, home, remove_reminder};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(base_page))
        .route(routes::HOME_PATH, get(home).post(create_reminder))
        .route("/reminders/delete/{id}", post(remove_reminder))
        .route("/healthcheck", get(healthcheck))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl+C, shutting down"),
            Err(error) => {
                log::error!("Failed to install Ctrl+C handler: {}", error);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::SignalKind;

        match signal::unix::signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(error) => {
                log::error!("Failed to install signal handler: {}", error);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests;
