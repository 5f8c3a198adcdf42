mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::auto_close,
    service::notification::NotificationService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let notifier = NotificationService::new(http_client, config.notify_webhook_url.clone());

    tracing::info!("Starting server");

    // Start the prayer auto-close scheduler
    let scheduler_db = db.clone();
    let scheduler_notifier = notifier.clone();
    tokio::spawn(async move {
        if let Err(e) = auto_close::start_scheduler(scheduler_db, scheduler_notifier).await {
            tracing::error!("Prayer auto-close scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, notifier, config.strict_ownership))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
