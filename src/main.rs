use leadgen::{config::Settings, create_app, db, AppState};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before reading settings
    let _ = dotenvy::dotenv();
    let settings = Settings::from_env()?;

    let level = if settings.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting {} v{}", settings.app_name, settings.version);

    let conn = db::connect(&settings.database).await?;
    let addr = settings.bind_address();
    let app = create_app(AppState::new(conn, settings));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down application");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "failed to listen for shutdown signal");
    }
}
