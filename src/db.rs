use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseSettings;

/// Open the connection pool described by `settings`.
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .sqlx_logging(settings.log_statements);

    let conn = Database::connect(options).await?;
    tracing::info!(
        backend = ?conn.get_database_backend(),
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(conn)
}
