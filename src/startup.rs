//! Process bootstrap: logging and the database connection.

use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error};

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
///
/// Call once from the embedding binary before anything logs.
pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
