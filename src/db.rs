use std::time::Duration;

use migration::Migrator;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

const SQLITE_PRAGMAS: &[&str] =
    &["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA cache_size=-64000"];

// Long enough that the pool never recycles an in-memory database's only connection.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(10 * 365 * 86_400);

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(connect_options(database_url)).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        for pragma in SQLITE_PRAGMAS {
            db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
                .await?;
        }
    }

    Migrator::up(&db, None).await?;
    tracing::debug!("database migrations applied");
    Ok(db)
}

pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);
    // An in-memory SQLite database lives and dies with its connection.
    if database_url.contains(":memory:") {
        opts.max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    }
    opts
}
