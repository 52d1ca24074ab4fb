//! Database connection pool

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// An in-memory SQLite database only lives as long as its connection, so
/// its pool is pinned to exactly one.
pub fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.starts_with("sqlite::memory:") || database_url.contains("mode=memory")
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);

    if is_in_memory_sqlite(database_url) {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(max_connections.max(1));
    }

    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    info!(max_connections, "Connecting to database...");
    Database::connect(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_sqlite_detection() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite://file:apk?mode=memory&cache=shared"));
        assert!(!is_in_memory_sqlite("sqlite://./apk.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://apk@localhost:5432/apk"));
    }
}
