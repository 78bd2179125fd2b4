//! Shared helpers for `PostgreSQL` integration tests.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use eyre::WrapErr;
use tokio::sync::{Mutex, MutexGuard};
use todo_service::todo::adapters::postgres::{
    PoolSettings, PostgresTodoRepository, TodoPgPool, build_pool,
};

/// Environment variable naming the test database.
pub const DATABASE_URL_VAR: &str = "TODO_TEST_DATABASE_URL";

static TABLE_LOCK: Mutex<()> = Mutex::const_new(());

/// A repository over a freshly truncated `todos` table.
pub struct PgContext {
    pub pool: TodoPgPool,
    pub repository: PostgresTodoRepository,
    _lock: MutexGuard<'static, ()>,
}

/// Settings used by the shared context: small pool, short checkout wait.
#[must_use]
pub fn test_pool_settings() -> PoolSettings {
    PoolSettings {
        max_connections: 2,
        connection_timeout: Duration::from_millis(500),
        idle_timeout: None,
        statement_timeout: Some(Duration::from_secs(5)),
    }
}

/// Connects to the test database and empties the `todos` table.
///
/// Returns `Ok(None)` when no test database is configured.
///
/// # Errors
///
/// Returns an error when the database is configured but unusable.
pub async fn pg_context(settings: PoolSettings) -> Result<Option<PgContext>, eyre::Report> {
    let Some(url) = std::env::var(DATABASE_URL_VAR).ok().filter(|url| !url.is_empty()) else {
        return Ok(None);
    };
    let lock = TABLE_LOCK.lock().await;

    let reset_url = url.clone();
    let pool = tokio::task::spawn_blocking(move || -> Result<TodoPgPool, eyre::Report> {
        let pool = build_pool(&url, &settings).wrap_err("build test pool")?;
        Ok(pool)
    })
    .await
    .wrap_err("join pool setup")??;

    let repository = PostgresTodoRepository::new(pool.clone());
    repository
        .ensure_schema()
        .await
        .wrap_err("bootstrap todos schema")?;

    tokio::task::spawn_blocking(move || -> Result<(), eyre::Report> {
        let mut connection =
            PgConnection::establish(&reset_url).wrap_err("connect for table reset")?;
        connection
            .batch_execute("TRUNCATE todos RESTART IDENTITY")
            .wrap_err("truncate todos")?;
        Ok(())
    })
    .await
    .wrap_err("join table reset")??;

    Ok(Some(PgContext {
        pool,
        repository,
        _lock: lock,
    }))
}
