//! Construction of the shared `PostgreSQL` connection pool.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Sizing and timeout settings for [`TodoPgPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// How long a checkout waits for a free connection before failing.
    pub connection_timeout: Duration,
    /// How long a surplus idle connection is kept open.
    pub idle_timeout: Option<Duration>,
    /// Server-side limit applied to every statement, if any.
    pub statement_timeout: Option<Duration>,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connection_timeout: Duration::from_millis(2_000),
            idle_timeout: Some(Duration::from_millis(30_000)),
            statement_timeout: None,
        }
    }
}

/// Applies per-connection session settings when a connection is opened.
#[derive(Debug, Clone, Copy)]
struct SessionCustomizer {
    statement_timeout: Duration,
}

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SessionCustomizer {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        // SET does not accept bind parameters; the value is an integer we
        // produced ourselves.
        let millis = self.statement_timeout.as_millis();
        conn.batch_execute(&format!("SET statement_timeout = {millis}"))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the connection pool for `database_url`.
///
/// One connection is opened eagerly so an unreachable database is reported
/// at startup rather than on the first request.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connection cannot be established
/// within the connection timeout.
pub fn build_pool(database_url: &str, settings: &PoolSettings) -> Result<TodoPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let mut builder = Pool::builder()
        .max_size(settings.max_connections)
        .min_idle(Some(1))
        .connection_timeout(settings.connection_timeout)
        .idle_timeout(settings.idle_timeout);

    if let Some(statement_timeout) = settings.statement_timeout {
        builder = builder.connection_customizer(Box::new(SessionCustomizer { statement_timeout }));
    }

    builder.build(manager)
}
