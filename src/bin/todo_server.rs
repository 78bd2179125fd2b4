//! Runs the todo HTTP service.
//!
//! Usage:
//!
//! ```text
//! todo_server
//! ```
//!
//! Configuration comes from the environment, optionally seeded from a
//! `.env` file in the working directory; see
//! [`AppConfig::from_env`](todo_service::config::AppConfig::from_env). The
//! server bootstraps the `todos` table, then serves until Ctrl-C or
//! `SIGTERM`.

use std::sync::Arc;

use thiserror::Error;
use todo_service::{
    api,
    config::{AppConfig, ConfigError},
    telemetry,
    todo::{
        adapters::postgres::{PostgresTodoRepository, build_pool},
        ports::TodoRepositoryError,
        services::TodoService,
    },
};
use tokio::net::TcpListener;

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("logging: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
    #[error("connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("schema bootstrap: {0}")]
    Schema(#[from] TodoRepositoryError),
    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    if let Err(err) = run(config, dotenv_loaded).await {
        tracing::error!(error = %err, "todo server stopped with an error");
        return Err(err);
    }
    Ok(())
}

async fn run(config: AppConfig, dotenv_loaded: bool) -> Result<(), ServerError> {
    tracing::info!(
        bind = %config.bind_address(),
        max_connections = config.database.pool.max_connections,
        dotenv_loaded,
        "starting todo server"
    );

    let database_url = config.database.url.clone();
    let pool_settings = config.database.pool;
    let pool =
        tokio::task::spawn_blocking(move || build_pool(&database_url, &pool_settings))
            .await
            .map_err(std::io::Error::other)??;

    let repository = PostgresTodoRepository::new(pool);
    repository.ensure_schema().await?;
    tracing::info!("database schema ready");

    let app = api::router(TodoService::new(Arc::new(repository)));
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("todo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
