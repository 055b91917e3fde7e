//! Webhook server binary for the Trellis synchronization engine.
//!
//! Wires the `PostgreSQL` board repositories into the commit synchronization
//! service and serves the webhook endpoint over HTTP.
//!
//! Configuration is read from the environment:
//!
//! - `DATABASE_URL` — `PostgreSQL` connection string (required)
//! - `BIND_ADDR` — listen address, defaults to `127.0.0.1:8790`
//! - `DEFAULT_PROJECT_KEY` — fallback key for projects without one,
//!   defaults to `TASK`
//!
//! Logging verbosity follows `RUST_LOG` via the standard env filter.

use std::env;
use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trellis::board::adapters::postgres::{
    BoardPgPool, PostgresProjectRepository, PostgresTaskRepository,
};
use trellis::board::domain::{BoardDomainError, ProjectKey};
use trellis::sync::adapters::http::router;
use trellis::sync::domain::{DEFAULT_PROJECT_KEY, StatusPolicy, SyncConfig};
use trellis::sync::services::CommitSyncService;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8790";

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
enum ServerError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid DEFAULT_PROJECT_KEY: {0}")]
    InvalidProjectKey(#[from] BoardDomainError),
    #[error("failed to initialize connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let database_url =
        env::var("DATABASE_URL").map_err(|_| ServerError::MissingEnv("DATABASE_URL"))?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
    let default_key =
        env::var("DEFAULT_PROJECT_KEY").unwrap_or_else(|_| DEFAULT_PROJECT_KEY.to_owned());

    let config = SyncConfig::new(ProjectKey::new(default_key)?, StatusPolicy::default());
    let pool: BoardPgPool = Pool::builder().build(ConnectionManager::<PgConnection>::new(
        database_url,
    ))?;

    let service = Arc::new(CommitSyncService::new(
        Arc::new(PostgresProjectRepository::new(pool.clone())),
        Arc::new(PostgresTaskRepository::new(pool)),
        Arc::new(DefaultClock),
        config,
    ));

    let listener =
        tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;
    info!(addr = %bind_addr, "webhook server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("webhook server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown signal handler");
    }
}
