//! HTTP server initialization and runtime setup.
//!
//! Wires the database pool, migrations, repository, link service, and Axum
//! server lifecycle together.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        CodeGenerator::new(config.code_length),
    ));

    let state = AppState::new(link_service, config.base_url);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
