//! Products API - REST server over PostgreSQL

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| {
            error!("Error al conectar a la BD: {}", e);
            eyre::eyre!("PostgreSQL connection failed: {}", e)
        })?;
    info!("Conexión exitosa a la BD");

    run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let root = health_router(state.config.app.clone()).merge(api::health::router(state.clone()));
    let app = axum_helpers::create_router::<openapi::ApiDoc>(
        api::routes(&state),
        root,
        &state.config.cors,
    )
    .await?;

    info!(
        "REST API funcionando en el puerto {}",
        state.config.server.port
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        if let Err(e) = db.close().await {
            error!("Error closing database: {}", e);
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
