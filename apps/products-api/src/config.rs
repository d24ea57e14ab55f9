//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=4000
        let cors = CorsConfig::from_env()?; // FRONTEND_URL is required

        Ok(Self {
            app: app_info!(),
            database,
            server,
            cors,
            environment,
        })
    }
}
