//! Shared state handed to every handler.

use std::time::Duration;

use crate::config::{JwtConfig, Settings};
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Cloning is cheap: services and the pool share `Arc`s internally.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Direct pool access for the health checks
    pub db_pool: AsyncDbPool,
    pub jwt_config: JwtConfig,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pool: AsyncDbPool, settings: &Settings) -> Self {
        let repos = Repositories::new(pool.clone());
        Self {
            services: Services::new(repos, settings),
            db_pool: pool,
            jwt_config: settings.jwt.clone(),
            request_timeout: settings.server.request_timeout(),
        }
    }
}
