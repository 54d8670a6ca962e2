//! Application state - shared across all handlers.

use std::sync::Arc;

use blogsite_core::ports::{
    BannerStore, BlogRepository, PasswordService, TokenService, UserRepository,
};
use blogsite_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService, LocalBannerStore, UploadConfig,
};

use crate::config::AppConfig;

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub banners: Arc<dyn BannerStore>,
    pub uploads: UploadConfig,
}

/// Failure while building the state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("database connection failed: {0}")]
    Database(String),
}

impl AppState {
    /// Build the application state with the configured implementations.
    ///
    /// Without `DATABASE_URL` the in-memory store is used.
    pub async fn new(config: &AppConfig) -> Result<Self, StateError> {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            use blogsite_infra::{PostgresBlogRepository, PostgresUserRepository};

            let conn = blogsite_infra::database::connect(db_config)
                .await
                .map_err(|e| StateError::Database(e.to_string()))?;

            tracing::info!("Application state initialized (postgres)");
            return Ok(Self::with_repositories(
                Arc::new(PostgresUserRepository::new(conn.clone())),
                Arc::new(PostgresBlogRepository::new(conn)),
                config.jwt.clone(),
                config.uploads.clone(),
            ));
        }

        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        Ok(Self::in_memory(config.jwt.clone(), config.uploads.clone()))
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(jwt: JwtConfig, uploads: UploadConfig) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBlogRepository::new()),
            jwt,
            uploads,
        )
    }

    fn with_repositories(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        jwt: JwtConfig,
        uploads: UploadConfig,
    ) -> Self {
        Self {
            users,
            blogs,
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
            banners: Arc::new(LocalBannerStore::new(uploads.clone())),
            uploads,
        }
    }
}
