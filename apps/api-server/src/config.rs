//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blogsite_infra::{JwtConfig, UploadConfig};

#[cfg(feature = "postgres")]
use blogsite_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub cors_allowed_origins: Vec<String>,
    pub uploads: UploadConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_env("DB_MIN_CONNECTIONS").unwrap_or(10),
        });

        let upload_defaults = UploadConfig::default();
        let uploads = UploadConfig {
            dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(upload_defaults.dir),
            public_path: env::var("UPLOAD_PUBLIC_PATH").unwrap_or(upload_defaults.public_path),
            max_bytes: parse_env("UPLOAD_MAX_BYTES").unwrap_or(upload_defaults.max_bytes),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_env("PORT").unwrap_or(5000),
            #[cfg(feature = "postgres")]
            database,
            jwt: JwtConfig::from_env(),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
            uploads,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Split a comma separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" http://localhost:5173/ , ,https://blog.example.com"),
            vec![
                "http://localhost:5173".to_string(),
                "https://blog.example.com".to_string()
            ]
        );
        assert!(parse_origins("").is_empty());
    }
}
