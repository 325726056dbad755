use studynotes_core::identity::{DEFAULT_ALLOWED_EMAIL_DOMAIN, DEFAULT_MIN_PASSWORD_LENGTH};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Email suffix accepted at signup/login (default: `@stud.ase.ro`).
    pub allowed_email_domain: String,
    /// Minimum accepted password length (default: `6`).
    pub min_password_length: usize,
    /// Directory attachment blobs are written to.
    pub attachments_dir: String,
    /// Base URL attachment paths are appended to when building public URLs.
    pub attachments_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                       |
    /// |-------------------------|-------------------------------|
    /// | `HOST`                  | `0.0.0.0`                     |
    /// | `PORT`                  | `3000`                        |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                          |
    /// | `ALLOWED_EMAIL_DOMAIN`  | `@stud.ase.ro`                |
    /// | `MIN_PASSWORD_LENGTH`   | `6`                           |
    /// | `ATTACHMENTS_DIR`       | `attachments_data`            |
    /// | `ATTACHMENTS_BASE_URL`  | `http://localhost:3000/files` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let allowed_email_domain = std::env::var("ALLOWED_EMAIL_DOMAIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_EMAIL_DOMAIN.into());

        let min_password_length: usize = std::env::var("MIN_PASSWORD_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_PASSWORD_LENGTH.to_string())
            .parse()
            .expect("MIN_PASSWORD_LENGTH must be a valid usize");

        let attachments_dir =
            std::env::var("ATTACHMENTS_DIR").unwrap_or_else(|_| "attachments_data".into());

        let attachments_base_url = std::env::var("ATTACHMENTS_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/files".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            allowed_email_domain,
            min_password_length,
            attachments_dir,
            attachments_base_url,
        }
    }
}
