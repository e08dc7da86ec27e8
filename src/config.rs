//! Application configuration module
//!
//! Handles loading and validating configuration from environment variables.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Origin of the production storefront allowed to post forms
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://www.garimaenterprises.net";

/// Default SMTP relay (implicit TLS on 465)
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::new(0, 0, 0, 0), // Bind to 0.0.0.0 for Railway/Docker
            port: 3000,
        }
    }
}

/// Mail account and relay configuration
#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    /// `None` keeps the transport's implicit-TLS default
    pub smtp_port: Option<u16>,
    pub username: String,
    pub password: String,
    /// Mailbox that receives every notification
    pub operator_address: String,
}

// Hand-written so the password never reaches the logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("operator_address", &self.operator_address)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| var(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()));

        let server = ServerConfig {
            host: match var("HOST") {
                Some(h) => parse_value("HOST", &h)?,
                None => ServerConfig::default().host,
            },
            port: match var("PORT") {
                Some(p) => parse_value("PORT", &p)?,
                None => ServerConfig::default().port,
            },
        };

        let username = required("EMAIL_USER")?;
        let mail = MailConfig {
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: var("SMTP_PORT")
                .map(|p| parse_value("SMTP_PORT", &p))
                .transpose()?,
            password: required("EMAIL_PASS")?,
            operator_address: var("OPERATOR_EMAIL").unwrap_or_else(|| username.clone()),
            username,
        };

        let cors = CorsConfig {
            allowed_origin: var("ALLOWED_ORIGIN")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| CorsConfig::default().allowed_origin),
        };

        Ok(Self { server, mail, cors })
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("{key}={raw}")))
}
