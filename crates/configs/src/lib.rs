//! TOML configuration for the vehicles and maps services.
//!
//! Loaded from `config.toml` (override with `CONFIG_PATH`); individual values
//! fall back to environment variables so the services run without any file.

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub maps_server: MapsServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pricing: EndpointConfig,
    #[serde(default)]
    pub maps: EndpointConfig,
}

/// Bind address for the vehicles HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Bind address for the maps stub server.
#[derive(Debug, Clone, Deserialize)]
pub struct MapsServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for MapsServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 9191 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_acquire_timeout() -> u64 { 30 }

/// Base URL of a downstream collaborator (pricing or maps).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EndpointConfig {
    #[serde(default)]
    pub base_url: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` if present, otherwise start from defaults; then fill
    /// any missing values from environment variables and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.pricing.normalize_from_env("PRICING_URL", "http://localhost:8082");
        self.maps.normalize_from_env("MAPS_URL", "http://localhost:9191");
        self.database.validate()?;
        self.pricing.validate("pricing")?;
        self.maps.validate("maps")?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            _ => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URL from `DATABASE_URL` when the TOML left it empty; an
    /// in-memory SQLite store is the final fallback, matching the embedded
    /// database the service was designed around.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl EndpointConfig {
    pub fn normalize_from_env(&mut self, env_var: &str, fallback: &str) {
        if self.base_url.trim().is_empty() {
            self.base_url = std::env::var(env_var).unwrap_or_else(|_| fallback.to_string());
        }
        // Trailing slashes would double up when joining request paths.
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("{}.base_url must start with http:// or https://", name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().expect("defaults should validate");
        assert!(!cfg.database.url.is_empty());
        assert_eq!(cfg.pricing.base_url, "http://localhost:8082");
        assert_eq!(cfg.maps.base_url, "http://localhost:9191");
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let mut ep = EndpointConfig { base_url: "http://pricing:8082/".into() };
        ep.normalize_from_env("UNSET_TEST_VAR", "http://fallback");
        assert_eq!(ep.base_url, "http://pricing:8082");
    }

    #[test]
    fn rejects_zero_port() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn parses_full_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [maps_server]
            host = "0.0.0.0"
            port = 9191

            [database]
            url = "sqlite://vehicles.db?mode=rwc"

            [pricing]
            base_url = "http://pricing:8082"

            [maps]
            base_url = "http://maps:9191"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.maps_server.port, 9191);
        assert_eq!(cfg.database.max_connections, 10);
    }
}
