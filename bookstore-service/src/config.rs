//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `BOOKSTORE_`, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/bookstore/{service_name}/config.toml
//! 4. System directory: /etc/bookstore/{service_name}/config.toml
//! 5. Default values
//!
//! For example `BOOKSTORE_SERVICE__PORT=8080` overrides `service.port`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const CONFIG_PREFIX: &str = "bookstore";
const ENV_PREFIX: &str = "BOOKSTORE_";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Persistence backend
    #[serde(default)]
    pub store: StoreConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            port: default_port(),
            log_level: default_log_level(),
            timeout_secs: default_timeout(),
            environment: default_environment(),
        }
    }
}

impl ServiceConfig {
    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Enable gzip compression of responses
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS mode: permissive, restrictive or disabled
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            compression: true,
            cors_mode: default_cors_mode(),
        }
    }
}

impl MiddlewareConfig {
    /// Body limit in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

/// Which persistence backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Volatile, process-local
    #[default]
    Memory,
    /// JSON file at `store.path`
    File,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: StoreBackend,

    /// Data file for the file backend
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

// Default value functions
fn default_service_name() -> String {
    "bookstore".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_mb() -> usize {
    10 // 10 MB
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("books.json")
}

impl Config {
    /// Load configuration from all sources
    ///
    /// The service name used for config directory lookup is inferred from the
    /// binary name.
    pub fn load() -> Result<Self> {
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(default_service_name);

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later files override earlier ones
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        Ok(Self::with_env(figment).extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the directory search; environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()));

        Ok(Self::with_env(figment).extract()?)
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Candidate config file paths, highest priority first
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_PREFIX);
        let config_file_path = Path::new(service_name).join("config.toml");
        if let Some(path) = xdg_dirs.find_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_PREFIX)
                .join(service_name)
                .join("config.toml"),
        );

        paths
    }

    /// Address the HTTP server binds to
    pub fn listen_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.service.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.name, "bookstore");
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
        assert_eq!(config.middleware.body_limit_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_load_from_file_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "bookstore.toml",
                r#"
                [service]
                port = 8080
                log_level = "debug"

                [store]
                backend = "file"
                path = "/var/lib/bookstore/books.json"
                "#,
            )?;
            jail.set_env("BOOKSTORE_SERVICE__PORT", "9090");
            jail.set_env("BOOKSTORE_MIDDLEWARE__CORS_MODE", "restrictive");

            let config = Config::load_from("bookstore.toml").expect("config loads");
            assert_eq!(config.service.port, 9090);
            assert_eq!(config.service.log_level, "debug");
            assert_eq!(config.service.name, "bookstore");
            assert_eq!(config.middleware.cors_mode, "restrictive");
            assert_eq!(config.store.backend, StoreBackend::File);
            assert_eq!(
                config.store.path,
                PathBuf::from("/var/lib/bookstore/books.json")
            );
            Ok(())
        });
    }

    #[test]
    fn test_invalid_backend_is_config_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[store]\nbackend = \"mongo\"\n")?;
            let err = Config::load_from("bad.toml").unwrap_err();
            assert!(matches!(err, crate::error::Error::Config(_)));
            Ok(())
        });
    }
}
