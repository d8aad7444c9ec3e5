use core::fmt;
use std::env;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("{}", e)));

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Dev,
    Prod,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Dev => write!(f, "development"),
            Runtime::Prod => write!(f, "production"),
        }
    }
}

impl From<String> for Runtime {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "PRODUCTION" => Runtime::Prod,
            _ => Runtime::Dev,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(skip, default = "default_runtime")]
    pub runtime: Runtime,
}

fn default_address() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3333
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_log_filter() -> String {
    "info,sqlx::query=debug".into()
}

fn default_runtime() -> Runtime {
    Runtime::Dev
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Layers `config/<runtime>.toml`, `DUO__` prefixed variables and finally
    /// the plain `PORT` and `DATABASE_URL` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let runtime: Runtime = env::var("ENVIRONMENT").unwrap_or_default().into();

        let builder = Config::builder()
            .add_source(File::with_name(&format!("config/{}", runtime)).required(false))
            .add_source(
                Environment::with_prefix("DUO")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?;

        let mut config = Self::from_builder(builder)?;
        config.runtime = runtime;

        Ok(config)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
