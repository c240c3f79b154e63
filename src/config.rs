// src/config.rs
use crate::presentation::http::swagger::SwaggerConfig;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    swagger: SwaggerConfig,
    snapshot_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_snapshot_path() -> String {
    "spec/swagger.json".into()
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// demo service defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let snapshot_path =
            env::var("SWAGGER_SNAPSHOT_PATH").unwrap_or_else(|_| default_snapshot_path());

        let base_path = var_or("API_BASE_PATH", "/");
        if !base_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "API_BASE_PATH must start with '/', got {base_path:?}"
            )));
        }

        let swagger = SwaggerConfig {
            name: var_or("API_NAME", "Books service"),
            version: var_or("API_VERSION", "0.0.1"),
            description: var_or("API_DESCRIPTION", "Books service description"),
            host: var_or("API_HOST", "localhost:3000"),
            base_path,
        };

        Ok(Self {
            listen_addr,
            swagger,
            snapshot_path,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Static metadata for the generated Swagger document.
    pub fn swagger(&self) -> &SwaggerConfig {
        &self.swagger
    }

    pub fn snapshot_path(&self) -> &str {
        &self.snapshot_path
    }
}
