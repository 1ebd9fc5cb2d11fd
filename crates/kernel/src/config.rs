//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Role;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Navigation YAML file. When None, the built-in navigation is used.
    pub nav_config_path: Option<PathBuf>,

    /// Role used when a request does not name one (default: admin).
    pub default_role: Role,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Navigation file named by `STMS_NAV_CONFIG`, without reading the rest
    /// of the configuration.
    pub fn nav_config_path_from_env() -> Option<PathBuf> {
        Self::nav_config_path_from_lookup(|key| env::var(key).ok())
    }

    pub fn nav_config_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        lookup("STMS_NAV_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let nav_config_path = Self::nav_config_path_from_lookup(&lookup);

        let default_role = lookup("STMS_DEFAULT_ROLE")
            .unwrap_or_else(|| "admin".to_string())
            .parse()
            .context("STMS_DEFAULT_ROLE must name a portal role")?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            nav_config_path,
            default_role,
            cors_allowed_origins,
        })
    }
}
