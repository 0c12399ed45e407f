// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ClientConfig at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! Environment-based configuration management.

use crate::constants::env_config;
use crate::favorites::FavoritesStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operational logging
    #[default]
    Info,
    /// Verbose debugging
    Debug,
    /// Maximum verbosity
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// True for production deployments
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the recipe discovery client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Recipe directory base `URL`
    pub directory_base_url: String,
    /// Request timeout for directory calls (seconds)
    pub http_timeout_secs: u64,
    /// Connection timeout for directory calls (seconds)
    pub http_connect_timeout_secs: u64,
    /// Location of the persisted favorites blob
    pub favorites_path: PathBuf,
    /// Log level for the crate's own output
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the favorites path cannot be resolved (no
    /// platform data directory and no `LADLE_FAVORITES_PATH`).
    pub fn from_env() -> Result<Self> {
        let config = Self {
            directory_base_url: env_config::mealdb_base_url(),
            http_timeout_secs: env_config::http_timeout_secs(),
            http_connect_timeout_secs: env_config::http_connect_timeout_secs(),
            favorites_path: FavoritesStore::default_path()
                .context("resolving favorites store path")?,
            log_level: LogLevel::from_str_or_default(
                &env::var("LADLE_LOG_LEVEL").unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
        };

        info!(
            directory = %config.directory_base_url,
            favorites = %config.favorites_path.display(),
            environment = %config.environment,
            "configuration loaded"
        );

        Ok(config)
    }
}
