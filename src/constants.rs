// ABOUTME: Application constants and configuration values organized by domain
// ABOUTME: Environment accessors, serving bounds, and quantity display tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! Centralized constants used throughout the crate.
//!
//! Grouped into domain submodules so call sites read as
//! `constants::servings::MAX_SERVINGS` rather than bare magic numbers.

use std::env;

/// Environment variable accessors with defaults
pub mod env_config {
    use super::env;

    /// Get the recipe directory base `URL` from environment or default
    #[must_use]
    pub fn mealdb_base_url() -> String {
        env::var("LADLE_MEALDB_BASE_URL")
            .unwrap_or_else(|_| super::defaults::MEALDB_BASE_URL.to_owned())
    }

    /// Get the HTTP request timeout in seconds from environment or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var("LADLE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::defaults::HTTP_TIMEOUT_SECS)
    }

    /// Get the HTTP connect timeout in seconds from environment or default
    #[must_use]
    pub fn http_connect_timeout_secs() -> u64 {
        env::var("LADLE_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::defaults::HTTP_CONNECT_TIMEOUT_SECS)
    }

    /// Get an explicit favorites store path from the environment, if set
    #[must_use]
    pub fn favorites_path() -> Option<String> {
        env::var("LADLE_FAVORITES_PATH").ok()
    }
}

/// Default values applied when the environment does not override them
pub mod defaults {
    /// Public TheMealDB JSON API base (free-tier key `1`)
    pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

    /// Request timeout for directory calls (seconds)
    pub const HTTP_TIMEOUT_SECS: u64 = 30;

    /// Connection timeout for directory calls (seconds)
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// File name of the persisted favorites blob inside the data directory
    pub const FAVORITES_FILE: &str = "favorites.json";

    /// Application directory name under the platform data dir
    pub const APP_DIR: &str = "ladle";
}

/// Serving-count bounds and baseline
pub mod servings {
    /// Baseline serving count recipes are written for
    pub const DEFAULT_SERVINGS: u32 = 4;

    /// Lower bound for the user-adjustable serving count
    pub const MIN_SERVINGS: u32 = 1;

    /// Upper bound for the user-adjustable serving count
    pub const MAX_SERVINGS: u32 = 20;
}

/// Quantity display formatting tables
pub mod quantity {
    /// Absolute tolerance when matching a fractional part to a glyph
    pub const FRACTION_TOLERANCE: f64 = 0.01;

    /// Common culinary fractions rendered as single glyphs
    pub const FRACTION_GLYPHS: &[(f64, &str)] =
        &[(0.5, "½"), (0.25, "¼"), (0.75, "¾"), (1.0 / 3.0, "⅓")];
}

/// Persisted favorites schema versions
pub mod schema {
    /// Current on-disk favorites blob version
    pub const FAVORITES_VERSION: u32 = 1;
}
