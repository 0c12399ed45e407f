// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Singleton client for directory API calls plus a custom-timeout constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

use crate::constants::env_config;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Global shared HTTP client for directory API calls
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// The client uses connection pooling and the configured request/connect
/// timeouts (`LADLE_HTTP_TIMEOUT_SECS`, `LADLE_HTTP_CONNECT_TIMEOUT_SECS`).
/// Prefer this over creating new clients per call.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(env_config::http_timeout_secs()))
            .connect_timeout(Duration::from_secs(env_config::http_connect_timeout_secs()))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Create a new HTTP client with custom timeout settings
///
/// Use this when a caller needs timeouts that differ from the shared
/// client's defaults (e.g. tests against a local stub server).
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
