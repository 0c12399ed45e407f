// ABOUTME: Configuration management for the recipe discovery client
// ABOUTME: Environment-driven settings; no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! Configuration management.
//!
//! All configuration is environment-variable driven, resolved once at
//! startup via [`environment::ClientConfig::from_env`].

/// Environment-based configuration parsing and runtime settings
pub mod environment;

pub use environment::{ClientConfig, Environment, LogLevel};
