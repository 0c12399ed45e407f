// ABOUTME: Unified error handling system with standard error codes
// ABOUTME: AppError for the crate surface, ProviderError for directory client faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Unified Error Handling
//!
//! Two layers of error types, mirroring the fault taxonomy the crate
//! exposes:
//!
//! - [`ProviderError`] — faults from the external recipe directory
//!   (transport, decode, malformed payloads). These are caught at the
//!   search boundary and logged, never raised to callers.
//! - [`AppError`] — the crate-level error with an [`ErrorCode`], used where
//!   a fault genuinely must surface (storage writes, configuration).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias for crate-level operations
pub type AppResult<T> = Result<T, AppError>;

/// Result alias for recipe directory operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// External directory call failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Persisted state could not be written
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Data could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Stable string form of the code, matching the serde rename
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crate-level error carrying a standard code and a human-readable message
#[derive(Debug, Clone)]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable description of the fault
    pub message: String,
}

impl AppError {
    /// Create a new error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a "resource not found" error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Create an "external service" error
    #[must_use]
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Create a "configuration" error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Create a "storage" error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Create a "serialization" error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Create an "internal" error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Errors from recipe directory provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport failure (network, DNS, timeout)
    #[error("transport failure talking to {provider}: {source}")]
    Transport {
        /// Provider that was being called
        provider: &'static str,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Directory returned a non-success HTTP status
    #[error("{provider} returned HTTP {status}")]
    ApiStatus {
        /// Provider that was being called
        provider: &'static str,
        /// HTTP status code returned
        status: u16,
    },

    /// Response body could not be decoded into the expected shape
    #[error("failed to decode {provider} response: {detail}")]
    Decode {
        /// Provider that was being called
        provider: &'static str,
        /// Description of the decode failure
        detail: String,
    },

    /// Provider configuration is unusable (e.g. malformed base URL)
    #[error("provider configuration invalid: {detail}")]
    InvalidConfig {
        /// Description of the configuration fault
        detail: String,
    },
}

impl ProviderError {
    /// True when the fault is transient and a retry could succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ApiStatus { .. })
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        Self::external_service(err.to_string())
    }
}
