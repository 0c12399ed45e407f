// ABOUTME: Shared utility modules used across the crate
// ABOUTME: Currently holds the pooled HTTP client helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

/// Shared HTTP client with connection pooling and timeout configuration
pub mod http_client;
